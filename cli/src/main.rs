use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use imol::prelude::{decode, encode, ByteOrder, Listing};
use std::path::{Path, PathBuf};

mod doc;

use doc::ListingDoc;

#[derive(Parser)]
#[command(name = "imol")]
#[command(about = "Inspect, build and convert IMOL model listings")]
struct Cli {
    /// Byte order of the files read and written by `info`, `dump` and `build`
    #[arg(long, value_enum, global = true, default_value_t = Order::Native)]
    byte_order: Order,

    /// Refuse to allocate any single buffer larger than this many bytes while loading
    #[arg(long, global = true)]
    max_alloc: Option<u64>,

    /// Log filter, e.g. `debug` or `imol=trace`; falls back to RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the models of a listing and their polygon counts
    Info {
        input: PathBuf,
    },
    /// Print a listing as JSON; names that are not terminated UTF-8 text
    /// also carry their exact bytes in `name_bytes`
    Dump {
        input: PathBuf,
        /// Write the JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build a listing from a JSON description
    Build {
        input: PathBuf,
        output: PathBuf,
    },
    /// Re-encode a listing with a different byte order
    Convert {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, value_enum)]
        from: Order,
        #[arg(long, value_enum)]
        to: Order,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Order {
    Native,
    Little,
    Big,
}

impl From<Order> for ByteOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Native => ByteOrder::Native,
            Order::Little => ByteOrder::Little,
            Order::Big => ByteOrder::Big,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&resolve_log_level(cli.log_level.as_deref()));

    match &cli.command {
        Command::Info { input } => info(input, &cli),
        Command::Dump { input, output } => dump(input, output.as_deref(), &cli),
        Command::Build { input, output } => build(input, output, &cli),
        Command::Convert { input, output, from, to } => convert(input, output, &cli, *from, *to),
    }
}

fn resolve_log_level(cli_level: Option<&str>) -> String {
    if let Some(level) = cli_level {
        return level.to_string();
    }

    if let Ok(level) = std::env::var("RUST_LOG") {
        if !level.trim().is_empty() {
            return level;
        }
    }

    "warn".to_string()
}

fn init_logger(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder.target(env_logger::Target::Stderr);
    builder.filter_level(log::LevelFilter::Warn);
    builder.parse_filters(level);
    builder.format(|buf, record| {
        use std::io::Write;
        let module = record.module_path().unwrap_or(record.target());
        writeln!(
            buf,
            "{} [{}] {}: {}",
            buf.timestamp_millis(),
            record.level(),
            module,
            record.args()
        )
    });

    if let Err(err) = builder.try_init() {
        eprintln!("Failed to initialize logger: {}", err);
    }
}

fn decode_config(cli: &Cli, order: Order) -> decode::Config {
    decode::Config {
        byte_order: order.into(),
        max_alloc: cli.max_alloc,
    }
}

fn load(path: &Path, cli: &Cli, order: Order) -> Result<Listing> {
    imol::io::load_with(path, decode_config(cli, order))
        .with_context(|| format!("Failed to load listing: {}", path.display()))
}

fn store(path: &Path, listing: &Listing, order: Order) -> Result<()> {
    let cfg = encode::Config { byte_order: order.into() };
    imol::io::store_with(path, listing, cfg)
        .with_context(|| format!("Failed to store listing: {}", path.display()))
}

fn info(input: &Path, cli: &Cli) -> Result<()> {
    let listing = load(input, cli, cli.byte_order)?;

    println!("{}: {} models, {} bytes", input.display(), listing.num_models(), listing.encoded_len());
    for (i, model) in listing.get_models().iter().enumerate() {
        let warning = if model.is_terminated() { "" } else { " (unterminated name)" };
        println!(
            "  [{}] {:?}: {} polygons{}",
            i,
            model.get_name_lossy(),
            model.num_polygons(),
            warning
        );
    }

    listing.release();
    Ok(())
}

fn dump(input: &Path, output: Option<&Path>, cli: &Cli) -> Result<()> {
    let listing = load(input, cli, cli.byte_order)?;
    let json = serde_json::to_string_pretty(&ListingDoc::from(&listing))
        .context("Failed to serialize listing to JSON")?;
    listing.release();

    match output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("Failed to write JSON: {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn build(input: &Path, output: &Path, cli: &Cli) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read JSON: {}", input.display()))?;
    let doc: ListingDoc = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse JSON: {}", input.display()))?;

    let listing = Listing::from(doc);
    store(output, &listing, cli.byte_order)?;
    log::info!("Wrote {} models to {}", listing.num_models(), output.display());

    listing.release();
    Ok(())
}

fn convert(input: &Path, output: &Path, cli: &Cli, from: Order, to: Order) -> Result<()> {
    if from == to {
        log::warn!("Source and target byte order are both {:?}; the output will be a plain copy", from);
    }

    let listing = load(input, cli, from)?;
    store(output, &listing, to)?;
    log::info!(
        "Converted {} models from {:?} to {:?} byte order",
        listing.num_models(),
        from,
        to
    );

    listing.release();
    Ok(())
}
