//! File I/O for listings.
//!
//! Every function here opens the file, runs the codec over a buffered handle
//! and closes the handle on return, whether the operation succeeded or not.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::core::bit_coder::{IoByteReader, IoByteWriter, ReaderErr, WriterErr};
use crate::core::shared::AllocErr;
use crate::prelude::{ConfigType, Listing};
use crate::{decode, encode};

/// The kind of failure of a load or store, without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AllocationFailure,
    OpenFailure,
    ReadFailure,
    WriteFailure,
}

#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Failed to allocate memory for the listing: {0}")]
    AllocationFailure(AllocErr),

    #[error("Failed to open {}: {}", .path.display(), .source)]
    OpenFailure { path: PathBuf, source: io::Error },

    #[error("Failed to read listing: {0}")]
    ReadFailure(ReaderErr),

    #[error("Failed to write listing: {0}")]
    WriteFailure(WriterErr),
}

impl Err {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Err::AllocationFailure(_) => ErrorKind::AllocationFailure,
            Err::OpenFailure { .. } => ErrorKind::OpenFailure,
            Err::ReadFailure(_) => ErrorKind::ReadFailure,
            Err::WriteFailure(_) => ErrorKind::WriteFailure,
        }
    }
}

impl From<decode::Err> for Err {
    fn from(err: decode::Err) -> Self {
        match err {
            decode::Err::AllocationFailure(e) => Err::AllocationFailure(e),
            decode::Err::ReadFailure(e) => Err::ReadFailure(e),
        }
    }
}

impl From<encode::Err> for Err {
    fn from(err: encode::Err) -> Self {
        match err {
            encode::Err::WriteFailure(e) => Err::WriteFailure(e),
        }
    }
}

impl From<WriterErr> for Err {
    fn from(err: WriterErr) -> Self {
        Err::WriteFailure(err)
    }
}

/// Loads a listing from 'path' in host byte order.
///
/// # Example
/// ```no_run
/// let listing = imol::io::load("models.imol").unwrap();
/// for model in listing.get_models() {
///     println!("{}: {} polygons", model.get_name_lossy(), model.num_polygons());
/// }
/// listing.release();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<Listing, Err> {
    load_with(path, decode::Config::default())
}

pub fn load_with<P: AsRef<Path>>(path: P, cfg: decode::Config) -> Result<Listing, Err> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|source| Err::OpenFailure { path: path.to_owned(), source })?;
    log::debug!("Loading listing from {}", path.display());

    let mut reader = IoByteReader::new(BufReader::new(file));
    let listing = decode::decode(&mut reader, cfg)?;

    log::debug!(
        "Loaded {} models ({} bytes) from {}",
        listing.num_models(),
        reader.num_bytes(),
        path.display()
    );
    Ok(listing)
}

/// Stores 'listing' to 'path' in host byte order, replacing any existing file.
pub fn store<P: AsRef<Path>>(path: P, listing: &Listing) -> Result<(), Err> {
    store_with(path, listing, encode::Config::default())
}

pub fn store_with<P: AsRef<Path>>(path: P, listing: &Listing, cfg: encode::Config) -> Result<(), Err> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|source| Err::OpenFailure { path: path.to_owned(), source })?;
    log::debug!("Storing listing of {} models to {}", listing.num_models(), path.display());

    let mut writer = IoByteWriter::new(BufWriter::new(file));
    encode::encode(listing, &mut writer, cfg)?;
    let num_bytes = writer.num_bytes();
    // Errors held back by the buffer surface here.
    writer.finish()?;

    log::debug!("Stored {} bytes to {}", num_bytes, path.display());
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::{ByteOrder, Color, Model, Polygon, Vertex};
    use tempfile::tempdir;

    fn scenario() -> Listing {
        let mut a = Model::new("A");
        a.add_polygon(Polygon::new(
            Color::new(255, 0, 0),
            Vertex::new(0, 0, 0),
            Vertex::new(1, 0, 0),
            Vertex::new(0, 1, 0),
        ));
        Listing::from_models(vec![a, Model::new("BB")])
    }

    #[test]
    fn store_and_load_scenario() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("scenario.imol");

        let original = scenario();
        store(&path, &original)?;
        assert_eq!(std::fs::metadata(&path)?.len(), 120);

        let loaded = load(&path)?;
        assert_eq!(loaded, original);
        loaded.release();
        Ok(())
    }

    #[test]
    fn empty_listing_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("empty.imol");

        store(&path, &Listing::new())?;
        assert_eq!(std::fs::read(&path)?, 0_u64.to_ne_bytes());

        let loaded = load(&path)?;
        assert_eq!(loaded.num_models(), 0);
        assert!(loaded.is_empty());
        Ok(())
    }

    #[test]
    fn store_replaces_existing_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("replace.imol");
        std::fs::write(&path, vec![0xAB; 500])?;

        store(&path, &scenario())?;
        assert_eq!(std::fs::metadata(&path)?.len(), 120);
        Ok(())
    }

    #[test]
    fn truncated_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("truncated.imol");
        std::fs::write(&path, 4_u64.to_ne_bytes())?;

        let err = load(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ReadFailure);
        assert!(matches!(err, Err::ReadFailure(ReaderErr::NotEnoughData)));
        Ok(())
    }

    #[test]
    fn truncated_inside_polygon() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("cut.imol");
        store(&path, &scenario())?;
        let mut bytes = std::fs::read(&path)?;
        // cut the first polygon in half
        bytes.truncate(8 + 8 + 8 + 2 + 40);
        std::fs::write(&path, bytes)?;

        assert_eq!(load(&path).unwrap_err().kind(), ErrorKind::ReadFailure);
        Ok(())
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let err = load(dir.path().join("missing.imol")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OpenFailure);
        match err {
            Err::OpenFailure { path, source } => {
                assert!(path.ends_with("missing.imol"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.imol");
        let err = store(&path, &scenario()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OpenFailure);
        assert!(!path.exists());
    }

    #[test]
    fn directory_is_not_a_listing() {
        let dir = tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        // Opening a directory succeeds on some platforms and fails on others;
        // reading it never yields a listing.
        assert!(matches!(err.kind(), ErrorKind::OpenFailure | ErrorKind::ReadFailure));
    }

    #[test]
    fn oversized_name_is_an_allocation_failure() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("huge.imol");
        let mut bytes = Vec::new();
        for v in [1_u64, 1 << 40, 0] {
            bytes.extend_from_slice(&v.to_ne_bytes());
        }
        std::fs::write(&path, bytes)?;

        let cfg = decode::Config { max_alloc: Some(1 << 20), ..decode::Config::default() };
        let err = load_with(&path, cfg).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AllocationFailure);
        Ok(())
    }

    #[test]
    fn explicit_byte_order_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("be.imol");
        let original = scenario();

        store_with(&path, &original, encode::Config { byte_order: ByteOrder::Big })?;
        let bytes = std::fs::read(&path)?;
        assert_eq!(&bytes[..8], &[0, 0, 0, 0, 0, 0, 0, 2]);

        let cfg = decode::Config { byte_order: ByteOrder::Big, ..decode::Config::default() };
        assert_eq!(load_with(&path, cfg)?, original);
        Ok(())
    }
}
