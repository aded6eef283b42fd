pub(crate) mod model;

use crate::core::bit_coder::WriterErr;
use crate::prelude::{ByteOrder, ByteWriter, ConfigType, Listing};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub byte_order: ByteOrder,
}

impl ConfigType for Config {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Native,
        }
    }
}

#[remain::sorted]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Err {
    #[error("Write failed: {0}")]
    WriteFailure(#[from] WriterErr),
}


/// Encodes the listing into a provided byte stream using the provided configuration.
/// The listing is only read; counts are taken from the listing itself, so the
/// declared counts always match the records that follow.
pub fn encode<W>(listing: &Listing, writer: &mut W, cfg: Config) -> Result<(), Err>
    where W: ByteWriter
{
    writer.write_u64(listing.num_models(), cfg.byte_order)?;
    log::debug!("Encoding listing of {} models", listing.num_models());

    for model in listing.get_models() {
        model::encode_model(model, writer, &cfg)?;
    }

    Ok(())
}
