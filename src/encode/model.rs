use crate::prelude::{ByteWriter, Model};

use super::{Config, Err};

pub(crate) fn encode_model<W>(model: &Model, writer: &mut W, cfg: &Config) -> Result<(), Err>
    where W: ByteWriter
{
    // Both counts come before the name.
    writer.write_u64(model.name_len(), cfg.byte_order)?;
    writer.write_u64(model.num_polygons(), cfg.byte_order)?;

    writer.write_bytes(model.get_name_bytes())?;

    for polygon in model.get_polygons() {
        polygon.write_to(writer, cfg.byte_order)?;
    }

    Ok(())
}
