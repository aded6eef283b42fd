use crate::prelude::{ByteReader, Model, Polygon};
use crate::utils::try_vec_with_capacity;

use super::{Config, Err};

/// Largest single read while filling a name buffer.
const NAME_CHUNK_LEN: usize = 8 * 1024;

/// Reads one model record. Each buffer is allocated right before it is read
/// into, so a failure leaves nothing half-owned behind.
pub(super) fn decode_model<R>(reader: &mut R, cfg: &Config) -> Result<Model, Err>
    where R: ByteReader
{
    let name_len = reader.read_u64(cfg.byte_order)?;
    let num_polygons = reader.read_u64(cfg.byte_order)?;

    // The name is trusted as declared; its terminator is not checked.
    let name = read_name(reader, name_len, cfg)?;

    let mut polygons = try_vec_with_capacity::<Polygon>(num_polygons, cfg.max_alloc)?;
    for _ in 0..num_polygons {
        polygons.push(Polygon::read_from(reader, cfg.byte_order)?);
    }

    Ok(Model::from_parts(name, polygons))
}

/// Reserves 'len' bytes, then fills them in bounded chunks so that memory is
/// only committed as the stream delivers it.
fn read_name<R>(reader: &mut R, len: u64, cfg: &Config) -> Result<Vec<u8>, Err>
    where R: ByteReader
{
    let mut name = try_vec_with_capacity::<u8>(len, cfg.max_alloc)?;
    let mut chunk = [0_u8; NAME_CHUNK_LEN];
    let mut remaining = len;
    while remaining > 0 {
        let n = remaining.min(NAME_CHUNK_LEN as u64) as usize;
        reader.read_bytes(&mut chunk[..n])?;
        name.extend_from_slice(&chunk[..n]);
        remaining -= n as u64;
    }
    Ok(name)
}
