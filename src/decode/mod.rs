use crate::core::bit_coder::ReaderErr;
use crate::core::shared::AllocErr;
use crate::prelude::{ByteOrder, ByteReader, ConfigType, Listing, Model};
use crate::utils::try_vec_with_capacity;

mod model;

/// Decodes a listing from the provided byte stream using the provided configuration.
///
/// Nothing is read past the last polygon of the last model. On failure the
/// models decoded so far are dropped before returning.
pub fn decode<R>(reader: &mut R, cfg: Config) -> Result<Listing, Err>
    where R: ByteReader
{
    let num_models = reader.read_u64(cfg.byte_order)?;
    log::debug!("Decoding listing of {} models", num_models);

    let mut models = try_vec_with_capacity::<Model>(num_models, cfg.max_alloc)?;
    for i in 0..num_models {
        let model = model::decode_model(reader, &cfg)?;
        log::trace!(
            "Model {}: name of {} bytes, {} polygons",
            i,
            model.name_len(),
            model.num_polygons()
        );
        models.push(model);
    }

    Ok(Listing::from_models(models))
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub byte_order: ByteOrder,

    /// Upper bound, in bytes, on any single buffer allocated while decoding.
    /// 'None' trusts every length the stream declares.
    pub max_alloc: Option<u64>,
}

impl ConfigType for Config {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Native,
            max_alloc: None,
        }
    }
}


#[remain::sorted]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Err {
    #[error("Allocation failed: {0}")]
    AllocationFailure(#[from] AllocErr),
    #[error("Read failed: {0}")]
    ReadFailure(#[from] ReaderErr),
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::{Color, Polygon, Vertex};

    fn header(values: &[u64]) -> Vec<u8> {
        values.iter()
            .flat_map(|v| v.to_ne_bytes())
            .collect()
    }

    #[test]
    fn empty_listing() {
        let data = header(&[0]);
        let listing = decode(&mut data.as_slice(), Config::default()).unwrap();
        assert_eq!(listing.num_models(), 0);
    }

    #[test]
    fn empty_stream() {
        let data: Vec<u8> = Vec::new();
        assert_eq!(
            decode(&mut data.into_iter(), Config::default()),
            Err(Err::ReadFailure(ReaderErr::NotEnoughData))
        );
    }

    #[test]
    fn count_without_models() {
        let data = header(&[3]);
        assert_eq!(
            decode(&mut data.as_slice(), Config::default()),
            Err(Err::ReadFailure(ReaderErr::NotEnoughData))
        );
    }

    #[test]
    fn single_model() {
        let mut data = header(&[1, 2, 1]);
        data.extend_from_slice(b"A\0");
        data.extend_from_slice(&[0, 128, 255]);
        for c in 1..=9_u64 {
            data.extend_from_slice(&c.to_ne_bytes());
        }

        let listing = decode(&mut data.as_slice(), Config::default()).unwrap();
        let model = &listing.get_models()[0];
        assert_eq!(model.get_name(), Some("A"));
        assert_eq!(
            model.get_polygons(),
            &[Polygon::new(
                Color::new(0, 128, 255),
                Vertex::new(1, 2, 3),
                Vertex::new(4, 5, 6),
                Vertex::new(7, 8, 9),
            )]
        );
    }

    #[test]
    fn trailing_bytes_are_not_consumed() {
        let mut data = header(&[0]);
        data.push(42);
        let mut reader = data.as_slice();
        decode(&mut reader, Config::default()).unwrap();
        assert_eq!(reader, &[42]);
    }

    #[test]
    fn huge_model_count() {
        let data = header(&[u64::MAX]);
        assert!(matches!(
            decode(&mut data.as_slice(), Config::default()),
            Err(Err::AllocationFailure(_))
        ));
    }

    #[test]
    fn allocation_limit() {
        let mut data = header(&[1, 100, 0]);
        data.extend_from_slice(&[b'x'; 99]);
        data.push(0);
        let cfg = Config { max_alloc: Some(64), ..Config::default() };
        assert_eq!(
            decode(&mut data.as_slice(), cfg),
            Err(Err::AllocationFailure(AllocErr::LimitExceeded { requested: 100, limit: 64 }))
        );
        let cfg = Config { max_alloc: Some(100), ..Config::default() };
        assert!(decode(&mut data.as_slice(), cfg).is_ok());
    }
}
