use std::collections::TryReserveError;

pub trait ConfigType {
    fn default() -> Self;
}

/// Byte order of every multi-byte integer in a listing file.
///
/// The format itself has no byte order marker: a file is written in the order
/// of the host that produced it. `Native` reproduces that behavior and is the
/// default. `Little` and `Big` fix the order regardless of the host, which makes
/// files portable between architectures but is an explicit deviation from the
/// plain format, so both sides of an exchange must agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrder {
    #[inline]
    pub fn u64_to_bytes(self, value: u64) -> [u8; 8] {
        match self {
            ByteOrder::Native => value.to_ne_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }

    #[inline]
    pub fn u64_from_bytes(self, bytes: [u8; 8]) -> u64 {
        match self {
            ByteOrder::Native => u64::from_ne_bytes(bytes),
            ByteOrder::Little => u64::from_le_bytes(bytes),
            ByteOrder::Big => u64::from_be_bytes(bytes),
        }
    }
}

#[remain::sorted]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocErr {
    #[error("Buffer of {requested} bytes exceeds the configured limit of {limit} bytes")]
    LimitExceeded { requested: u64, limit: u64 },

    #[error("Buffer of {count} elements of {elem_size} bytes each is not addressable")]
    Overflow { count: u64, elem_size: usize },

    #[error("Allocator refused the request: {0}")]
    Refused(#[from] TryReserveError),
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_orders() {
        let value = 0x0102_0304_0506_0708_u64;
        assert_eq!(ByteOrder::Little.u64_to_bytes(value), [8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(ByteOrder::Big.u64_to_bytes(value), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(ByteOrder::Little.u64_from_bytes([8, 7, 6, 5, 4, 3, 2, 1]), value);
        assert_eq!(ByteOrder::Big.u64_from_bytes([1, 2, 3, 4, 5, 6, 7, 8]), value);
    }

    #[test]
    fn native_matches_host() {
        let value = 0xDEAD_BEEF_u64;
        let expected = if cfg!(target_endian = "little") {
            ByteOrder::Little.u64_to_bytes(value)
        } else {
            ByteOrder::Big.u64_to_bytes(value)
        };
        assert_eq!(ByteOrder::Native.u64_to_bytes(value), expected);
        assert_eq!(ByteOrder::Native.u64_from_bytes(expected), value);
    }
}
