use std::mem;

use crate::core::shared::AllocErr;

/// Reserves room for exactly 'count' elements without aborting on failure.
/// 'limit', if any, caps the number of bytes the reservation may take.
pub(crate) fn try_vec_with_capacity<T>(count: u64, limit: Option<u64>) -> Result<Vec<T>, AllocErr> {
    let elem_size = mem::size_of::<T>();
    let requested = count.checked_mul(elem_size as u64)
        .ok_or(AllocErr::Overflow { count, elem_size })?;
    if let Some(limit) = limit {
        if requested > limit {
            return Err(AllocErr::LimitExceeded { requested, limit });
        }
    }
    let len = usize::try_from(count)
        .map_err(|_| AllocErr::Overflow { count, elem_size })?;

    let mut out = Vec::new();
    out.try_reserve_exact(len)?;
    Ok(out)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserves_exactly() {
        let v = try_vec_with_capacity::<u64>(16, None).unwrap();
        assert!(v.is_empty());
        assert!(v.capacity() >= 16);
    }

    #[test]
    fn limit_is_in_bytes() {
        assert_eq!(
            try_vec_with_capacity::<u64>(4, Some(31)),
            Err(AllocErr::LimitExceeded { requested: 32, limit: 31 })
        );
        assert!(try_vec_with_capacity::<u64>(4, Some(32)).is_ok());
    }

    #[test]
    fn overflow_and_refusal() {
        assert_eq!(
            try_vec_with_capacity::<u64>(u64::MAX, None),
            Err(AllocErr::Overflow { count: u64::MAX, elem_size: 8 })
        );
        assert!(matches!(
            try_vec_with_capacity::<u8>(u64::MAX, None),
            Err(AllocErr::Refused(_)) | Err(AllocErr::Overflow { .. })
        ));
    }
}
