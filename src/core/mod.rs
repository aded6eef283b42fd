pub mod bit_coder;
pub mod listing;
pub mod shared;
