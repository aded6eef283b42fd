// lib.rs

/// Contains the listing data model, the byte coders and the shared definitions.
pub mod core;

/// Defines the listing encoder.
pub mod encode;

/// Defines the listing decoder.
pub mod decode;

/// Loads and stores listings from and to files.
pub mod io;

pub(crate) mod utils;


/// Contains the most commonly used traits, types, and objects.
pub mod prelude {
    pub use crate::core::listing::{Listing, Model, Polygon, Color, Vertex};
    pub use crate::core::shared::{ByteOrder, ConfigType};
    pub use crate::core::bit_coder::{
        ByteReader,
        ByteWriter,
        IoByteReader,
        IoByteWriter,
    };
    pub use crate::encode::{self, encode};
    pub use crate::decode::{self, decode};
    pub use crate::io::{load, load_with, store, store_with, ErrorKind};
}
