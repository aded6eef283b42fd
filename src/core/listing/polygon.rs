use crate::core::bit_coder::{ByteReader, ByteWriter, ReaderErr, WriterErr};
use crate::core::shared::ByteOrder;

/// Fill color of a polygon.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A point with unsigned integer coordinates.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct Vertex {
    pub x: u64,
    pub y: u64,
    pub z: u64,
}

impl Vertex {
    pub fn new(x: u64, y: u64, z: u64) -> Self {
        Self { x, y, z }
    }

    pub fn as_array(&self) -> [u64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[u64; 3]> for Vertex {
    fn from([x, y, z]: [u64; 3]) -> Self {
        Self { x, y, z }
    }
}

/// A flat-colored triangle.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct Polygon {
    pub fill: Color,
    pub vertices: [Vertex; 3],
}

impl Polygon {
    /// Number of bytes a polygon record occupies in a file:
    /// three color channels followed by nine coordinates.
    pub const ENCODED_LEN: u64 = 3 + 9 * 8;

    pub fn new(fill: Color, a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self { fill, vertices: [a, b, c] }
    }

    #[inline]
    pub(crate) fn read_from<R>(reader: &mut R, order: ByteOrder) -> Result<Self, ReaderErr>
        where R: ByteReader
    {
        let mut record = [0_u8; Self::ENCODED_LEN as usize];
        reader.read_bytes(&mut record)?;

        let fill = Color::new(record[0], record[1], record[2]);
        let coord = |i: usize| {
            let mut bytes = [0; 8];
            bytes.copy_from_slice(&record[3 + 8 * i..][..8]);
            order.u64_from_bytes(bytes)
        };
        let vertices = [0, 1, 2].map(|v| Vertex::new(coord(3 * v), coord(3 * v + 1), coord(3 * v + 2)));

        Ok(Self { fill, vertices })
    }

    #[inline]
    pub(crate) fn write_to<W>(&self, writer: &mut W, order: ByteOrder) -> Result<(), WriterErr>
        where W: ByteWriter
    {
        let mut record = [0_u8; Self::ENCODED_LEN as usize];
        record[..3].copy_from_slice(&self.fill.as_array());
        let coords = self.vertices.iter().flat_map(|v| v.as_array());
        for (chunk, coord) in record[3..].chunks_exact_mut(8).zip(coords) {
            chunk.copy_from_slice(&order.u64_to_bytes(coord));
        }
        writer.write_bytes(&record)
    }
}
