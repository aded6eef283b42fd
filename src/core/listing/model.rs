use std::borrow::Cow;

use super::Polygon;

/// A named mesh of flat-colored triangles.
///
/// The name is kept exactly as it is stored in a file, terminating zero byte
/// included. Models built with [`Model::new`] always carry the terminator;
/// models read from a file carry whatever bytes the file declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Model {
    name: Vec<u8>,
    polygons: Vec<Polygon>,
}

impl Model {
    /// Creates an empty model, appending the terminating zero byte to 'name'.
    pub fn new(name: &str) -> Self {
        let mut bytes = Vec::with_capacity(name.len() + 1);
        bytes.extend_from_slice(name.as_bytes());
        bytes.push(0);
        Self { name: bytes, polygons: Vec::new() }
    }

    /// Creates an empty model from name bytes taken as-is.
    /// The caller is responsible for the trailing zero byte.
    pub fn from_raw_name(name: Vec<u8>) -> Self {
        Self { name, polygons: Vec::new() }
    }

    pub(crate) fn from_parts(name: Vec<u8>, polygons: Vec<Polygon>) -> Self {
        Self { name, polygons }
    }

    pub fn with_polygons(mut self, polygons: Vec<Polygon>) -> Self {
        self.polygons = polygons;
        self
    }

    /// The name up to its first zero byte, if that part is valid UTF-8.
    pub fn get_name(&self) -> Option<&str> {
        std::str::from_utf8(self.trimmed_name()).ok()
    }

    /// The name up to its first zero byte, with invalid UTF-8 replaced.
    pub fn get_name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.trimmed_name())
    }

    /// The stored name bytes, terminator included.
    pub fn get_name_bytes(&self) -> &[u8] {
        &self.name
    }

    /// The declared name length, terminator included.
    pub fn name_len(&self) -> u64 {
        self.name.len() as u64
    }

    pub fn is_terminated(&self) -> bool {
        self.name.last() == Some(&0)
    }

    pub fn num_polygons(&self) -> u64 {
        self.polygons.len() as u64
    }

    pub fn get_polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn get_polygons_mut(&mut self) -> &mut [Polygon] {
        &mut self.polygons
    }

    pub fn add_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// Number of bytes the model occupies in a file.
    pub fn encoded_len(&self) -> u64 {
        8 + 8 + self.name_len() + self.num_polygons() * Polygon::ENCODED_LEN
    }

    fn trimmed_name(&self) -> &[u8] {
        self.name.split(|&b| b == 0)
            .next()
            .unwrap_or(&[])
    }
}
