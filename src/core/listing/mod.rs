mod model;
mod polygon;

pub use model::Model;
pub use polygon::{Color, Polygon, Vertex};

/// The root of a listing file: an ordered sequence of models.
///
/// Model order is file order. A listing owns its models, and each model owns
/// its name and polygons, so the whole tree is reclaimed when the listing is
/// released or dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Listing {
    models: Vec<Model>,
}

impl Listing {
    pub fn new() -> Self {
        Self { models: Vec::new() }
    }

    pub fn from_models(models: Vec<Model>) -> Self {
        Self { models }
    }

    pub fn num_models(&self) -> u64 {
        self.models.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn get_models(&self) -> &[Model] {
        &self.models
    }

    pub fn get_models_mut(&mut self) -> &mut [Model] {
        &mut self.models
    }

    pub fn add_model(&mut self, model: Model) {
        self.models.push(model);
    }

    /// Returns the first model whose name matches 'name'.
    pub fn get_model(&self, name: &str) -> Option<&Model> {
        self.models.iter()
            .find(|m| m.get_name() == Some(name))
    }

    pub fn into_models(self) -> Vec<Model> {
        self.models
    }

    /// Number of bytes the listing occupies in a file.
    pub fn encoded_len(&self) -> u64 {
        8 + self.models.iter()
            .map(Model::encoded_len)
            .sum::<u64>()
    }

    /// Releases every name buffer, every polygon array and the model array.
    /// Takes the listing by value, so it can be released only once.
    pub fn release(self) {
        log::trace!("Releasing listing of {} models", self.models.len());
        drop(self);
    }
}
