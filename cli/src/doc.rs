use imol::prelude::{Color, Listing, Model, Polygon, Vertex};
use serde::{Deserialize, Serialize};

/// JSON view of a listing, used by `dump` and `build`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDoc {
    pub models: Vec<ModelDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDoc {
    /// Name without its terminating zero byte.
    pub name: String,
    /// Exact stored name bytes, present only when 'name' cannot reproduce
    /// them: a missing terminator, an inner zero byte or invalid UTF-8.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_bytes: Option<Vec<u8>>,
    #[serde(default)]
    pub polygons: Vec<PolygonDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonDoc {
    pub fill: [u8; 3],
    pub vertices: [[u64; 3]; 3],
}

impl From<&Listing> for ListingDoc {
    fn from(listing: &Listing) -> Self {
        let models = listing.get_models().iter()
            .map(|model| ModelDoc {
                name: model.get_name_lossy().into_owned(),
                name_bytes: exact_name_bytes(model),
                polygons: model.get_polygons().iter()
                    .map(|p| PolygonDoc {
                        fill: p.fill.as_array(),
                        vertices: p.vertices.map(|v| v.as_array()),
                    })
                    .collect(),
            })
            .collect();
        Self { models }
    }
}

/// Raw name bytes of 'model', unless `Model::new` on its name rebuilds them.
fn exact_name_bytes(model: &Model) -> Option<Vec<u8>> {
    let rebuilt = model.get_name().map(Model::new);
    match rebuilt {
        Some(rebuilt) if rebuilt.get_name_bytes() == model.get_name_bytes() => None,
        _ => Some(model.get_name_bytes().to_vec()),
    }
}

impl From<ListingDoc> for Listing {
    fn from(doc: ListingDoc) -> Self {
        let models = doc.models.into_iter()
            .map(|m| {
                let polygons = m.polygons.into_iter()
                    .map(|p| {
                        let [a, b, c] = p.vertices.map(Vertex::from);
                        Polygon::new(Color::from(p.fill), a, b, c)
                    })
                    .collect();
                let model = match m.name_bytes {
                    Some(bytes) => Model::from_raw_name(bytes),
                    None => Model::new(&m.name),
                };
                model.with_polygons(polygons)
            })
            .collect();
        Listing::from_models(models)
    }
}
