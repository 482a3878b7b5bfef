//! The GeoJSON codec, plus interoperability with the `geo` and `geozero` crates.

pub mod geo;
pub mod geojson;
#[cfg(feature = "geozero")]
pub mod geozero;
