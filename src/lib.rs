//! Convert between GeoJSON geometry objects and a typed geometry model as used by PostGIS
//! drivers, propagating the SRID through the legacy GeoJSON `crs` object.
//!
//! The [`io::geojson::GeoJsonEncoder`] writes a `crs` member only for the outermost geometry and
//! only when its SRID is set; the [`io::geojson::GeoJsonDecoder`] reads it back, optionally
//! falling back to a configured default SRID. All types also implement serde's `Serialize` and
//! `Deserialize` through the same codec.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{GeoJsonError, Result};
pub use geometry::Geometry;

pub mod error;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
