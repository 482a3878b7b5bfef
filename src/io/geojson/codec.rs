//! Registration of the GeoJSON codec with serde.
//!
//! Every type implementing [`GeoJsonCodec`] is also [`Serialize`] and [`Deserialize`], so any
//! serde data format (usually `serde_json`) dispatches to this codec when it meets a geometry,
//! including geometries nested as fields of larger documents:
//!
//! ```
//! use postgis_geojson::geometry::MultiLineString;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Road {
//!     id: u32,
//!     shape: MultiLineString,
//! }
//!
//! let road: Road = serde_json::from_str(
//!     r#"{"id": 7, "shape": {"type": "MultiLineString", "coordinates": [[[0, 0], [1, 1]]]}}"#,
//! )
//! .unwrap();
//! assert_eq!(road.id, 7);
//! assert_eq!(road.shape.num_lines(), 1);
//! ```
//!
//! Plain `Deserialize` has no default SRID. To apply one, deserialize through a
//! [`GeoJsonDecoder`], which implements [`DeserializeSeed`].

use serde::de::{DeserializeSeed, Deserializer, Error as _};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::str::FromStr;

use crate::error::{GeoJsonError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::io::geojson::reader::GeoJsonDecoder;
use crate::io::geojson::writer::serialize_geometry;

/// A type with a GeoJSON representation.
///
/// Implemented for [`Geometry`] and for each of its variant types.
pub trait GeoJsonCodec: Serialize + for<'de> Deserialize<'de> + Sized {
    /// The discriminator this type is written with, or `None` for [`Geometry`] itself.
    const GEOMETRY_TYPE: Option<GeometryType>;

    fn into_geometry(self) -> Geometry;

    /// Narrow a decoded geometry to this type.
    fn try_from_geometry(geom: Geometry) -> Result<Self>;
}

impl GeoJsonCodec for Geometry {
    const GEOMETRY_TYPE: Option<GeometryType> = None;

    fn into_geometry(self) -> Geometry {
        self
    }

    fn try_from_geometry(geom: Geometry) -> Result<Self> {
        Ok(geom)
    }
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_geometry(self, true, serializer)
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        GeoJsonDecoder::new().deserialize(deserializer)
    }
}

macro_rules! impl_geojson_codec {
    ($($variant:ident),+) => {
        $(
            impl TryFrom<Geometry> for $variant {
                type Error = GeoJsonError;

                fn try_from(geom: Geometry) -> Result<Self> {
                    match geom {
                        Geometry::$variant(g) => Ok(g),
                        other => Err(GeoJsonError::IncorrectGeometryType {
                            expected: GeometryType::$variant,
                            found: other.geometry_type(),
                        }),
                    }
                }
            }

            impl GeoJsonCodec for $variant {
                const GEOMETRY_TYPE: Option<GeometryType> = Some(GeometryType::$variant);

                fn into_geometry(self) -> Geometry {
                    Geometry::$variant(self)
                }

                fn try_from_geometry(geom: Geometry) -> Result<Self> {
                    geom.try_into()
                }
            }

            impl Serialize for $variant {
                fn serialize<S: Serializer>(
                    &self,
                    serializer: S,
                ) -> std::result::Result<S::Ok, S::Error> {
                    serialize_geometry(self, true, serializer)
                }
            }

            impl<'de> Deserialize<'de> for $variant {
                fn deserialize<D: Deserializer<'de>>(
                    deserializer: D,
                ) -> std::result::Result<Self, D::Error> {
                    let geom = GeoJsonDecoder::new().deserialize(deserializer)?;
                    geom.try_into().map_err(D::Error::custom)
                }
            }
        )+
    };
}

impl_geojson_codec!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);

impl<'de> DeserializeSeed<'de> for GeoJsonDecoder {
    type Value = Geometry;

    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<Self::Value, D::Error> {
        let value = Value::deserialize(deserializer)?;
        self.decode(&value).map_err(D::Error::custom)
    }
}

impl FromStr for Geometry {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self> {
        GeoJsonDecoder::new().decode_str(s)
    }
}
