//! Read from and write to [GeoJSON](https://geojson.org/) geometry objects, carrying the SRID
//! through the legacy `crs` member.
//!
//! ```
//! use postgis_geojson::geometry::{Geometry, Point};
//! use postgis_geojson::io::geojson::{GeoJsonDecoder, GeoJsonEncoder};
//!
//! let doc = r#"{"type":"Point","coordinates":[30,10]}"#;
//! let geom = GeoJsonDecoder::with_default_srid(4326).decode_str(doc).unwrap();
//! assert_eq!(geom, Geometry::Point(Point::new(30., 10.).with_srid(4326)));
//!
//! let value = GeoJsonEncoder::new().encode(&geom).unwrap();
//! assert_eq!(value["crs"]["properties"]["name"], "EPSG:4326");
//! ```

pub use codec::GeoJsonCodec;
pub use crs::{crs_from_srid, srid_from_crs, EPSG_AUTHORITY};
pub use reader::{read_geojson, GeoJsonDecoder, GeoJsonReaderOptions};
pub use writer::{write_geojson, GeoJsonEncoder};

mod codec;
mod crs;
mod location;
mod reader;
mod writer;
