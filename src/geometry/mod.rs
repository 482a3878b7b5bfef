//! The typed geometry model.
//!
//! Every geometry owns its children outright and carries an SRID, where `0` means "unset".
//! [`LinearRing`] has no GeoJSON discriminator of its own and so only appears inside a
//! [`Polygon`]; it is not a variant of [`Geometry`].

macro_rules! impl_srid {
    ($typ:ty) => {
        impl $typ {
            /// The spatial reference identifier; `0` means unset.
            pub fn srid(&self) -> u32 {
                self.srid
            }

            pub fn set_srid(&mut self, srid: u32) {
                self.srid = srid;
            }

            pub fn with_srid(mut self, srid: u32) -> Self {
                self.srid = srid;
                self
            }
        }
    };
}

mod dynamic;
mod geometry_type;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use dynamic::Geometry;
pub use geometry_type::GeometryType;
pub use geometrycollection::GeometryCollection;
pub use linestring::{LineString, LinearRing};
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
