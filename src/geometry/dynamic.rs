use crate::geometry::{
    GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

/// Any geometry that has a GeoJSON representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// The spatial reference identifier; `0` means unset.
    pub fn srid(&self) -> u32 {
        match self {
            Geometry::Point(g) => g.srid(),
            Geometry::LineString(g) => g.srid(),
            Geometry::Polygon(g) => g.srid(),
            Geometry::MultiPoint(g) => g.srid(),
            Geometry::MultiLineString(g) => g.srid(),
            Geometry::MultiPolygon(g) => g.srid(),
            Geometry::GeometryCollection(g) => g.srid(),
        }
    }

    pub fn set_srid(&mut self, srid: u32) {
        match self {
            Geometry::Point(g) => g.set_srid(srid),
            Geometry::LineString(g) => g.set_srid(srid),
            Geometry::Polygon(g) => g.set_srid(srid),
            Geometry::MultiPoint(g) => g.set_srid(srid),
            Geometry::MultiLineString(g) => g.set_srid(srid),
            Geometry::MultiPolygon(g) => g.set_srid(srid),
            Geometry::GeometryCollection(g) => g.set_srid(srid),
        }
    }

    pub fn with_srid(mut self, srid: u32) -> Self {
        self.set_srid(srid);
        self
    }

    /// Whether any position in this geometry carries a z ordinate.
    pub fn has_z(&self) -> bool {
        match self {
            Geometry::Point(g) => g.has_z(),
            Geometry::LineString(g) => g.has_z(),
            Geometry::Polygon(g) => g.has_z(),
            Geometry::MultiPoint(g) => g.has_z(),
            Geometry::MultiLineString(g) => g.has_z(),
            Geometry::MultiPolygon(g) => g.has_z(),
            Geometry::GeometryCollection(g) => g.has_z(),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Geometry::$variant(value)
                }
            }
        )+
    };
}

impl_from_variant!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);
