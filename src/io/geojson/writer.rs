use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;
use std::io::Write;

use crate::error::Result;
use crate::geometry::{
    Geometry, GeometryCollection, GeometryType, LineString, LinearRing, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::io::geojson::codec::GeoJsonCodec;
use crate::io::geojson::crs::NamedCrs;

/// Encodes geometries as GeoJSON geometry objects.
///
/// Only the outermost object gets a `crs` member, and only when its SRID is set. Encoding a
/// geometry with SRID `0` logs a warning and omits `crs`.
///
/// GeoJSON has no representation for NaN or infinite ordinates, so encoding a geometry holding
/// one fails instead of writing `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonEncoder;

impl GeoJsonEncoder {
    /// Create an encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encode a geometry into a JSON value.
    pub fn encode<G: GeoJsonCodec>(&self, geom: &G) -> Result<Value> {
        Ok(serde_json::to_value(geom)?)
    }

    /// Encode a geometry into a compact JSON string.
    pub fn encode_to_string<G: GeoJsonCodec>(&self, geom: &G) -> Result<String> {
        Ok(serde_json::to_string(geom)?)
    }

    /// Stream a geometry as JSON into `writer`.
    pub fn encode_to_writer<G: GeoJsonCodec, W: Write>(&self, geom: &G, writer: W) -> Result<()> {
        serde_json::to_writer(writer, geom)?;
        Ok(())
    }
}

/// Write a geometry to GeoJSON
///
/// Note: Does not reproject for you; the SRID is only written as the `crs` name.
pub fn write_geojson<G: GeoJsonCodec, W: Write>(geom: &G, writer: W) -> Result<()> {
    GeoJsonEncoder.encode_to_writer(geom, writer)
}

/// A value that can be written as the members of a GeoJSON geometry object.
pub(crate) trait GeometryObject {
    fn geometry_type(&self) -> GeometryType;

    fn srid(&self) -> u32;

    /// Write the `coordinates` member, or `geometries` for a collection.
    fn serialize_members<M: SerializeMap>(&self, map: &mut M) -> std::result::Result<(), M::Error>;
}

/// Write `geom` as a full geometry object.
///
/// `crs` is written only when `top_level` is set and the SRID is non-zero.
pub(crate) fn serialize_geometry<G: GeometryObject, S: Serializer>(
    geom: &G,
    top_level: bool,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(None)?;
    map.serialize_entry("type", geom.geometry_type().as_str())?;
    if top_level {
        match geom.srid() {
            0 => log::warn!(
                "No SRID in this {} geometry; writing it without a crs member",
                geom.geometry_type()
            ),
            srid => map.serialize_entry("crs", &NamedCrs(srid))?,
        }
    }
    geom.serialize_members(&mut map)?;
    map.end()
}

impl GeometryObject for Point {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    fn srid(&self) -> u32 {
        self.srid()
    }

    fn serialize_members<M: SerializeMap>(&self, map: &mut M) -> std::result::Result<(), M::Error> {
        map.serialize_entry("coordinates", &Position(self))
    }
}

impl GeometryObject for LineString {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::LineString
    }

    fn srid(&self) -> u32 {
        self.srid()
    }

    fn serialize_members<M: SerializeMap>(&self, map: &mut M) -> std::result::Result<(), M::Error> {
        map.serialize_entry("coordinates", &Positions(self.points()))
    }
}

impl GeometryObject for Polygon {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }

    fn srid(&self) -> u32 {
        self.srid()
    }

    fn serialize_members<M: SerializeMap>(&self, map: &mut M) -> std::result::Result<(), M::Error> {
        map.serialize_entry("coordinates", &Rings(self.rings()))
    }
}

impl GeometryObject for MultiPoint {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPoint
    }

    fn srid(&self) -> u32 {
        self.srid()
    }

    fn serialize_members<M: SerializeMap>(&self, map: &mut M) -> std::result::Result<(), M::Error> {
        map.serialize_entry("coordinates", &Positions(self.points()))
    }
}

impl GeometryObject for MultiLineString {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiLineString
    }

    fn srid(&self) -> u32 {
        self.srid()
    }

    fn serialize_members<M: SerializeMap>(&self, map: &mut M) -> std::result::Result<(), M::Error> {
        map.serialize_entry("coordinates", &LineStrings(self.lines()))
    }
}

impl GeometryObject for MultiPolygon {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPolygon
    }

    fn srid(&self) -> u32 {
        self.srid()
    }

    fn serialize_members<M: SerializeMap>(&self, map: &mut M) -> std::result::Result<(), M::Error> {
        map.serialize_entry("coordinates", &Polygons(self.polygons()))
    }
}

impl GeometryObject for GeometryCollection {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::GeometryCollection
    }

    fn srid(&self) -> u32 {
        self.srid()
    }

    fn serialize_members<M: SerializeMap>(&self, map: &mut M) -> std::result::Result<(), M::Error> {
        map.serialize_entry("geometries", &Members(self.geometries()))
    }
}

impl GeometryObject for Geometry {
    fn geometry_type(&self) -> GeometryType {
        self.geometry_type()
    }

    fn srid(&self) -> u32 {
        self.srid()
    }

    fn serialize_members<M: SerializeMap>(&self, map: &mut M) -> std::result::Result<(), M::Error> {
        match self {
            Geometry::Point(g) => g.serialize_members(map),
            Geometry::LineString(g) => g.serialize_members(map),
            Geometry::Polygon(g) => g.serialize_members(map),
            Geometry::MultiPoint(g) => g.serialize_members(map),
            Geometry::MultiLineString(g) => g.serialize_members(map),
            Geometry::MultiPolygon(g) => g.serialize_members(map),
            Geometry::GeometryCollection(g) => g.serialize_members(map),
        }
    }
}

/// `[x, y]` or `[x, y, z]`
struct Position<'a>(&'a Point);

impl Serialize for Position<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let point = self.0;
        let ordinates = [Some(point.x()), Some(point.y()), point.z()];
        if let Some(bad) = ordinates.into_iter().flatten().find(|o| !o.is_finite()) {
            return Err(S::Error::custom(format!(
                "cannot encode non-finite ordinate {bad} as GeoJSON"
            )));
        }
        let mut seq = serializer.serialize_seq(Some(point.dim()))?;
        seq.serialize_element(&point.x())?;
        seq.serialize_element(&point.y())?;
        if let Some(z) = point.z() {
            seq.serialize_element(&z)?;
        }
        seq.end()
    }
}

struct Positions<'a>(&'a [Point]);

impl Serialize for Positions<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(Position))
    }
}

struct Rings<'a>(&'a [LinearRing]);

impl Serialize for Rings<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|ring| Positions(ring.points())))
    }
}

struct LineStrings<'a>(&'a [LineString]);

impl Serialize for LineStrings<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|line| Positions(line.points())))
    }
}

struct Polygons<'a>(&'a [Polygon]);

impl Serialize for Polygons<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|polygon| Rings(polygon.rings())))
    }
}

/// Members of a collection, each written as a geometry object without `crs`.
struct Members<'a>(&'a [Geometry]);

impl Serialize for Members<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(Member))
    }
}

struct Member<'a>(&'a Geometry);

impl Serialize for Member<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_geometry(self.0, false, serializer)
    }
}
