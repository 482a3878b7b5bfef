use serde_json::Value;
use std::io::Read;

use crate::error::{GeoJsonError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, GeometryType, LineString, LinearRing, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::io::geojson::codec::GeoJsonCodec;
use crate::io::geojson::crs::srid_from_crs;
use crate::io::geojson::location::Location;

/// Options for the GeoJSON decoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeoJsonReaderOptions {
    /// The SRID given to a top-level geometry whose document has no `crs` member.
    ///
    /// When `None`, such geometries get SRID `0`.
    pub default_srid: Option<u32>,
}

impl GeoJsonReaderOptions {
    /// Options with the given default SRID.
    pub fn new(default_srid: Option<u32>) -> Self {
        Self { default_srid }
    }
}

/// Decodes GeoJSON geometry objects into [`Geometry`] values.
///
/// The decoder holds only its immutable options, so one instance can be shared freely between
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonDecoder {
    options: GeoJsonReaderOptions,
}

impl GeoJsonDecoder {
    /// A decoder with no default SRID.
    pub fn new() -> Self {
        Self::default()
    }

    /// A decoder that assigns `srid` to geometries whose document has no `crs` member.
    pub fn with_default_srid(srid: u32) -> Self {
        Self::with_options(GeoJsonReaderOptions::new(Some(srid)))
    }

    /// A decoder configured by `options`.
    pub fn with_options(options: GeoJsonReaderOptions) -> Self {
        Self { options }
    }

    /// The options this decoder was built with.
    pub fn options(&self) -> &GeoJsonReaderOptions {
        &self.options
    }

    /// Decode a parsed geometry object.
    ///
    /// If the object has a `geometries` member it becomes a [`GeometryCollection`], otherwise its
    /// `coordinates` are read according to `type`. The SRID comes from `crs` when present and from
    /// the configured default otherwise; it is set on the returned geometry only, never on its
    /// children.
    pub fn decode(&self, value: &Value) -> Result<Geometry> {
        let root = Location::Root;
        let typ = read_type(value, &root)?;

        let srid = match value.get("crs") {
            Some(crs) => srid_from_crs(crs)?,
            None => self.options.default_srid.unwrap_or(0),
        };

        let mut geom = match value.get("geometries") {
            Some(geometries) => Geometry::GeometryCollection(GeometryCollection::new(
                read_geometries(geometries, &root.key("geometries"))?,
            )),
            None => read_geometry(typ, value, &root)?,
        };
        log::trace!("decoded {} with SRID {}", geom.geometry_type(), srid);

        geom.set_srid(srid);
        Ok(geom)
    }

    /// Decode a document and require it to describe a `T`.
    pub fn decode_as<T: GeoJsonCodec>(&self, value: &Value) -> Result<T> {
        T::try_from_geometry(self.decode(value)?)
    }

    /// Parse and decode a JSON string.
    pub fn decode_str(&self, s: &str) -> Result<Geometry> {
        let value: Value = serde_json::from_str(s)?;
        self.decode(&value)
    }

    /// Parse and decode JSON read from `reader`.
    pub fn decode_reader<R: Read>(&self, reader: R) -> Result<Geometry> {
        let value: Value = serde_json::from_reader(reader)?;
        self.decode(&value)
    }
}

/// Read a GeoJSON geometry with no default SRID.
pub fn read_geojson<R: Read>(reader: R) -> Result<Geometry> {
    GeoJsonDecoder::new().decode_reader(reader)
}

fn read_type(value: &Value, location: &Location) -> Result<GeometryType> {
    let type_name = match value.get("type") {
        Some(Value::String(name)) => {
            if let Some(typ) = GeometryType::from_name(name) {
                return Ok(typ);
            }
            name.clone()
        }
        Some(other) => other.to_string(),
        None => "null".to_string(),
    };
    Err(GeoJsonError::UnknownGeometryType {
        type_name,
        location: location.to_string(),
    })
}

/// Build a geometry from an object's `coordinates`, or its `geometries` for a collection.
///
/// Used both for the top-level object and for every member of a `geometries` array. Only `type`,
/// `coordinates` and `geometries` are consulted.
fn read_geometry(typ: GeometryType, object: &Value, location: &Location) -> Result<Geometry> {
    let member = match typ {
        GeometryType::GeometryCollection => "geometries",
        _ => "coordinates",
    };
    let location = location.key(member);
    let value = object
        .get(member)
        .ok_or_else(|| malformed("missing member", &location))?;

    let geom = match typ {
        GeometryType::Point => read_point(value, &location)?.into(),
        GeometryType::LineString => LineString::new(read_points(value, &location)?).into(),
        GeometryType::Polygon => Polygon::new(read_rings(value, &location)?).into(),
        GeometryType::MultiPoint => MultiPoint::new(read_points(value, &location)?).into(),
        GeometryType::MultiLineString => {
            MultiLineString::new(read_line_strings(value, &location)?).into()
        }
        GeometryType::MultiPolygon => MultiPolygon::new(read_polygons(value, &location)?).into(),
        GeometryType::GeometryCollection => {
            GeometryCollection::new(read_geometries(value, &location)?).into()
        }
    };
    Ok(geom)
}

fn read_geometries(value: &Value, location: &Location) -> Result<Vec<Geometry>> {
    read_array(value, location, |member, location| {
        if !member.is_object() {
            return Err(malformed("expected a geometry object", location));
        }
        let typ = read_type(member, location)?;
        read_geometry(typ, member, location)
    })
}

fn read_polygons(value: &Value, location: &Location) -> Result<Vec<Polygon>> {
    read_array(value, location, |rings, location| {
        Ok(Polygon::new(read_rings(rings, location)?))
    })
}

fn read_line_strings(value: &Value, location: &Location) -> Result<Vec<LineString>> {
    read_array(value, location, |points, location| {
        Ok(LineString::new(read_points(points, location)?))
    })
}

fn read_rings(value: &Value, location: &Location) -> Result<Vec<LinearRing>> {
    read_array(value, location, |points, location| {
        Ok(LinearRing::new(read_points(points, location)?))
    })
}

fn read_points(value: &Value, location: &Location) -> Result<Vec<Point>> {
    read_array(value, location, read_point)
}

/// Read a position. Two ordinates give a 2D point; three or more give a 3D point built from the
/// first three.
fn read_point(value: &Value, location: &Location) -> Result<Point> {
    let ordinates = as_array(value, location)?;
    if ordinates.len() < 2 {
        return Err(malformed(
            format!(
                "a position needs at least 2 ordinates, found {}",
                ordinates.len()
            ),
            location,
        ));
    }

    let ordinate = |idx: usize| -> Result<f64> {
        ordinates[idx]
            .as_f64()
            .ok_or_else(|| malformed("expected a number", &location.index(idx)))
    };

    let point = if ordinates.len() > 2 {
        Point::new_3d(ordinate(0)?, ordinate(1)?, ordinate(2)?)
    } else {
        Point::new(ordinate(0)?, ordinate(1)?)
    };
    Ok(point)
}

fn read_array<T>(
    value: &Value,
    location: &Location,
    read_element: impl Fn(&Value, &Location) -> Result<T>,
) -> Result<Vec<T>> {
    as_array(value, location)?
        .iter()
        .enumerate()
        .map(|(idx, element)| read_element(element, &location.index(idx)))
        .collect()
}

fn as_array<'a>(value: &'a Value, location: &Location) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| malformed(format!("expected an array, found {value}"), location))
}

fn malformed(message: impl Into<String>, location: &Location) -> GeoJsonError {
    GeoJsonError::MalformedCoordinates {
        message: message.into(),
        location: location.to_string(),
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::test::{geometrycollection, linestring, multilinestring, point, polygon};

    #[test]
    fn decode_point_with_crs() {
        let doc = json!({
            "type": "Point",
            "coordinates": [30, 10],
            "crs": {"type": "name", "properties": {"name": "EPSG:4326"}},
        });
        let geom = GeoJsonDecoder::new().decode(&doc).unwrap();
        assert_eq!(geom, Geometry::Point(point::p0().with_srid(4326)));
    }

    #[test]
    fn point_dimensions() {
        let decoder = GeoJsonDecoder::new();

        let geom = decoder.decode(&json!({"type": "Point", "coordinates": [1, 2]}));
        assert_eq!(geom.unwrap(), Point::new(1., 2.).into());

        let geom = decoder.decode(&json!({"type": "Point", "coordinates": [1, 2, 3.5]}));
        assert_eq!(geom.unwrap(), point::p_z().into());

        // Ordinates past the third are dropped
        let geom = decoder.decode(&json!({"type": "Point", "coordinates": [1, 2, 3.5, 9]}));
        assert_eq!(geom.unwrap(), point::p_z().into());
    }

    #[test]
    fn point_too_short() {
        let err = GeoJsonDecoder::new()
            .decode(&json!({"type": "Point", "coordinates": [1]}))
            .unwrap_err();
        match err {
            GeoJsonError::MalformedCoordinates { location, .. } => {
                assert_eq!(location, "#/coordinates")
            }
            err => panic!("unexpected error {err}"),
        }
    }

    #[test]
    fn non_numeric_ordinate() {
        let err = GeoJsonDecoder::new()
            .decode(&json!({"type": "LineString", "coordinates": [[0, 0], [1, "a"]]}))
            .unwrap_err();
        match err {
            GeoJsonError::MalformedCoordinates { location, .. } => {
                assert_eq!(location, "#/coordinates/1/1")
            }
            err => panic!("unexpected error {err}"),
        }
    }

    #[test]
    fn non_array_where_array_expected() {
        let decoder = GeoJsonDecoder::new();
        let docs = [
            json!({"type": "LineString", "coordinates": 5}),
            json!({"type": "LineString", "coordinates": [[0, 0], 7]}),
            json!({"type": "Polygon", "coordinates": [[0, 0], [1, 1]]}),
            json!({"type": "MultiPolygon", "coordinates": [{"a": 1}]}),
            json!({"type": "MultiLineString", "coordinates": null}),
            json!({"type": "GeometryCollection", "geometries": {}}),
        ];
        for doc in docs {
            assert!(
                matches!(
                    decoder.decode(&doc),
                    Err(GeoJsonError::MalformedCoordinates { .. })
                ),
                "{doc}"
            );
        }
    }

    #[test]
    fn missing_coordinates() {
        let err = GeoJsonDecoder::new()
            .decode(&json!({"type": "Polygon"}))
            .unwrap_err();
        assert!(matches!(err, GeoJsonError::MalformedCoordinates { .. }));
    }

    #[test]
    fn unknown_type() {
        let err = GeoJsonDecoder::new()
            .decode(&json!({"type": "Circle", "coordinates": [0, 0, 1]}))
            .unwrap_err();
        match err {
            GeoJsonError::UnknownGeometryType {
                type_name,
                location,
            } => {
                assert_eq!(type_name, "Circle");
                assert_eq!(location, "#");
            }
            err => panic!("unexpected error {err}"),
        }
    }

    #[test]
    fn missing_type() {
        let decoder = GeoJsonDecoder::new();
        let err = decoder
            .decode(&json!({"coordinates": [0, 0]}))
            .unwrap_err();
        assert!(matches!(
            err,
            GeoJsonError::UnknownGeometryType { ref type_name, .. } if type_name == "null"
        ));

        let err = decoder.decode(&json!([0, 0])).unwrap_err();
        assert!(matches!(err, GeoJsonError::UnknownGeometryType { .. }));

        let err = decoder
            .decode(&json!({"type": 3, "coordinates": [0, 0]}))
            .unwrap_err();
        assert!(matches!(
            err,
            GeoJsonError::UnknownGeometryType { ref type_name, .. } if type_name == "3"
        ));
    }

    #[test]
    fn srid_defaults() {
        let doc = json!({"type": "LineString", "coordinates": [[30, 10], [10, 30], [40, 40]]});

        let geom = GeoJsonDecoder::new().decode(&doc).unwrap();
        assert_eq!(geom.srid(), 0);

        let geom = GeoJsonDecoder::with_default_srid(4326).decode(&doc).unwrap();
        assert_eq!(geom, linestring::ls0().with_srid(4326).into());
    }

    #[test]
    fn crs_overrides_default_srid() {
        let doc = json!({
            "type": "Point",
            "coordinates": [30, 10],
            "crs": {"type": "name", "properties": {"name": "EPSG:3857"}},
        });
        let geom = GeoJsonDecoder::with_default_srid(4326).decode(&doc).unwrap();
        assert_eq!(geom.srid(), 3857);
    }

    #[test]
    fn malformed_crs() {
        let doc = json!({
            "type": "Point",
            "coordinates": [30, 10],
            "crs": {"type": "name", "properties": {"name": "EPSG"}},
        });
        let err = GeoJsonDecoder::new().decode(&doc).unwrap_err();
        assert!(matches!(err, GeoJsonError::MalformedCrs(_)));
    }

    #[test]
    fn decode_polygon_with_hole() {
        let doc = json!({
            "type": "Polygon",
            "coordinates": [
                [[35, 10], [45, 45], [15, 40], [10, 20], [35, 10]],
                [[20, 30], [35, 35], [30, 20], [20, 30]],
            ],
        });
        let geom = GeoJsonDecoder::new().decode(&doc).unwrap();
        assert_eq!(geom, polygon::p1().into());
    }

    #[test]
    fn decode_multi_line_string() {
        let doc = json!({
            "type": "MultiLineString",
            "coordinates": [
                [[30, 10], [10, 30], [40, 40]],
                [[10, 10], [20, 20], [10, 40]],
            ],
        });
        let geom = GeoJsonDecoder::new().decode(&doc).unwrap();
        assert_eq!(geom, multilinestring::ml0().into());
    }

    #[test]
    fn empty_arrays() {
        let decoder = GeoJsonDecoder::new();
        let geom = decoder
            .decode(&json!({"type": "LineString", "coordinates": []}))
            .unwrap();
        assert_eq!(geom, LineString::default().into());

        let geom = decoder
            .decode(&json!({"type": "MultiPolygon", "coordinates": []}))
            .unwrap();
        assert_eq!(geom, MultiPolygon::default().into());
    }

    #[test]
    fn decode_collection() {
        let doc = json!({
            "type": "GeometryCollection",
            "crs": {"type": "name", "properties": {"name": "EPSG:4326"}},
            "geometries": [
                {"type": "Point", "coordinates": [1, 2]},
                {"type": "LineString", "coordinates": [[0, 0], [1, 1]]},
            ],
        });
        let geom = GeoJsonDecoder::new().decode(&doc).unwrap();
        assert_eq!(geom, geometrycollection::gc0().with_srid(4326).into());
    }

    #[test]
    fn nested_crs_is_ignored() {
        let doc = json!({
            "type": "GeometryCollection",
            "geometries": [{
                "type": "Point",
                "coordinates": [1, 2],
                "crs": {"type": "name", "properties": {"name": "EPSG:3857"}},
            }],
        });
        let Geometry::GeometryCollection(gc) = GeoJsonDecoder::with_default_srid(4326)
            .decode(&doc)
            .unwrap()
        else {
            panic!("expected a collection");
        };
        assert_eq!(gc.srid(), 4326);
        assert_eq!(gc.geometries()[0].srid(), 0);
    }

    #[test]
    fn nested_collection() {
        let doc = json!({
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Point", "coordinates": [30, 10]},
                {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "Point", "coordinates": [1, 2]},
                        {"type": "LineString", "coordinates": [[0, 0], [1, 1]]},
                    ],
                },
            ],
        });
        let geom = GeoJsonDecoder::new().decode(&doc).unwrap();
        assert_eq!(geom, geometrycollection::gc_nested().into());
    }

    #[test]
    fn nested_member_errors_carry_location() {
        let doc = json!({
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Point", "coordinates": [1, 2]},
                {"type": "Square", "coordinates": [1, 2]},
            ],
        });
        let err = GeoJsonDecoder::new().decode(&doc).unwrap_err();
        assert!(matches!(
            err,
            GeoJsonError::UnknownGeometryType { ref location, .. } if location == "#/geometries/1"
        ));

        let doc = json!({"type": "GeometryCollection", "geometries": [[1, 2]]});
        assert!(matches!(
            GeoJsonDecoder::new().decode(&doc),
            Err(GeoJsonError::MalformedCoordinates { .. })
        ));
    }

    #[test]
    fn geometries_member_takes_precedence() {
        let doc = json!({
            "type": "Point",
            "coordinates": [5, 5],
            "geometries": [{"type": "Point", "coordinates": [1, 2]}],
        });
        let geom = GeoJsonDecoder::new().decode(&doc).unwrap();
        assert_eq!(geom.geometry_type(), GeometryType::GeometryCollection);
    }

    #[test]
    fn collection_without_geometries() {
        let err = GeoJsonDecoder::new()
            .decode(&json!({"type": "GeometryCollection", "coordinates": []}))
            .unwrap_err();
        match err {
            GeoJsonError::MalformedCoordinates { location, .. } => {
                assert_eq!(location, "#/geometries")
            }
            err => panic!("unexpected error {err}"),
        }
    }

    #[test]
    fn decode_from_str_and_reader() {
        let s = r#"{"type":"Point","coordinates":[30,10]}"#;
        let decoder = GeoJsonDecoder::with_default_srid(4326);
        assert_eq!(
            decoder.decode_str(s).unwrap(),
            point::p0().with_srid(4326).into()
        );
        assert_eq!(read_geojson(s.as_bytes()).unwrap(), point::p0().into());

        assert!(matches!(
            decoder.decode_str("{\"type\":"),
            Err(GeoJsonError::SerdeJsonError(_))
        ));
    }

    #[test]
    fn decode_as_variant() {
        let doc = json!({"type": "Point", "coordinates": [30, 10]});
        let decoder = GeoJsonDecoder::new();
        let point: Point = decoder.decode_as(&doc).unwrap();
        assert_eq!(point, point::p0());

        let err = decoder.decode_as::<Polygon>(&doc).unwrap_err();
        assert!(matches!(
            err,
            GeoJsonError::IncorrectGeometryType {
                expected: GeometryType::Polygon,
                found: GeometryType::Point,
            }
        ));
    }
}
