use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// Convert a Point to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo(point: &Point) -> geo::Coord {
    geo::Coord {
        x: point.x(),
        y: point.y(),
    }
}

/// Convert a Point to a [`geo::Point`].
///
/// Only the first two dimensions will be kept.
pub fn point_to_geo(point: &Point) -> geo::Point {
    geo::Point(coord_to_geo(point))
}

fn points_to_geo(points: &[Point]) -> geo::LineString {
    geo::LineString::new(points.iter().map(coord_to_geo).collect())
}

/// Convert a LineString to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(line_string: &LineString) -> geo::LineString {
    points_to_geo(line_string.points())
}

/// Convert a Polygon to a [`geo::Polygon`].
///
/// Only the first two dimensions will be kept. A polygon without rings becomes a polygon with an
/// empty exterior.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon {
    let exterior = polygon
        .exterior()
        .map(|ring| points_to_geo(ring.points()))
        .unwrap_or_else(|| geo::LineString::new(vec![]));
    let interiors = polygon
        .interiors()
        .iter()
        .map(|ring| points_to_geo(ring.points()))
        .collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert a MultiPoint to a [`geo::MultiPoint`].
///
/// Only the first two dimensions will be kept.
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> geo::MultiPoint {
    geo::MultiPoint::new(multi_point.points().iter().map(point_to_geo).collect())
}

/// Convert a MultiLineString to a [`geo::MultiLineString`].
///
/// Only the first two dimensions will be kept.
pub fn multi_line_string_to_geo(multi_line_string: &MultiLineString) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_line_string
            .lines()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

/// Convert a MultiPolygon to a [`geo::MultiPolygon`].
///
/// Only the first two dimensions will be kept.
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo::MultiPolygon {
    geo::MultiPolygon::new(
        multi_polygon
            .polygons()
            .iter()
            .map(polygon_to_geo)
            .collect(),
    )
}

/// Convert a GeometryCollection to a [`geo::GeometryCollection`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_collection_to_geo(collection: &GeometryCollection) -> geo::GeometryCollection {
    geo::GeometryCollection::new_from(
        collection
            .geometries()
            .iter()
            .map(geometry_to_geo)
            .collect(),
    )
}

/// Convert any Geometry to a [`geo::Geometry`].
///
/// Only the first two dimensions will be kept. SRIDs are dropped.
pub fn geometry_to_geo(geometry: &Geometry) -> geo::Geometry {
    match geometry {
        Geometry::Point(g) => geo::Geometry::Point(point_to_geo(g)),
        Geometry::LineString(g) => geo::Geometry::LineString(line_string_to_geo(g)),
        Geometry::Polygon(g) => geo::Geometry::Polygon(polygon_to_geo(g)),
        Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(multi_point_to_geo(g)),
        Geometry::MultiLineString(g) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(g))
        }
        Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(g)),
        Geometry::GeometryCollection(g) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(g))
        }
    }
}

impl From<&Geometry> for geo::Geometry {
    fn from(value: &Geometry) -> Self {
        geometry_to_geo(value)
    }
}

impl From<&Point> for geo::Point {
    fn from(value: &Point) -> Self {
        point_to_geo(value)
    }
}

impl From<Point> for geo::Point {
    fn from(value: Point) -> Self {
        point_to_geo(&value)
    }
}

impl From<geo::Coord> for Point {
    fn from(value: geo::Coord) -> Self {
        Point::new(value.x, value.y)
    }
}

impl From<geo::Point> for Point {
    fn from(value: geo::Point) -> Self {
        value.0.into()
    }
}

fn points_from_geo(line_string: geo::LineString) -> Vec<Point> {
    line_string.into_iter().map(Point::from).collect()
}

impl From<geo::LineString> for LineString {
    fn from(value: geo::LineString) -> Self {
        LineString::new(points_from_geo(value))
    }
}

impl From<geo::Polygon> for Polygon {
    fn from(value: geo::Polygon) -> Self {
        let (exterior, interiors) = value.into_inner();
        let rings = std::iter::once(exterior)
            .chain(interiors)
            .map(|ring| LinearRing::new(points_from_geo(ring)))
            .collect();
        Polygon::new(rings)
    }
}

impl From<geo::MultiPoint> for MultiPoint {
    fn from(value: geo::MultiPoint) -> Self {
        MultiPoint::new(value.into_iter().map(Point::from).collect())
    }
}

impl From<geo::MultiLineString> for MultiLineString {
    fn from(value: geo::MultiLineString) -> Self {
        MultiLineString::new(value.into_iter().map(LineString::from).collect())
    }
}

impl From<geo::MultiPolygon> for MultiPolygon {
    fn from(value: geo::MultiPolygon) -> Self {
        MultiPolygon::new(value.into_iter().map(Polygon::from).collect())
    }
}

impl From<geo::GeometryCollection> for GeometryCollection {
    fn from(value: geo::GeometryCollection) -> Self {
        GeometryCollection::new(value.into_iter().map(Geometry::from).collect())
    }
}

/// Convert from a [`geo::Geometry`]. The result is 2-dimensional and has SRID `0`.
///
/// Lines become two-point LineStrings; Rects and Triangles become Polygons.
impl From<geo::Geometry> for Geometry {
    fn from(value: geo::Geometry) -> Self {
        match value {
            geo::Geometry::Point(g) => Point::from(g).into(),
            geo::Geometry::Line(g) => {
                LineString::new(vec![g.start.into(), g.end.into()]).into()
            }
            geo::Geometry::LineString(g) => LineString::from(g).into(),
            geo::Geometry::Polygon(g) => Polygon::from(g).into(),
            geo::Geometry::MultiPoint(g) => MultiPoint::from(g).into(),
            geo::Geometry::MultiLineString(g) => MultiLineString::from(g).into(),
            geo::Geometry::MultiPolygon(g) => MultiPolygon::from(g).into(),
            geo::Geometry::GeometryCollection(g) => GeometryCollection::from(g).into(),
            geo::Geometry::Rect(g) => Polygon::from(g.to_polygon()).into(),
            geo::Geometry::Triangle(g) => Polygon::from(g.to_polygon()).into(),
        }
    }
}
