use geozero::{CoordDimensions, GeomProcessor, GeozeroGeometry};

use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

/// Note that this does _not_ call `processor.point_begin` and `processor.point_end`, as geozero
/// does not expect them for the points of a MultiPoint.
fn process_coord<P: GeomProcessor>(
    point: &Point,
    coord_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    if processor.multi_dim() {
        processor.coordinate(
            point.x(),
            point.y(),
            point.z(),
            None,
            None,
            None,
            coord_idx,
        )
    } else {
        processor.xy(point.x(), point.y(), coord_idx)
    }
}

pub(crate) fn process_point<P: GeomProcessor>(
    geom: &Point,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.point_begin(geom_idx)?;
    process_coord(geom, 0, processor)?;
    processor.point_end(geom_idx)
}

fn process_points<P: GeomProcessor>(
    points: &[Point],
    tagged: bool,
    idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.linestring_begin(tagged, points.len(), idx)?;
    for (coord_idx, point) in points.iter().enumerate() {
        process_coord(point, coord_idx, processor)?;
    }
    processor.linestring_end(tagged, idx)
}

pub(crate) fn process_line_string<P: GeomProcessor>(
    geom: &LineString,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    process_points(geom.points(), true, geom_idx, processor)
}

pub(crate) fn process_polygon<P: GeomProcessor>(
    geom: &Polygon,
    tagged: bool,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.polygon_begin(tagged, geom.num_rings(), geom_idx)?;
    for (ring_idx, ring) in geom.rings().iter().enumerate() {
        process_points(ring.points(), false, ring_idx, processor)?;
    }
    processor.polygon_end(tagged, geom_idx)
}

pub(crate) fn process_multi_point<P: GeomProcessor>(
    geom: &MultiPoint,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.multipoint_begin(geom.num_points(), geom_idx)?;
    for (coord_idx, point) in geom.points().iter().enumerate() {
        process_coord(point, coord_idx, processor)?;
    }
    processor.multipoint_end(geom_idx)
}

pub(crate) fn process_multi_line_string<P: GeomProcessor>(
    geom: &MultiLineString,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.multilinestring_begin(geom.num_lines(), geom_idx)?;
    for (line_idx, line) in geom.lines().iter().enumerate() {
        process_points(line.points(), false, line_idx, processor)?;
    }
    processor.multilinestring_end(geom_idx)
}

pub(crate) fn process_multi_polygon<P: GeomProcessor>(
    geom: &MultiPolygon,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.multipolygon_begin(geom.num_polygons(), geom_idx)?;
    for (polygon_idx, polygon) in geom.polygons().iter().enumerate() {
        process_polygon(polygon, false, polygon_idx, processor)?;
    }
    processor.multipolygon_end(geom_idx)
}

pub(crate) fn process_geometry_collection<P: GeomProcessor>(
    geom: &GeometryCollection,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.geometrycollection_begin(geom.num_geometries(), geom_idx)?;
    for (idx, member) in geom.geometries().iter().enumerate() {
        process_geometry(member, idx, processor)?;
    }
    processor.geometrycollection_end(geom_idx)
}

pub(crate) fn process_geometry<P: GeomProcessor>(
    geom: &Geometry,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    match geom {
        Geometry::Point(g) => process_point(g, geom_idx, processor),
        Geometry::LineString(g) => process_line_string(g, geom_idx, processor),
        Geometry::Polygon(g) => process_polygon(g, true, geom_idx, processor),
        Geometry::MultiPoint(g) => process_multi_point(g, geom_idx, processor),
        Geometry::MultiLineString(g) => process_multi_line_string(g, geom_idx, processor),
        Geometry::MultiPolygon(g) => process_multi_polygon(g, geom_idx, processor),
        Geometry::GeometryCollection(g) => process_geometry_collection(g, geom_idx, processor),
    }
}

impl GeozeroGeometry for Geometry {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        processor.srid(GeozeroGeometry::srid(self))?;
        process_geometry(self, 0, processor)
    }

    fn dims(&self) -> CoordDimensions {
        if self.has_z() {
            CoordDimensions::xyz()
        } else {
            CoordDimensions::xy()
        }
    }

    fn srid(&self) -> Option<i32> {
        match Geometry::srid(self) {
            0 => None,
            srid => i32::try_from(srid).ok(),
        }
    }
}
