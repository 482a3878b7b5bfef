use crate::geometry::Point;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint {
    points: Vec<Point>,
    srid: u32,
}

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, srid: 0 }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn has_z(&self) -> bool {
        self.points.iter().any(Point::has_z)
    }
}

impl_srid!(MultiPoint);

impl From<Vec<Point>> for MultiPoint {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
