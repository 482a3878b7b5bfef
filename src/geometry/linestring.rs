use crate::geometry::Point;

/// An ordered sequence of points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    points: Vec<Point>,
    srid: u32,
}

impl LineString {
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

impl_srid!(LineString);

impl From<Vec<Point>> for LineString {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// A point sequence bounding a [`Polygon`][crate::geometry::Polygon] or one of its holes.
///
/// Closure (first point equal to last) is conventional but not checked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearRing {
    points: Vec<Point>,
    srid: u32,
}

impl LinearRing {
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

    /// Whether the first and last points coincide.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.x() == last.x() && first.y() == last.y(),
            _ => true,
        }
    }

    pub fn has_z(&self) -> bool {
        self.points.iter().any(Point::has_z)
    }
}

impl_srid!(LinearRing);

impl From<Vec<Point>> for LinearRing {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::linestring::ls0;
    use crate::test::polygon::shell;

    #[test]
    fn accessors() {
        let ls = ls0();
        assert_eq!(ls.num_points(), 3);
        assert_eq!(ls.points()[1], Point::new(10., 30.));
        assert!(!ls.has_z());
    }

    #[test]
    fn ring_closure() {
        assert!(shell().is_closed());
        assert!(!LinearRing::new(vec![Point::new(0., 0.), Point::new(1., 1.)]).is_closed());
        assert!(LinearRing::default().is_closed());
    }
}
