use crate::geometry::{LineString, Point};

pub(crate) fn ls0() -> LineString {
    LineString::new(vec![
        Point::new(30., 10.),
        Point::new(10., 30.),
        Point::new(40., 40.),
    ])
}

pub(crate) fn ls1() -> LineString {
    LineString::new(vec![
        Point::new(10., 10.),
        Point::new(20., 20.),
        Point::new(10., 40.),
    ])
}
