/// A position with two or three ordinates.
///
/// The third ordinate is optional, so a point is always either 2- or 3-dimensional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
    z: Option<f64>,
    srid: u32,
}

impl Point {
    /// Construct a 2-dimensional point.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            srid: 0,
        }
    }

    /// Construct a 3-dimensional point.
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            srid: 0,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// The number of ordinates, 2 or 3.
    pub fn dim(&self) -> usize {
        if self.z.is_some() {
            3
        } else {
            2
        }
    }

    pub fn has_z(&self) -> bool {
        self.z.is_some()
    }
}

impl_srid!(Point);

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point::new_3d(x, y, z)
    }
}
