use crate::geometry::LinearRing;

/// A polygon made of an outer shell followed by zero or more holes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    rings: Vec<LinearRing>,
    srid: u32,
}

impl Polygon {
    /// Construct from rings. The first ring is the shell, the rest are holes.
    pub fn new(rings: Vec<LinearRing>) -> Self {
        Self { rings, srid: 0 }
    }

    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// The outer shell, if the polygon has any ring at all.
    pub fn exterior(&self) -> Option<&LinearRing> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LinearRing] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn into_rings(self) -> Vec<LinearRing> {
        self.rings
    }

    pub fn has_z(&self) -> bool {
        self.rings.iter().any(LinearRing::has_z)
    }
}

impl_srid!(Polygon);

impl From<Vec<LinearRing>> for Polygon {
    fn from(rings: Vec<LinearRing>) -> Self {
        Self::new(rings)
    }
}
