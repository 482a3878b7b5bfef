use crate::geometry::Geometry;

/// A heterogeneous collection of geometries, which may itself contain collections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    srid: u32,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self {
            geometries,
            srid: 0,
        }
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn into_geometries(self) -> Vec<Geometry> {
        self.geometries
    }

    pub fn has_z(&self) -> bool {
        self.geometries.iter().any(Geometry::has_z)
    }
}

impl_srid!(GeometryCollection);

impl From<Vec<Geometry>> for GeometryCollection {
    fn from(geometries: Vec<Geometry>) -> Self {
        Self::new(geometries)
    }
}
