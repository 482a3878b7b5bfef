use crate::geometry::LineString;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString {
    lines: Vec<LineString>,
    srid: u32,
}

impl MultiLineString {
    pub fn new(lines: Vec<LineString>) -> Self {
        Self { lines, srid: 0 }
    }

    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }

    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn into_lines(self) -> Vec<LineString> {
        self.lines
    }

    pub fn has_z(&self) -> bool {
        self.lines.iter().any(LineString::has_z)
    }
}

impl_srid!(MultiLineString);

impl From<Vec<LineString>> for MultiLineString {
    fn from(lines: Vec<LineString>) -> Self {
        Self::new(lines)
    }
}
