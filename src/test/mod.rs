pub(crate) mod linestring;
pub(crate) mod multipolygon;
