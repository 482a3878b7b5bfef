//! Implements [`GeozeroGeometry`][geozero::GeozeroGeometry] for [`Geometry`][crate::geometry::Geometry],
//! so a geometry can be streamed into any geozero processor, e.g. to produce WKT.

mod geometry;
