//! Defines [`GeoJsonError`], representing all errors returned by this crate.

use std::fmt::Debug;
use thiserror::Error;

use crate::geometry::GeometryType;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoJsonError {
    /// The `type` discriminator was missing or is not a known geometry type.
    #[error("\"{type_name}\" is not a valid Geometry type (at {location})")]
    UnknownGeometryType {
        /// The offending discriminator, or `null` when the field was absent.
        type_name: String,
        /// JSON pointer to the object carrying the discriminator.
        location: String,
    },

    /// The `crs` object could not be turned into an SRID.
    #[error("Malformed CRS: {0}")]
    MalformedCrs(String),

    /// Coordinates were missing, not nested as expected, or too short.
    #[error("Malformed coordinates at {location}: {message}")]
    MalformedCoordinates {
        /// What was wrong with the value.
        message: String,
        /// JSON pointer to the offending value.
        location: String,
    },

    /// A document decoded to a different variant than the one requested.
    #[error("Incorrect geometry type: expected {expected}, found {found}")]
    IncorrectGeometryType {
        /// The requested variant.
        expected: GeometryType,
        /// The variant the document actually described.
        found: GeometryType,
    },

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoJsonError>;
