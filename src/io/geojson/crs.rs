//! The legacy GeoJSON `crs` member, `{"type":"name","properties":{"name":"EPSG:<srid>"}}`.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::error::{GeoJsonError, Result};

/// Authority written in front of the SRID.
pub const EPSG_AUTHORITY: &str = "EPSG";

/// Extract the SRID from a `crs` object.
///
/// The name found at `properties.name` is split on `:` and its second segment parsed as the SRID,
/// so both `EPSG:4326` and `EPSG:4326:extra` give `4326`.
pub fn srid_from_crs(crs: &Value) -> Result<u32> {
    let name = crs
        .pointer("/properties/name")
        .and_then(Value::as_str)
        .ok_or_else(|| GeoJsonError::MalformedCrs("missing string at crs.properties.name".into()))?;

    let code = name.split(':').nth(1).ok_or_else(|| {
        GeoJsonError::MalformedCrs(format!("name {name:?} is not of the form AUTHORITY:CODE"))
    })?;

    code.parse::<u32>().map_err(|err| {
        GeoJsonError::MalformedCrs(format!("invalid SRID {code:?} in name {name:?}: {err}"))
    })
}

/// Build the `crs` object naming `srid`.
pub fn crs_from_srid(srid: u32) -> Value {
    serde_json::json!({
        "type": "name",
        "properties": {
            "name": format!("{EPSG_AUTHORITY}:{srid}"),
        },
    })
}

/// Streams the `crs` object without building an intermediate [`Value`].
pub(crate) struct NamedCrs(pub(crate) u32);

impl Serialize for NamedCrs {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "name")?;
        map.serialize_entry("properties", &CrsProperties(self.0))?;
        map.end()
    }
}

struct CrsProperties(u32);

impl Serialize for CrsProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("name", &format!("{EPSG_AUTHORITY}:{}", self.0))?;
        map.end()
    }
}
