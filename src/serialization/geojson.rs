use super::Geometry;
use crate::core::GeomResult;

/// Render a geometry as a GeoJSON geometry object
///
/// Example
/// ```rust
/// use spatialwkt::serialization::{parse_wkt, to_geojson_string};
/// let geom = parse_wkt("POINT(1.5 2)").unwrap();
/// assert_eq!(
///     to_geojson_string(&geom, false).unwrap(),
///     r#"{"type":"Point","coordinates":[1.5,2.0]}"#
/// );
/// ```
pub fn to_geojson_string(geom: &Geometry, pretty: bool) -> GeomResult<String> {
    let out = if pretty {
        serde_json::to_string_pretty(geom)?
    } else {
        serde_json::to_string(geom)?
    };
    Ok(out)
}

/// Read a GeoJSON geometry object, checking the same invariants as the WKT reader
pub fn from_geojson_str(raw: &str) -> GeomResult<Geometry> {
    let geom: Geometry = serde_json::from_str(raw)?;
    log::debug!("read {} from GeoJSON", geom.kind());
    Ok(geom)
}
