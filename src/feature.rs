use super::core::{GeomResult, GeometryError};
use super::serialization::{Geometry, parse_wkt};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A geometry with an optional identifier and free-form properties,
/// serialized as a GeoJSON Feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub geometry: Geometry,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Map<String, Value>,
}

// GeoJSON allows `"properties": null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            id: None,
            geometry,
            properties: Map::new(),
        }
    }

    /// Build a feature from a WKT literal.
    ///
    /// Example
    /// ```rust
    /// use spatialwkt::Feature;
    /// let feature = Feature::from_wkt("POINT(-71.0677 42.3584)")
    ///     .unwrap()
    ///     .with_property("name", "Starbucks");
    /// assert_eq!(feature.property_str("name"), Some("Starbucks"));
    /// ```
    pub fn from_wkt(wkt: &str) -> GeomResult<Self> {
        match parse_wkt(wkt) {
            Ok(geometry) => Ok(Self::new(geometry)),
            Err(source) => Err(GeometryError::Context {
                context: String::from("feature from WKT"),
                source,
            }),
        }
    }

    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Get a property if it is present and holds a string
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ParseError;
    use serde_json::json;

    #[test]
    fn test_from_wkt() {
        let feature = Feature::from_wkt("POINT(-71.06772422790527 42.35848049347556)").unwrap();
        assert_eq!(
            feature.geometry.point_lon_lat().unwrap(),
            (-71.06772422790527, 42.35848049347556)
        );
        assert!(feature.properties.is_empty());
    }

    #[test]
    fn test_from_wkt_error_keeps_source() {
        match Feature::from_wkt("POLYGON((0 0, 1 0, 1 1, 0 1))") {
            Err(GeometryError::Context { context, source }) => {
                assert_eq!(context, "feature from WKT");
                assert_eq!(source, ParseError::UnclosedRing);
            }
            other => panic!("Expected a wrapped parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_serialize() {
        let feature = Feature::from_wkt("POINT(1 2)")
            .unwrap()
            .with_id("abc")
            .with_property("name", "Starbucks");
        assert_eq!(
            serde_json::to_value(&feature).unwrap(),
            json!({
                "type": "Feature",
                "id": "abc",
                "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
                "properties": {"name": "Starbucks"}
            })
        );

        let plain = serde_json::to_value(Feature::from_wkt("POINT(1 2)").unwrap()).unwrap();
        assert!(plain.get("id").is_none());
    }

    #[test]
    fn test_deserialize() {
        let raw = r#"{
            "type": "Feature",
            "id": 7,
            "geometry": {"type": "LineString", "coordinates": [[1, 2], [3, 4]]},
            "properties": {"name": "Main St", "lanes": 2}
        }"#;
        let feature: Feature = serde_json::from_str(raw).unwrap();
        assert_eq!(feature.id, Some(json!(7)));
        assert_eq!(feature.geometry.kind(), "LineString");
        assert_eq!(feature.property_str("name"), Some("Main St"));
        assert_eq!(feature.property_str("lanes"), None);

        let raw = r#"{
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [-71.06, 42.35]},
            "properties": null
        }"#;
        let feature: Feature = serde_json::from_str(raw).unwrap();
        assert!(feature.properties.is_empty());
        assert_eq!(feature.id, None);

        let raw = r#"{"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2]}}"#;
        let feature: Feature = serde_json::from_str(raw).unwrap();
        assert!(feature.properties.is_empty());
    }
}
