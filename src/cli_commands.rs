use spatialwkt::core::{GeomResult, GeometricObject};
use spatialwkt::serialization::{self, Geometry, ParseOptions};
use spatialwkt::Feature;
use std::fs;

/// Resolve the WKT text, reading it from disk when `from_file` is set
pub fn read_input(input: &str, from_file: bool) -> GeomResult<String> {
    if from_file {
        log::debug!("reading WKT from '{input}'");
        Ok(fs::read_to_string(input)?)
    } else {
        Ok(input.to_string())
    }
}

fn parse(input: &str, strict: bool) -> GeomResult<Geometry> {
    let options = ParseOptions {
        reject_trailing: strict,
    };
    Ok(serialization::parse_wkt_with(input, &options)?)
}

/// Parse an input string and print some details about the shape
pub fn parse_show_detail(input: &str, strict: bool) -> GeomResult<()> {
    let geom = parse(input, strict)?;
    println!("Parsed a Geometry of Type {}!", geom.kind());
    println!("It contains {} total coordinates.", geom.num_coordinates());
    if let Geometry::Polygon(poly) = &geom {
        println!("The polygon has {} hole(s).", poly.holes().len());
    }
    println!("Canonical WKT: {}", geom.wkt());
    Ok(())
}

/// Split a `key=value` argument. Values that are valid JSON are kept typed.
pub fn parse_property(raw: &str) -> Result<(String, serde_json::Value), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => {
            let value = serde_json::from_str(value)
                .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
            Ok((key.to_string(), value))
        }
        _ => Err(format!("Expected key=value, got '{raw}'")),
    }
}

/// Convert the given WKT to GeoJSON, printing it or saving it to `output_path`
pub fn convert_to_geojson(
    input: &str,
    strict: bool,
    pretty: bool,
    as_feature: bool,
    properties: Vec<(String, serde_json::Value)>,
    output_path: Option<String>,
) -> GeomResult<()> {
    let geom = parse(input, strict)?;
    let json = if as_feature || !properties.is_empty() {
        let feature = properties
            .into_iter()
            .fold(Feature::new(geom), |f, (k, v)| f.with_property(k, v));
        if pretty {
            serde_json::to_string_pretty(&feature)?
        } else {
            serde_json::to_string(&feature)?
        }
    } else {
        serialization::to_geojson_string(&geom, pretty)?
    };

    match output_path {
        None => println!("{json}"),
        Some(ref fp) => {
            fs::write(fp, json.as_bytes())?;
            println!("GeoJSON saved to file: '{fp}'");
        }
    }
    Ok(())
}

/// Print the longitude and latitude of a point geometry
pub fn show_point(input: &str) -> GeomResult<()> {
    let geom = parse(input, false)?;
    let (lon, lat) = geom.point_lon_lat()?;
    println!("lat={lat}&lon={lon}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spatialwkt::core::GeometryError;

    #[test]
    fn test_parse_property() {
        assert_eq!(
            parse_property("name=Starbucks").unwrap(),
            (String::from("name"), serde_json::json!("Starbucks"))
        );
        assert_eq!(
            parse_property("lanes=2").unwrap(),
            (String::from("lanes"), serde_json::json!(2))
        );
        assert!(parse_property("novalue").is_err());
        assert!(parse_property("=x").is_err());
    }

    #[test]
    fn test_convert_to_file() {
        let path = std::env::temp_dir().join(format!("spatialwkt-{}.json", std::process::id()));
        let fp = path.to_string_lossy().to_string();
        convert_to_geojson(
            "POINT(1 2)",
            false,
            false,
            true,
            vec![(String::from("name"), serde_json::json!("cafe"))],
            Some(fp.clone()),
        )
        .unwrap();

        let written = read_input(&fp, true).unwrap();
        let feature: Feature = serde_json::from_str(&written).unwrap();
        assert_eq!(feature.property_str("name"), Some("cafe"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_errors_propagate() {
        assert!(matches!(
            parse_show_detail("POINT(1 2) extra", true),
            Err(GeometryError::Parse(_))
        ));
        assert!(matches!(
            show_point("LINESTRING(1 2, 3 4)"),
            Err(GeometryError::IncorrectGeometryType(_))
        ));
        assert!(matches!(
            read_input("/nonexistent/spatialwkt/input.wkt", true),
            Err(GeometryError::Io(_))
        ));
    }
}
