use super::core::{GeomResult, GeometricObject, GeometryError, display_for_geom};
use super::*;
use serde::{Deserialize, Serialize};

pub mod geojson;
pub mod wkt;

pub use geojson::{from_geojson_str, to_geojson_string};
pub use wkt::{ParseOptions, parse_wkt, parse_wkt_with};

/// Geometry value obtained from parsing serialized input.
///
/// Serializes to a GeoJSON geometry object: `{"type": "Point", "coordinates": [1.0, 2.0]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    /// Name of the geometry kind, as used by GeoJSON
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Total number of coordinates, counting ring closing points
    pub fn num_coordinates(&self) -> usize {
        fn rings(poly: &Polygon) -> usize {
            poly.rings().iter().map(|r| r.points().len()).sum()
        }
        match self {
            Geometry::Point(_) => 1,
            Geometry::MultiPoint(mp) => mp.points().len(),
            Geometry::LineString(ls) => ls.total_vertices(),
            Geometry::MultiLineString(mls) => mls.lines().iter().map(|l| l.total_vertices()).sum(),
            Geometry::Polygon(poly) => rings(poly),
            Geometry::MultiPolygon(mp) => mp.polygons().iter().map(rings).sum(),
        }
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Geometry::Point(pt) => Some(pt),
            _ => None,
        }
    }

    /// Read the planar coordinates of a point geometry as `(lon, lat)`.
    ///
    /// Example
    /// ```rust
    /// use spatialwkt::serialization::parse_wkt;
    /// let geom = parse_wkt("POINT(-71.0641 42.3586)").unwrap();
    /// let (lon, lat) = geom.point_lon_lat().unwrap();
    /// assert_eq!((lon, lat), (-71.0641, 42.3586));
    /// ```
    pub fn point_lon_lat(&self) -> GeomResult<(f64, f64)> {
        match self.as_point() {
            Some(pt) => Ok(pt.coords()),
            None => Err(GeometryError::IncorrectGeometryType(format!(
                "expected Point, got {}",
                self.kind()
            ))),
        }
    }
}

impl GeometricObject for Geometry {
    fn wkt(&self) -> String {
        match self {
            Geometry::Point(g) => g.wkt(),
            Geometry::MultiPoint(g) => g.wkt(),
            Geometry::LineString(g) => g.wkt(),
            Geometry::MultiLineString(g) => g.wkt(),
            Geometry::Polygon(g) => g.wkt(),
            Geometry::MultiPolygon(g) => g.wkt(),
        }
    }
}

display_for_geom!(Geometry);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_count() {
        let geom = parse_wkt("POLYGON((0 0, 0 1, 1 1, 0 0), (0.1 0.1, 0.1 0.2, 0.2 0.2, 0.1 0.1))")
            .unwrap();
        assert_eq!(geom.kind(), "Polygon");
        assert_eq!(geom.num_coordinates(), 8);
        assert!(geom.as_point().is_none());
    }

    #[test]
    fn test_point_lon_lat_wrong_kind() {
        let geom = parse_wkt("LINESTRING(1 2, 3 4)").unwrap();
        match geom.point_lon_lat() {
            Err(GeometryError::IncorrectGeometryType(msg)) => {
                assert_eq!(msg, "expected Point, got LineString")
            }
            other => panic!("Expected a geometry type error, got {other:?}"),
        }
    }

    #[test]
    fn test_display_is_wkt() {
        let geom = parse_wkt("MULTIPOINT((1 2),(3 4))").unwrap();
        assert_eq!(geom.to_string(), "MULTIPOINT ((1 2), (3 4))");
    }
}
