use super::core::{GeometricObject, ParseError, display_for_geom};
use super::linestring::coordinate_list;
use super::points::Coordinate;
use serde::{Deserialize, Serialize};

/// Smallest number of coordinates in a closed ring
pub const MIN_RING_LEN: usize = 4;

/// A closed sequence of coordinates bounding a polygon (exterior or hole)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Coordinate>", try_from = "Vec<Coordinate>")]
pub struct Ring {
    points: Vec<Coordinate>,
}

/// Represents a polygon: the first ring is the exterior, the rest are holes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Ring>", try_from = "Vec<Ring>")]
pub struct Polygon {
    rings: Vec<Ring>,
}

/// A non-empty collection of polygons
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Polygon>", try_from = "Vec<Polygon>")]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl Ring {
    /// Instantiate a ring from a vector of coordinates.
    ///
    /// Example
    /// ```rust
    /// use spatialwkt::{Coordinate, Ring};
    /// let pts: Vec<Coordinate> = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)]
    ///     .iter()
    ///     .map(|(x, y)| Coordinate::new(vec![*x, *y]).unwrap())
    ///     .collect();
    /// let ring = Ring::new(pts).unwrap();
    /// assert_eq!(ring.points().len(), 4);
    /// ```
    pub fn new(points: Vec<Coordinate>) -> Result<Self, ParseError> {
        Self::validate(&points)?;
        Ok(Self { points })
    }

    /// Wrap coordinates already checked with `validate`
    pub(crate) fn from_checked(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Check ring length and closure without taking ownership
    pub fn validate(points: &[Coordinate]) -> Result<(), ParseError> {
        if points.len() < MIN_RING_LEN {
            return Err(ParseError::RingTooShort(points.len()));
        }
        if points[0] != points[points.len() - 1] {
            return Err(ParseError::UnclosedRing);
        }
        Ok(())
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }
}

impl TryFrom<Vec<Coordinate>> for Ring {
    type Error = ParseError;

    fn try_from(points: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Ring::new(points)
    }
}

impl From<Ring> for Vec<Coordinate> {
    fn from(ring: Ring) -> Self {
        ring.points
    }
}

impl Polygon {
    /// Instantiate a polygon from its rings. At least the exterior ring is required.
    pub fn new(rings: Vec<Ring>) -> Result<Self, ParseError> {
        if rings.is_empty() {
            return Err(ParseError::ArityMismatch {
                expected: "at least 1 ring",
                found: 0,
                offset: 0,
            });
        }
        Ok(Self { rings })
    }

    /// Instantiate a polygon from raw coordinate lists, validating every ring
    pub fn from_coordinates(rings: Vec<Vec<Coordinate>>) -> Result<Self, ParseError> {
        let rings = rings
            .into_iter()
            .map(Ring::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rings)
    }

    pub fn exterior(&self) -> &Ring {
        &self.rings[0]
    }

    pub fn holes(&self) -> &[Ring] {
        &self.rings[1..]
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }
}

impl TryFrom<Vec<Ring>> for Polygon {
    type Error = ParseError;

    fn try_from(rings: Vec<Ring>) -> Result<Self, Self::Error> {
        Polygon::new(rings)
    }
}

impl From<Polygon> for Vec<Ring> {
    fn from(poly: Polygon) -> Self {
        poly.rings
    }
}

fn ring_list(rings: &[Ring]) -> String {
    let parts: Vec<String> = rings.iter().map(|r| coordinate_list(&r.points)).collect();
    format!("({})", parts.join(", "))
}

impl GeometricObject for Polygon {
    /// WKT representation of the polygon
    fn wkt(&self) -> String {
        format!("POLYGON {}", ring_list(&self.rings))
    }
}

display_for_geom!(Polygon);

impl MultiPolygon {
    /// Instantiate a collection of polygons. At least one polygon is required.
    pub fn new(polygons: Vec<Polygon>) -> Result<Self, ParseError> {
        if polygons.is_empty() {
            return Err(ParseError::ArityMismatch {
                expected: "at least 1 polygon",
                found: 0,
                offset: 0,
            });
        }
        Ok(Self { polygons })
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}

impl TryFrom<Vec<Polygon>> for MultiPolygon {
    type Error = ParseError;

    fn try_from(polygons: Vec<Polygon>) -> Result<Self, Self::Error> {
        MultiPolygon::new(polygons)
    }
}

impl From<MultiPolygon> for Vec<Polygon> {
    fn from(mp: MultiPolygon) -> Self {
        mp.polygons
    }
}

impl GeometricObject for MultiPolygon {
    fn wkt(&self) -> String {
        let parts: Vec<String> = self.polygons.iter().map(|p| ring_list(&p.rings)).collect();
        format!("MULTIPOLYGON ({})", parts.join(", "))
    }
}

display_for_geom!(MultiPolygon);
