use super::core::{GeometricObject, ParseError, display_for_geom};
use super::points::Coordinate;
use serde::{Deserialize, Serialize};
use std::iter::Zip;
use std::slice::Iter;

/// Represents a sequence of line segments
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Coordinate>", try_from = "Vec<Coordinate>")]
pub struct LineString {
    points: Vec<Coordinate>,
}

/// A non-empty collection of linestrings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<LineString>", try_from = "Vec<LineString>")]
pub struct MultiLineString {
    lines: Vec<LineString>,
}

impl GeometricObject for LineString {
    /// WKT representation of the LineString
    fn wkt(&self) -> String {
        format!("LINESTRING {}", coordinate_list(&self.points))
    }
}

display_for_geom!(LineString);

impl LineString {
    /// Instantiate a new LineString from a vector of coordinates.
    ///
    /// A single vertex is accepted; closure is never required.
    pub fn new(points: Vec<Coordinate>) -> Result<Self, ParseError> {
        if points.is_empty() {
            Err(ParseError::ArityMismatch {
                expected: "at least 1 coordinate",
                found: 0,
                offset: 0,
            })
        } else {
            Ok(Self { points })
        }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Returns an iterator over the segments of the linestring
    pub fn edges<'a>(&'a self) -> Zip<Iter<'a, Coordinate>, Iter<'a, Coordinate>> {
        self.points.iter().zip(&self.points[1..])
    }

    /// Get the total number of vertices in the linestring.
    pub fn total_vertices(&self) -> usize {
        self.points.len()
    }
}

impl TryFrom<Vec<Coordinate>> for LineString {
    type Error = ParseError;

    fn try_from(points: Vec<Coordinate>) -> Result<Self, Self::Error> {
        LineString::new(points)
    }
}

impl From<LineString> for Vec<Coordinate> {
    fn from(line: LineString) -> Self {
        line.points
    }
}

impl MultiLineString {
    /// Instantiate a collection of linestrings. At least one line is required.
    pub fn new(lines: Vec<LineString>) -> Result<Self, ParseError> {
        if lines.is_empty() {
            return Err(ParseError::ArityMismatch {
                expected: "at least 1 linestring",
                found: 0,
                offset: 0,
            });
        }
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }
}

impl TryFrom<Vec<LineString>> for MultiLineString {
    type Error = ParseError;

    fn try_from(lines: Vec<LineString>) -> Result<Self, Self::Error> {
        MultiLineString::new(lines)
    }
}

impl From<MultiLineString> for Vec<LineString> {
    fn from(mls: MultiLineString) -> Self {
        mls.lines
    }
}

impl GeometricObject for MultiLineString {
    fn wkt(&self) -> String {
        let members: Vec<String> = self.lines.iter().map(|l| coordinate_list(&l.points)).collect();
        format!("MULTILINESTRING ({})", members.join(", "))
    }
}

display_for_geom!(MultiLineString);

/// Render coordinates as a parenthesised, comma separated WKT list
pub(crate) fn coordinate_list(points: &[Coordinate]) -> String {
    let parts: Vec<String> = points.iter().map(|c| c.wkt_fragment()).collect();
    format!("({})", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(raw: &[(f64, f64)]) -> Vec<Coordinate> {
        raw.iter()
            .map(|(x, y)| Coordinate::new(vec![*x, *y]).unwrap())
            .collect()
    }

    #[test]
    fn test_instantiation_valid() {
        let ls = LineString::new(coords(&[(0.3, 0.3), (0.34, 0.98), (0.56, -123.6)])).unwrap();
        assert_eq!(ls.total_vertices(), 3);

        // A single vertex is still a linestring
        LineString::new(coords(&[(0.3, 0.3)])).unwrap();
    }

    #[test]
    #[should_panic]
    fn test_instantiation_invalid() {
        LineString::new(Vec::new()).unwrap();
    }

    #[test]
    fn test_total_edges() {
        let ls = LineString::new(coords(&[(0.3, 0.3), (0.34, 0.98), (0.56, -123.6)])).unwrap();
        let edges: Vec<(&Coordinate, &Coordinate)> = ls.edges().collect();
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_wkt() {
        let ls = LineString::new(coords(&[(1.0, 2.0), (3.0, 4.0)])).unwrap();
        assert_eq!(ls.wkt(), "LINESTRING (1 2, 3 4)");

        let mls = MultiLineString::new(vec![
            ls.clone(),
            LineString::new(coords(&[(5.0, 6.0)])).unwrap(),
        ])
        .unwrap();
        assert_eq!(mls.to_string(), "MULTILINESTRING ((1 2, 3 4), (5 6))");
    }

    #[test]
    fn test_empty_multilinestring() {
        match MultiLineString::new(Vec::new()) {
            Err(ParseError::ArityMismatch { found: 0, .. }) => (),
            other => panic!("Instantiated an empty multilinestring: {other:?}"),
        }
    }
}
