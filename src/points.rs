use super::core::{GeometricObject, ParseError, display_for_geom};
use serde::{Deserialize, Serialize};

/// Smallest number of components in a coordinate (x, y)
pub const MIN_DIM: usize = 2;
/// Largest number of components in a coordinate (x, y, z, m)
pub const MAX_DIM: usize = 4;

/// A position with 2 to 4 components: x, y and optionally z and m.
///
/// Examples
/// ```rust
/// use spatialwkt::Coordinate;
/// let c = Coordinate::new(vec![0.2, -7.9]).unwrap();
/// assert_eq!(c.xy(), (0.2, -7.9));
/// assert_eq!(c.z(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<f64>", try_from = "Vec<f64>")]
pub struct Coordinate {
    components: Vec<f64>,
}

/// A single position
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point(pub Coordinate);

/// A non-empty collection of points
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Coordinate>", try_from = "Vec<Coordinate>")]
pub struct MultiPoint {
    points: Vec<Coordinate>,
}

impl Coordinate {
    /// Instantiate a coordinate, checking that it has between 2 and 4 components
    pub fn new(components: Vec<f64>) -> Result<Self, ParseError> {
        Self::at_offset(components, 0)
    }

    /// Same as `new`, reporting `offset` as the location of an arity failure
    pub(crate) fn at_offset(components: Vec<f64>, offset: usize) -> Result<Self, ParseError> {
        if !(MIN_DIM..=MAX_DIM).contains(&components.len()) {
            return Err(ParseError::ArityMismatch {
                expected: "2 to 4 coordinate components",
                found: components.len(),
                offset,
            });
        }
        Ok(Self { components })
    }

    /// Shorthand for a planar coordinate
    pub fn xy(&self) -> (f64, f64) {
        (self.components[0], self.components[1])
    }

    pub fn x(&self) -> f64 {
        self.components[0]
    }

    pub fn y(&self) -> f64 {
        self.components[1]
    }

    pub fn z(&self) -> Option<f64> {
        self.components.get(2).copied()
    }

    pub fn m(&self) -> Option<f64> {
        self.components.get(3).copied()
    }

    /// Number of components
    pub fn dim(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &[f64] {
        &self.components
    }

    /// Components separated by spaces, as they appear inside WKT
    pub(crate) fn wkt_fragment(&self) -> String {
        let parts: Vec<String> = self.components.iter().map(|v| v.to_string()).collect();
        parts.join(" ")
    }
}

impl TryFrom<Vec<f64>> for Coordinate {
    type Error = ParseError;

    fn try_from(components: Vec<f64>) -> Result<Self, Self::Error> {
        Coordinate::new(components)
    }
}

impl From<Coordinate> for Vec<f64> {
    fn from(coord: Coordinate) -> Self {
        coord.components
    }
}

impl Point {
    /// Instantiate a planar point
    pub fn new(x: f64, y: f64) -> Self {
        Self(Coordinate {
            components: vec![x, y],
        })
    }

    pub fn coord(&self) -> &Coordinate {
        &self.0
    }

    /// Get planar coordinates as a tuple
    pub fn coords(&self) -> (f64, f64) {
        self.0.xy()
    }
}

impl GeometricObject for Point {
    /// WKT representation of the point
    fn wkt(&self) -> String {
        format!("POINT ({})", self.0.wkt_fragment())
    }
}

display_for_geom!(Point);

impl MultiPoint {
    /// Instantiate a multipoint collection. At least one point is required.
    ///
    /// Example
    /// ```rust
    /// use spatialwkt::{Coordinate, MultiPoint};
    /// let my_points = MultiPoint::new(vec![
    ///     Coordinate::new(vec![0.0, 0.0]).unwrap(),
    ///     Coordinate::new(vec![0.0, 1.0]).unwrap(),
    /// ])
    /// .unwrap();
    /// assert_eq!(my_points.points().len(), 2);
    /// assert!(MultiPoint::new(Vec::new()).is_err());
    /// ```
    pub fn new(points: Vec<Coordinate>) -> Result<Self, ParseError> {
        if points.is_empty() {
            return Err(ParseError::ArityMismatch {
                expected: "at least 1 point",
                found: 0,
                offset: 0,
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }
}

impl TryFrom<Vec<Coordinate>> for MultiPoint {
    type Error = ParseError;

    fn try_from(points: Vec<Coordinate>) -> Result<Self, Self::Error> {
        MultiPoint::new(points)
    }
}

impl From<MultiPoint> for Vec<Coordinate> {
    fn from(mp: MultiPoint) -> Self {
        mp.points
    }
}

impl GeometricObject for MultiPoint {
    /// WKT representation of the multipoint collection
    fn wkt(&self) -> String {
        let members: Vec<String> = self
            .points
            .iter()
            .map(|c| format!("({})", c.wkt_fragment()))
            .collect();
        format!("MULTIPOINT ({})", members.join(", "))
    }
}

display_for_geom!(MultiPoint);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_arity() {
        assert!(Coordinate::new(vec![1.0, 2.0]).is_ok());
        assert!(Coordinate::new(vec![1.0, 2.0, 3.0]).is_ok());
        assert!(Coordinate::new(vec![1.0, 2.0, 3.0, 4.0]).is_ok());

        match Coordinate::new(vec![1.0]) {
            Err(ParseError::ArityMismatch { found: 1, .. }) => (),
            other => panic!("Expected arity error, got {other:?}"),
        }
        match Coordinate::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]) {
            Err(ParseError::ArityMismatch { found: 5, .. }) => (),
            other => panic!("Expected arity error, got {other:?}"),
        }
    }

    #[test]
    fn test_accessors() {
        let c = Coordinate::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(c.xy(), (1.0, 2.0));
        assert_eq!(c.z(), Some(3.0));
        assert_eq!(c.m(), Some(4.0));
        assert_eq!(c.dim(), 4);

        let pt = Point::new(-71.0641, 42.3586);
        assert_eq!(pt.coords(), (-71.0641, 42.3586));
        assert_eq!(pt.coord().z(), None);
    }

    #[test]
    fn test_wkt() {
        assert_eq!(Point::new(1.5, -2.0).wkt(), "POINT (1.5 -2)");

        let mp = MultiPoint::new(vec![
            Coordinate::new(vec![1.0, 2.0]).unwrap(),
            Coordinate::new(vec![3.0, 4.0, 5.0]).unwrap(),
        ])
        .unwrap();
        assert_eq!(mp.to_string(), "MULTIPOINT ((1 2), (3 4 5))");
    }

    #[test]
    fn test_empty_multipoint() {
        match MultiPoint::new(Vec::new()) {
            Err(ParseError::ArityMismatch { found: 0, .. }) => (),
            other => panic!("Instantiated an empty multipoint: {other:?}"),
        }
    }
}
