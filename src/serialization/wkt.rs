use super::Geometry;
use crate::core::ParseError;
use crate::*;
use regex::Regex;
use std::sync::OnceLock;

const NUMBER: &str = r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?";

static NUMBER_RE: OnceLock<Regex> = OnceLock::new();

/// Get numeric literal regex once to avoid recompilation (thread-safe)
fn number_re() -> &'static Regex {
    NUMBER_RE.get_or_init(|| Regex::new(NUMBER).expect("numeric literal pattern is valid"))
}

type ScanResult<T> = Result<T, ParseError>;

/// Options controlling how strictly a WKT literal is read
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    /// Fail with `TrailingCharacters` when anything but whitespace follows the geometry
    pub reject_trailing: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            reject_trailing: true,
        }
    }
}

/// Cursor over the bytes of a single WKT literal
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn found(&self) -> Option<char> {
        self.text.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    fn expected(&self, expected: &'static str) -> ParseError {
        ParseError::ExpectedToken {
            expected,
            found: self.found(),
            offset: self.pos,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos >= self.text.len()
    }

    fn read_identifier(&mut self) -> ScanResult<&'a str> {
        self.skip_whitespace();
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(ParseError::MissingIdentifier { offset: start });
        }
        // Only ASCII letters were consumed, so both ends are char boundaries
        Ok(&self.text[start..self.pos])
    }

    fn expect_open_paren(&mut self) -> ScanResult<()> {
        self.skip_whitespace();
        if self.peek() != Some(b'(') {
            return Err(self.expected("'('"));
        }
        self.pos += 1;
        Ok(())
    }

    /// Consume a `,` (returns true) or a `)` (returns false)
    fn expect_comma_or_close(&mut self) -> ScanResult<bool> {
        self.skip_whitespace();
        match self.peek() {
            Some(b',') => {
                self.pos += 1;
                Ok(true)
            }
            Some(b')') => {
                self.pos += 1;
                Ok(false)
            }
            _ => Err(self.expected("',' or ')'")),
        }
    }

    fn read_number(&mut self) -> ScanResult<f64> {
        let start = self.pos;
        let rest = &self.text[start..];
        let literal = match number_re().find(rest) {
            Some(m) => m.as_str(),
            None => return Err(ParseError::InvalidNumber { offset: start }),
        };
        let end = start + literal.len();
        // A literal must be followed by a separator, e.g. `1.5abc` is rejected
        match self.text.as_bytes().get(end) {
            None | Some(b' ' | b'\t' | b'\n' | b'\r' | b',' | b')') => (),
            Some(_) => return Err(ParseError::InvalidNumber { offset: start }),
        }
        let value = literal
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber { offset: start })?;
        self.pos = end;
        Ok(value)
    }

    /// Read whitespace separated numbers up to and including a `,` or `)`.
    ///
    /// Returns the components and whether the terminator was a comma. Arity is
    /// left to the caller.
    fn read_numeric_tuple(&mut self) -> ScanResult<(Vec<f64>, bool)> {
        self.skip_whitespace();
        let mut components = Vec::with_capacity(4);
        loop {
            components.push(self.read_number()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    return Ok((components, true));
                }
                Some(b')') => {
                    self.pos += 1;
                    return Ok((components, false));
                }
                None => return Err(self.expected("',' or ')'")),
                Some(_) => (),
            }
        }
    }
}

/// Read `(` followed by coordinates up to the matching `)`.
///
/// With `multi` set, each coordinate may sit in its own group as in
/// `MULTIPOINT((1 2), (3 4))`. The bare form `MULTIPOINT(1 2, 3 4)` is also
/// accepted; the first member decides which form the whole list uses.
fn read_point_list(s: &mut Scanner, multi: bool) -> ScanResult<Vec<Coordinate>> {
    s.expect_open_paren()?;
    let wrapped = multi && {
        s.skip_whitespace();
        s.peek() == Some(b'(')
    };
    if wrapped {
        s.expect_open_paren()?;
    }
    log::trace!("point list at byte {} (wrapped: {wrapped})", s.pos);

    let mut coords = Vec::new();
    loop {
        let start = s.pos;
        let (components, comma) = s.read_numeric_tuple()?;
        coords.push(Coordinate::at_offset(components, start)?);
        if comma {
            if wrapped {
                s.pos -= 1;
                return Err(s.expected("')'"));
            }
            continue;
        }
        if wrapped && s.expect_comma_or_close()? {
            s.expect_open_paren()?;
            continue;
        }
        return Ok(coords);
    }
}

/// Read `(` followed by coordinate lists up to the matching `)`.
///
/// With `is_polygon` set, every list is checked as a closed ring.
fn read_ring_list(s: &mut Scanner, is_polygon: bool) -> ScanResult<Vec<Vec<Coordinate>>> {
    s.expect_open_paren()?;
    log::trace!("ring list at byte {} (polygon: {is_polygon})", s.pos);
    let mut rings = Vec::new();
    loop {
        let points = read_point_list(s, false)?;
        if is_polygon {
            Ring::validate(&points)?;
        }
        rings.push(points);
        if !s.expect_comma_or_close()? {
            return Ok(rings);
        }
    }
}

/// Assemble rings that `read_ring_list` already checked
fn into_polygon(rings: Vec<Vec<Coordinate>>) -> ScanResult<Polygon> {
    Polygon::new(rings.into_iter().map(Ring::from_checked).collect())
}

/// Read `(` followed by polygon ring lists up to the matching `)`
fn read_polygon_list(s: &mut Scanner) -> ScanResult<Vec<Vec<Vec<Coordinate>>>> {
    s.expect_open_paren()?;
    log::trace!("polygon list at byte {}", s.pos);
    let mut polygons = Vec::new();
    loop {
        polygons.push(read_ring_list(s, true)?);
        if !s.expect_comma_or_close()? {
            return Ok(polygons);
        }
    }
}

fn read_geometry(s: &mut Scanner) -> ScanResult<Geometry> {
    let ident = s.read_identifier()?;
    let geom = match ident {
        "POINT" => {
            let start = s.pos;
            let mut coords = read_point_list(s, false)?;
            if coords.len() != 1 {
                return Err(ParseError::ArityMismatch {
                    expected: "exactly 1 coordinate",
                    found: coords.len(),
                    offset: start,
                });
            }
            Geometry::Point(Point(coords.remove(0)))
        }
        "MULTIPOINT" => Geometry::MultiPoint(MultiPoint::new(read_point_list(s, true)?)?),
        "LINESTRING" => Geometry::LineString(LineString::new(read_point_list(s, false)?)?),
        "POLYGON" => Geometry::Polygon(into_polygon(read_ring_list(s, true)?)?),
        "MULTILINESTRING" => {
            let lines = read_ring_list(s, false)?
                .into_iter()
                .map(LineString::new)
                .collect::<Result<Vec<_>, _>>()?;
            Geometry::MultiLineString(MultiLineString::new(lines)?)
        }
        "MULTIPOLYGON" => {
            let polygons = read_polygon_list(s)?
                .into_iter()
                .map(into_polygon)
                .collect::<Result<Vec<_>, _>>()?;
            Geometry::MultiPolygon(MultiPolygon::new(polygons)?)
        }
        _ => return Err(ParseError::UnknownGeometryType(ident.to_string())),
    };
    Ok(geom)
}

/// Parse a WKT string and return the parsed geometry.
///
/// Keywords are case-sensitive and anything after the closing parenthesis is
/// ignored. Use `parse_wkt_with` and `ParseOptions::strict` to reject trailing input.
///
/// Examples
/// ```rust
/// use spatialwkt::serialization::{parse_wkt, Geometry};
/// use spatialwkt::core::ParseError;
///
/// match parse_wkt("POINT (-71.0641 42.3586)") {
///     Ok(Geometry::Point(pt)) => assert_eq!(pt.coords(), (-71.0641, 42.3586)),
///     other => panic!("Expected a point, got {other:?}"),
/// }
///
/// let err = parse_wkt("BOX(1 2,3 4)").unwrap_err();
/// assert_eq!(err, ParseError::UnknownGeometryType(String::from("BOX")));
/// ```
pub fn parse_wkt(text: &str) -> Result<Geometry, ParseError> {
    parse_wkt_with(text, &ParseOptions::default())
}

/// Parse a WKT string using the given options
pub fn parse_wkt_with(text: &str, options: &ParseOptions) -> Result<Geometry, ParseError> {
    let mut scanner = Scanner::new(text);
    let result = read_geometry(&mut scanner).and_then(|geom| {
        if options.reject_trailing && !scanner.at_end() {
            Err(ParseError::TrailingCharacters {
                offset: scanner.pos,
            })
        } else {
            Ok(geom)
        }
    });
    match &result {
        Ok(geom) => log::debug!("parsed {} with {} coordinates", geom.kind(), geom.num_coordinates()),
        Err(err) => log::debug!("failed to parse WKT: {err}"),
    }
    result
}
