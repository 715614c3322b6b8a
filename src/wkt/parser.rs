use geo_types::{Coord, LineString};

use crate::error::{WkbError, WkbResult};

/// Parse a WKT polygon into its exterior ring.
///
/// Accepts one double-parenthesized ring, optionally preceded by a tag:
/// `POLYGON ((x1 y1, x2 y2, ..., xn yn))`. The tag is ignored rather than
/// validated, so `((0 0, 1 1))` parses as well. Ring closure and minimum
/// point count are not checked.
///
/// Multi-ring input, non-numeric coordinate tokens and trailing garbage are
/// rejected with [`WkbError::MalformedWkt`].
pub fn parse_polygon_wkt(text: &str) -> WkbResult<LineString<f64>> {
    let mut parser = WktParser::new(text);

    parser.skip_whitespace();
    parser.skip_tag();
    parser.skip_whitespace();
    parser.expect(b'(')?;
    parser.skip_whitespace();
    parser.expect(b'(')?;

    let mut coords = Vec::new();
    loop {
        parser.skip_whitespace();
        let x = parser.number()?;
        parser.skip_whitespace();
        let y = parser.number()?;
        coords.push(Coord { x, y });

        parser.skip_whitespace();
        match parser.bump() {
            Some(b',') => continue,
            Some(b')') => break,
            _ => return Err(parser.malformed("expected ',' or ')' after coordinate pair")),
        }
    }

    parser.skip_whitespace();
    if parser.peek() == Some(b',') {
        return Err(parser.malformed("multiple rings are not supported"));
    }
    parser.expect(b')')?;
    parser.skip_whitespace();
    if parser.peek().is_some() {
        return Err(parser.malformed("trailing characters after polygon"));
    }

    Ok(LineString::new(coords))
}

/// Cursor over the ASCII structure of a WKT string.
struct WktParser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> WktParser<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Consume a leading alphabetic tag (`POLYGON`), if any, without
    /// validating its spelling.
    fn skip_tag(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: u8) -> WkbResult<()> {
        match self.bump() {
            Some(byte) if byte == expected => Ok(()),
            _ => Err(self.malformed(&format!("expected '{}'", expected as char))),
        }
    }

    fn number(&mut self) -> WkbResult<f64> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| matches!(b, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E'))
        {
            self.pos += 1;
        }
        let token = &self.text[start..self.pos];
        if token.is_empty() {
            return Err(self.malformed("expected a number"));
        }
        token
            .parse::<f64>()
            .map_err(|_| self.malformed(&format!("invalid number {token:?}")))
    }

    fn malformed(&self, message: &str) -> WkbError {
        WkbError::MalformedWkt(format!("{message} at offset {}", self.pos))
    }
}
