use std::fmt::Write;

use geo_traits::{CoordTrait, LineStringTrait};

/// Format a ring as a WKT polygon: `POLYGON ((x1 y1, x2 y2, ...))`.
///
/// Coordinates are written with enough precision to round-trip through
/// [`parse_polygon_wkt`](crate::wkt::parse_polygon_wkt) bit-identically.
pub fn write_polygon_wkt(ring: &impl LineStringTrait<T = f64>) -> String {
    let mut out = String::with_capacity(12 + ring.num_coords() * 12);
    out.push_str("POLYGON ((");
    for (i, coord) in ring.coords().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Debug formatting keeps a trailing ".0" on integral values and is
        // shortest-round-trip for everything else.
        write!(out, "{:?} {:?}", coord.x(), coord.y()).unwrap();
    }
    out.push_str("))");
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::wkt::parse_polygon_wkt;
    use geo_types::{coord, LineString};

    #[test]
    fn square() {
        let ring = LineString::new(vec![
            coord! { x: 12.5, y: 40.0 },
            coord! { x: 15.5, y: 40.0 },
            coord! { x: 15.5, y: 43.0 },
            coord! { x: 12.5, y: 43.0 },
            coord! { x: 12.5, y: 40.0 },
        ]);
        assert_eq!(
            write_polygon_wkt(&ring),
            "POLYGON ((12.5 40.0, 15.5 40.0, 15.5 43.0, 12.5 43.0, 12.5 40.0))"
        );
    }

    #[test]
    fn empty_ring() {
        let ring: LineString<f64> = LineString::new(vec![]);
        assert_eq!(write_polygon_wkt(&ring), "POLYGON (())");
    }

    #[test]
    fn round_trip() {
        let ring = LineString::new(vec![
            coord! { x: -1.5, y: 0.000244140625 },
            coord! { x: 3e10, y: -7.25 },
            coord! { x: -1.5, y: 0.000244140625 },
        ]);
        let parsed = parse_polygon_wkt(&write_polygon_wkt(&ring)).unwrap();
        assert_eq!(parsed, ring);
    }
}
