use std::io::{Cursor, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use geo_traits::{CoordTrait, Dimensions, LineStringTrait};

use crate::common::{Endianness, WKBType};
use crate::error::{WkbError, WkbResult};

/// Byte length of the fixed header: byte order (1), geometry type (4),
/// point count (4).
pub const HEADER_BYTES: usize = 1 + 4 + 4;

/// Encoded width of one XY coordinate pair.
pub const COORD_BYTES: usize = 2 * 8;

/// The byte length of an encoded polygon ring
pub fn polygon_wkb_size(ring: &impl LineStringTrait) -> usize {
    HEADER_BYTES + ring.num_coords() * COORD_BYTES
}

/// Write a polygon ring to a Writer encoded as compact WKB
pub fn write_polygon_as_wkb<W: Write>(
    mut writer: W,
    ring: &impl LineStringTrait<T = f64>,
) -> WkbResult<()> {
    write_header(&mut writer, ring)?;

    for coord in ring.coords() {
        writer.write_f64::<LittleEndian>(coord.x())?;
        writer.write_f64::<LittleEndian>(coord.y())?;
    }

    Ok(())
}

/// Encode a polygon ring into an exactly-sized WKB buffer.
///
/// The buffer is allocated once at `9 + 16 * N` bytes and never grows. Each
/// point write is bound-checked against that allocation; a mismatch between
/// the declared point count and the points produced by the ring fails with
/// [`WkbError::BufferOverflow`] instead of truncating or reallocating.
pub fn polygon_to_wkb(ring: &impl LineStringTrait<T = f64>) -> WkbResult<Vec<u8>> {
    let size = polygon_wkb_size(ring);
    let mut buf = vec![0u8; size];

    let mut writer = Cursor::new(buf.as_mut_slice());
    write_header(&mut writer, ring)?;

    for coord in ring.coords() {
        let offset = writer.position() as usize;
        if offset + COORD_BYTES > size {
            return Err(WkbError::BufferOverflow {
                capacity: size,
                offset,
            });
        }
        writer.write_f64::<LittleEndian>(coord.x())?;
        writer.write_f64::<LittleEndian>(coord.y())?;
    }

    Ok(buf)
}

fn write_header<W: Write>(writer: &mut W, ring: &impl LineStringTrait<T = f64>) -> WkbResult<()> {
    match ring.dim() {
        Dimensions::Xy | Dimensions::Unknown(2) => {}
        dim => {
            return Err(WkbError::General(format!(
                "only XY coordinates are supported, got {dim:?}"
            )))
        }
    }

    // Byte order
    writer.write_u8(Endianness::LittleEndian.into())?;

    // wkbType = 3
    writer.write_u32::<LittleEndian>(WKBType::Polygon.into())?;

    // numPoints
    let num_points: u32 = ring
        .num_coords()
        .try_into()
        .map_err(|_| WkbError::General("point count does not fit in u32".to_string()))?;
    writer.write_u32::<LittleEndian>(num_points)?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::wkt::{parse_polygon_wkt, write_polygon_wkt};
    use geo_types::{coord, LineString};

    fn hex(buf: &[u8]) -> String {
        buf.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn size_law() {
        for n in [0usize, 1, 2, 5, 100] {
            let ring = LineString::new(vec![coord! { x: 1.0, y: 2.0 }; n]);
            assert_eq!(polygon_wkb_size(&ring), 9 + 16 * n);
            assert_eq!(polygon_to_wkb(&ring).unwrap().len(), 9 + 16 * n);
        }
    }

    #[test]
    fn header_exactness() {
        let ring = LineString::new(vec![
            coord! { x: 0., y: 0. },
            coord! { x: 10., y: 0. },
            coord! { x: 0., y: 10. },
        ]);
        let buf = polygon_to_wkb(&ring).unwrap();

        assert_eq!(buf[0], 1);
        assert_eq!(u32::from_le_bytes(buf[1..5].try_into().unwrap()), 3);
        assert_eq!(u32::from_le_bytes(buf[5..9].try_into().unwrap()), 3);
    }

    #[test]
    fn point_bytes_are_little_endian_doubles() {
        let ring = LineString::new(vec![coord! { x: 12.5, y: -40.0 }]);
        let buf = polygon_to_wkb(&ring).unwrap();

        assert_eq!(buf[9..17], 12.5f64.to_le_bytes());
        assert_eq!(buf[17..25], (-40.0f64).to_le_bytes());
    }

    #[test]
    fn empty_ring() {
        let ring: LineString<f64> = LineString::new(vec![]);
        let buf = polygon_to_wkb(&ring).unwrap();

        assert_eq!(buf.len(), 9);
        assert_eq!(u32::from_le_bytes(buf[5..9].try_into().unwrap()), 0);
    }

    #[test]
    fn single_point() {
        let ring = LineString::new(vec![coord! { x: 1.0, y: 2.0 }]);
        let buf = polygon_to_wkb(&ring).unwrap();

        assert_eq!(buf.len(), 25);
    }

    #[test]
    fn streaming_writer_matches_exact_encoder() {
        let ring = LineString::new(vec![
            coord! { x: 1.5, y: 2.5 },
            coord! { x: -3.0, y: 4e8 },
        ]);

        let mut streamed = Vec::new();
        write_polygon_as_wkb(&mut streamed, &ring).unwrap();

        assert_eq!(streamed, polygon_to_wkb(&ring).unwrap());
    }

    #[test]
    fn square_end_to_end() {
        // A 3.0-sided square with its lower-left corner at (12.5, 40.0).
        let (x, y, side) = (12.5, 40.0, 3.0);
        let ring = LineString::new(vec![
            coord! { x: x, y: y },
            coord! { x: x + side, y: y },
            coord! { x: x + side, y: y + side },
            coord! { x: x, y: y + side },
            coord! { x: x, y: y },
        ]);
        let wkt = write_polygon_wkt(&ring);
        assert_eq!(
            wkt,
            "POLYGON ((12.5 40.0, 15.5 40.0, 15.5 43.0, 12.5 43.0, 12.5 40.0))"
        );

        let buf = polygon_to_wkb(&parse_polygon_wkt(&wkt).unwrap()).unwrap();

        assert_eq!(buf.len(), 89);
        assert!(hex(&buf).starts_with("010300000005000000"));
    }
}
