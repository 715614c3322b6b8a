use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};
use geo_types::{Coord, LineString};
use num_enum::TryFromPrimitive;

use crate::common::{Endianness, WKBType};
use crate::error::{WkbError, WkbResult};
use crate::wkb::writer::{COORD_BYTES, HEADER_BYTES};

/// Decode a compact-WKB polygon buffer back into its ring.
///
/// Inverts the layout written by [`polygon_to_wkb`](crate::wkb::polygon_to_wkb):
/// byte-order flag, geometry type, point count, then N interleaved XY
/// doubles. Bytes past `9 + 16 * N` are ignored. Doubles are returned
/// bit-identical to what was encoded.
pub fn polygon_from_wkb(buf: &[u8]) -> WkbResult<LineString<f64>> {
    if buf.len() < HEADER_BYTES {
        return Err(WkbError::TruncatedBuffer {
            expected: HEADER_BYTES,
            actual: buf.len(),
        });
    }

    let mut reader = Cursor::new(buf);

    let byte_order = reader.read_u8()?;
    match Endianness::try_from_primitive(byte_order) {
        Ok(Endianness::LittleEndian) => {}
        _ => return Err(WkbError::UnsupportedByteOrder(byte_order)),
    }

    let geometry_type = reader.read_u32::<LittleEndian>()?;
    match WKBType::try_from_primitive(geometry_type) {
        Ok(WKBType::Polygon) => {}
        _ => return Err(WkbError::UnsupportedGeometryType(geometry_type)),
    }

    let num_points = reader.read_u32::<LittleEndian>()? as usize;
    let expected = HEADER_BYTES + num_points * COORD_BYTES;
    if buf.len() < expected {
        return Err(WkbError::TruncatedBuffer {
            expected,
            actual: buf.len(),
        });
    }

    let mut coords = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        let x = reader.read_f64::<LittleEndian>()?;
        let y = reader.read_f64::<LittleEndian>()?;
        coords.push(Coord { x, y });
    }

    Ok(LineString::new(coords))
}
