use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{WkbError, WkbResult};

/// The byte-order flag at the start of every WKB geometry.
///
/// Only little-endian buffers are produced or accepted by this crate; the
/// big-endian variant exists so that a foreign buffer is refused with a
/// useful error instead of being misread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Endianness {
    /// Most significant byte first (flag 0)
    BigEndian = 0,
    /// Least significant byte first (flag 1)
    LittleEndian = 1,
}

/// The standard 2D WKB geometry type codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
}

impl WKBType {
    /// Construct from a byte slice representing a WKB geometry
    pub fn from_buffer(buf: &[u8]) -> WkbResult<Self> {
        if buf.len() < 5 {
            return Err(WkbError::TruncatedBuffer {
                expected: 5,
                actual: buf.len(),
            });
        }
        let mut reader = Cursor::new(buf);
        let byte_order = reader.read_u8()?;
        let geometry_type = match Endianness::try_from_primitive(byte_order) {
            Ok(Endianness::LittleEndian) => reader.read_u32::<LittleEndian>()?,
            _ => return Err(WkbError::UnsupportedByteOrder(byte_order)),
        };
        Self::try_from_primitive(geometry_type)
            .map_err(|_| WkbError::UnsupportedGeometryType(geometry_type))
    }
}
