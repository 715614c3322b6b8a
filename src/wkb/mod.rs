//! Reading and writing the compact WKB polygon layout.
//!
//! The layout is little-endian only and deliberately omits the canonical
//! WKB ring-count field, so buffers are 9 + 16 × N bytes:
//!
//! | offset | size   | field                      |
//! |--------|--------|----------------------------|
//! | 0      | 1      | byte-order flag, always 1  |
//! | 1      | 4      | geometry type, always 3    |
//! | 5      | 4      | point count N, u32         |
//! | 9      | 16 × N | N interleaved XY doubles   |
//!
//! Consumers expecting a standard WKB polygon (with its ring count between
//! the geometry type and the point count) will not read these buffers.

pub(crate) mod reader;
pub(crate) mod writer;

pub use reader::polygon_from_wkb;
pub use writer::{polygon_to_wkb, polygon_wkb_size, write_polygon_as_wkb, COORD_BYTES, HEADER_BYTES};
