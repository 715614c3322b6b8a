//! Conversion between WKT text and a compact WKB binary layout for simple
//! 2D polygons.
//!
//! Two independent pieces:
//!
//! - [`wkt`] parses a `POLYGON ((x y, ...))` string into its exterior ring
//!   (a [`geo_types::LineString`]) and formats a ring back to WKT.
//! - [`wkb`] encodes a ring into a fixed little-endian byte layout and
//!   decodes such a buffer back into a ring. See the [`wkb`] module docs
//!   for the exact layout; it is a reduced, non-interoperable variant of
//!   standard WKB.
//!
//! Only single-ring 2D polygons are supported: no other geometry types, no
//! interior rings, no big-endian buffers, no SRIDs and no geometry
//! validation (rings are not checked for closure or winding).
//!
//! ```
//! use polygon_wkb::wkb::{polygon_from_wkb, polygon_to_wkb};
//! use polygon_wkb::wkt::parse_polygon_wkt;
//!
//! # fn main() -> polygon_wkb::WkbResult<()> {
//! let ring = parse_polygon_wkt("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))")?;
//! let wkb = polygon_to_wkb(&ring)?;
//! assert_eq!(wkb.len(), 9 + 16 * 5);
//! assert_eq!(polygon_from_wkb(&wkb)?, ring);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod common;
pub mod error;
pub mod wkb;
pub mod wkt;

pub use error::{WkbError, WkbResult};
