//! Reading and writing WKT polygon text.

mod parser;
mod writer;

pub use parser::parse_polygon_wkt;
pub use writer::write_polygon_wkt;
