pub mod linestring;
pub mod polygon;

pub use linestring::Linestring;
pub use polygon::{PointContainment, Polygon, Ring};
