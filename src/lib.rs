pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PolyfollowError, Result};
pub use geometry::{Linestring, PointContainment, Polygon, Ring};
pub use math::Point2;
pub use operations::overlay::{follow, Follow, OverlayOperation, Turn};
