pub mod geometry;
pub mod page;
pub mod unit;

pub use geometry::Point;
pub use page::{Orientation, PageFormat};
pub use unit::{Unit, UnitParseError};
