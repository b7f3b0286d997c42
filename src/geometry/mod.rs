mod segment;
mod triangle;

pub use segment::{Segment2, Side};
pub use triangle::Triangle2;
