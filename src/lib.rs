pub mod error;
pub mod geometry;
pub mod lorenz;
pub mod math;
pub mod subdivision;

pub use error::{FractusError, Result};
pub use geometry::{Segment2, Side, Triangle2};
pub use lorenz::{LorenzPair, LorenzParams, LorenzSystem};
pub use subdivision::{
    koch_snowflake, subdivide_koch, subdivide_koch_toward, subdivide_sierpinski, DepthControl,
};
