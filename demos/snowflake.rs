//! Prints Koch snowflake and Sierpinski gasket statistics for a range of depths.
//!
//! Usage:
//! ```text
//! cargo run --example snowflake            # depths 0..=6
//! cargo run --example snowflake -- 9       # depths 0..=9
//! RUST_LOG=fractus=debug cargo run --example snowflake
//! ```

use fractus::math::Point2;
use fractus::subdivision::checked_depth;
use fractus::{koch_snowflake, subdivide_sierpinski, DepthControl, Segment2, Triangle2};

const DEFAULT_DEPTH: u32 = 6;

fn main() -> fractus::Result<()> {
    // Default: WARN for everything, INFO for fractus.
    // Override with RUST_LOG env var (e.g. RUST_LOG=fractus=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("fractus=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let max_depth = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<i64>() {
            Ok(depth) => checked_depth(depth)?,
            Err(err) => {
                tracing::warn!(%arg, %err, "depth argument is not an integer, using {DEFAULT_DEPTH}");
                DEFAULT_DEPTH
            }
        },
        None => DEFAULT_DEPTH,
    };

    let (a, b, c) = (
        Point2::new(-0.6, -0.35),
        Point2::new(0.6, -0.35),
        Point2::new(0.0, 0.65),
    );

    let mut control = DepthControl::new(0, 1.4)?;
    while control.depth() <= max_depth {
        let depth = control.depth();
        let flake = koch_snowflake(a, b, c, depth)?;
        let perimeter: f64 = flake.iter().map(Segment2::length).sum();
        let gasket = subdivide_sierpinski(a, b, c, depth)?;
        let area: f64 = gasket.iter().map(Triangle2::area).sum();
        tracing::info!(
            depth,
            zoom = control.zoom(),
            segments = flake.len(),
            perimeter,
            triangles = gasket.len(),
            area,
            "fractal level"
        );
        if depth == max_depth {
            break;
        }
        control.increase();
    }
    Ok(())
}
