//! Runs two Lorenz systems seeded at `x = ±0.01` and reports how far apart they drift.
//!
//! Usage:
//! ```text
//! cargo run --example lorenz               # 5000 steps
//! cargo run --example lorenz -- 20000
//! ```

use fractus::lorenz::position_color;
use fractus::LorenzPair;

const REPORT_EVERY: usize = 500;

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("lorenz=info".parse().unwrap_or_default())
        .add_directive("fractus=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let steps = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(5_000);

    let mut pair = LorenzPair::default();
    for i in 1..=steps {
        let (p, q) = pair.step();
        if i % REPORT_EVERY == 0 {
            tracing::info!(
                step = i,
                separation = pair.separation(),
                first = ?p,
                second = ?q,
                color = ?position_color(&p),
                "lorenz pair"
            );
        }
    }
    pair.reset();
    tracing::info!(
        first = pair.first().trajectory().len(),
        second = pair.second().trajectory().len(),
        "reset"
    );
}
