// Runs the default terrain pipeline and logs a summary of the result.
// RUST_LOG=heightfield=debug shows every step, =trace every erosion pass.

use std::time::Instant;

use heightfield::PipelineConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> heightfield::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = PipelineConfig::default();
    let start = Instant::now();
    let field = cfg.build()?;

    let heights = field.heights();
    let (min, max) = heights.min_max().unwrap_or((0.0, 0.0));
    info!(
        width = field.width(),
        height = field.height(),
        seed = cfg.seed,
        steps = cfg.steps.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        min,
        max,
        mean = heights.sum() / heights.len().max(1) as f64,
        "terrain generated"
    );
    Ok(())
}
