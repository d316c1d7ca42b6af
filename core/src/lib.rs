// heightfield holds the gradient noise generator and the terrain passes
// (noise injection, domain warp, thermal erosion, box blur) run on a height grid
pub mod domain_warp;
pub mod erosion2;
pub mod error;
pub mod grid;
pub mod heightfield;
pub mod perlin3;
pub mod pipeline;
pub mod smooth2;
pub mod utils;

pub use domain_warp::DomainWarp2D;
pub use erosion2::ThermalErosion2D;
pub use error::{Error, Result};
pub use grid::Grid;
pub use heightfield::HeightField;
pub use perlin3::{DEFAULT_SEED, Perlin3D};
pub use pipeline::{PipelineConfig, Step};
pub use smooth2::BoxBlur2D;

// Noise source that can be sampled at any 3D point.
// Implementations must be pure: same input, same output.
pub trait NoiseGenerator {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64;
}
