use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    erosion2::ThermalErosion2D, error::Result, heightfield::HeightField, smooth2::BoxBlur2D,
};

fn one() -> usize {
    1
}

// A single height field operation, as it appears in a pipeline config:
// {"op": "erode", "smoothness": 16.0, "iterations": 4}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Reset,
    Seed {
        value: u64,
    },
    AddPerlinNoise {
        frequency: f64,
        scale: f64,
    },
    Perturb {
        frequency: f64,
        displacement: f64,
    },
    Erode {
        smoothness: f64,
        #[serde(default = "one")]
        iterations: usize,
    },
    Smoothen {
        #[serde(default = "one")]
        passes: usize,
    },
    Normalize,
}

// Field size, seed and the ordered steps that shape it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub steps: Vec<Step>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            seed: 0,
            steps: vec![
                Step::AddPerlinNoise {
                    frequency: 4.0,
                    scale: 1.0,
                },
                Step::AddPerlinNoise {
                    frequency: 16.0,
                    scale: 0.2,
                },
                Step::Perturb {
                    frequency: 32.0,
                    displacement: 16.0,
                },
                Step::Erode {
                    smoothness: 16.0,
                    iterations: 10,
                },
                Step::Smoothen { passes: 1 },
            ],
        }
    }
}

impl PipelineConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    // Build the field and run every step in order
    pub fn build(&self) -> Result<HeightField> {
        let mut field = HeightField::try_new(self.width, self.height)?;
        field.seed(self.seed);
        for step in &self.steps {
            field.apply(step);
        }
        Ok(field)
    }
}

impl HeightField {
    pub fn apply(&mut self, step: &Step) {
        debug!(?step, "applying step");
        match *step {
            Step::Reset => self.reset(),
            Step::Seed { value } => self.seed(value),
            Step::AddPerlinNoise { frequency, scale } => self.add_perlin_noise(frequency, scale),
            Step::Perturb {
                frequency,
                displacement,
            } => self.perturb(frequency, displacement),
            Step::Erode {
                smoothness,
                iterations,
            } => ThermalErosion2D::new(iterations, smoothness).apply(self.heights_mut()),
            Step::Smoothen { passes } => BoxBlur2D::new(passes).apply(self.heights_mut()),
            Step::Normalize => self.normalize(),
        }
    }
}
