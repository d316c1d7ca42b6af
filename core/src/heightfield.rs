use std::fmt;

use tracing::debug;

use crate::{
    domain_warp::DomainWarp2D,
    erosion2::ThermalErosion2D,
    error::{Error, Result},
    grid::Grid,
    perlin3::Perlin3D,
    smooth2::BoxBlur2D,
    utils,
};

// Terrain height field: a width×height grid of heights plus the noise
// generator that feeds it. Each operation transforms the heights in place,
// and the order the caller applies them in matters.
#[derive(Debug, Clone)]
pub struct HeightField {
    heights: Grid,
    perlin: Perlin3D,
}

impl HeightField {
    // Zero field with a default-seeded generator
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_grid(Grid::new(width, height))
    }

    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        Ok(Self::from_grid(Grid::try_new(width, height)?))
    }

    // For callers holding signed sizes; negative dimensions are rejected up front
    pub fn try_from_signed(width: i64, height: i64) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(Error::NegativeDimension { width, height });
        }
        let w = usize::try_from(width).unwrap_or(usize::MAX);
        let h = usize::try_from(height).unwrap_or(usize::MAX);
        Self::try_new(w, h)
    }

    pub fn square(dimension: usize) -> Self {
        Self::new(dimension, dimension)
    }

    // Start from existing heights
    pub fn from_grid(heights: Grid) -> Self {
        debug!(
            width = heights.width(),
            height = heights.height(),
            "new height field"
        );
        Self {
            heights,
            perlin: Perlin3D::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.heights.width()
    }

    pub fn height(&self) -> usize {
        self.heights.height()
    }

    pub fn heights(&self) -> &Grid {
        &self.heights
    }

    pub(crate) fn heights_mut(&mut self) -> &mut Grid {
        &mut self.heights
    }

    pub fn generator(&self) -> &Perlin3D {
        &self.perlin
    }

    // Zero every cell, generator untouched
    pub fn reset(&mut self) {
        self.heights.fill(0.0);
    }

    // Swap in a freshly seeded generator, heights untouched
    pub fn seed(&mut self, value: u64) {
        self.perlin = Perlin3D::new(value);
    }

    // frequency - wavelength of the features (higher = more detail)
    // scale - amplitude added on top of the current heights
    pub fn add_perlin_noise(&mut self, frequency: f64, scale: f64) {
        let w = self.width();
        let h = self.height();
        for x in 0..w {
            for y in 0..h {
                let fx = frequency * x as f64 / w as f64;
                let fy = frequency * y as f64 / h as f64;
                self.heights[(x, y)] += scale * self.perlin.noise(fx, fy, 0.0);
            }
        }
    }

    pub fn perturb(&mut self, frequency: f64, displacement: f64) {
        let warped = DomainWarp2D {
            noise: &self.perlin,
            frequency,
            displacement,
        }
        .apply(&self.heights);
        self.heights = warped;
    }

    // One erosion relaxation step
    pub fn erode(&mut self, smoothness: f64) {
        ThermalErosion2D::new(1, smoothness).apply(&mut self.heights);
    }

    // One 3×3 box blur pass over the interior
    pub fn smoothen(&mut self) {
        BoxBlur2D::new(1).apply(&mut self.heights);
    }

    pub fn normalize(&mut self) {
        utils::normalize(&mut self.heights);
    }
}

// Debug dump: every cell back to back with no separator
impl fmt::Display for HeightField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.heights.as_slice() {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::HeightField;
    use crate::{error::Error, grid::Grid};

    #[test]
    fn field_starts_at_zero() {
        let f = HeightField::new(7, 3);
        assert_eq!(f.width(), 7);
        assert_eq!(f.height(), 3);
        assert!(f.heights().as_slice().iter().all(|&v| v == 0.0));
        assert_eq!(f.generator().seed(), 0);
    }

    #[test]
    fn square_field() {
        let f = HeightField::square(12);
        assert_eq!((f.width(), f.height()), (12, 12));
    }

    #[test]
    fn negative_dimensions_rejected() {
        assert!(matches!(
            HeightField::try_from_signed(-1, 4),
            Err(Error::NegativeDimension {
                width: -1,
                height: 4
            })
        ));
        assert!(HeightField::try_from_signed(3, 0).is_ok());
    }

    #[test]
    fn reset_keeps_generator() {
        let mut f = HeightField::new(8, 8);
        f.seed(42);
        f.add_perlin_noise(3.0, 1.0);
        f.reset();
        assert!(f.heights().as_slice().iter().all(|&v| v == 0.0));
        assert_eq!(f.generator().seed(), 42);
    }

    #[test]
    fn seed_keeps_heights_and_changes_noise() {
        let mut a = HeightField::new(16, 16);
        a.add_perlin_noise(4.0, 1.0);
        let before = a.heights().clone();
        a.seed(9);
        assert_eq!(a.heights(), &before);

        a.reset();
        a.add_perlin_noise(4.0, 1.0);
        assert_ne!(a.heights(), &before);
    }

    #[test]
    fn noise_is_additive() {
        let mut once = HeightField::new(10, 6);
        once.add_perlin_noise(2.0, 2.0);
        let mut twice = HeightField::new(10, 6);
        twice.add_perlin_noise(2.0, 1.0);
        twice.add_perlin_noise(2.0, 1.0);
        for (a, b) in once.heights().as_slice().iter().zip(twice.heights().as_slice()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn noise_samples_scaled_cell_coordinates() {
        // Non-square, so swapping width and height would show up
        let mut f = HeightField::new(7, 4);
        f.seed(13);
        f.add_perlin_noise(3.0, 2.0);
        for x in 0..7 {
            for y in 0..4 {
                let expected =
                    2.0 * f.generator().noise(3.0 * x as f64 / 7.0, 3.0 * y as f64 / 4.0, 0.0);
                assert_eq!(f.heights()[(x, y)], expected, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn noise_origin_cell_stays_zero() {
        // (0, 0) samples the lattice point at the origin
        let mut f = HeightField::new(5, 5);
        f.add_perlin_noise(3.0, 10.0);
        assert_eq!(f.heights()[(0, 0)], 0.0);
    }

    #[test]
    fn display_concatenates_cells() {
        let grid = Grid::from_vec(3, 1, vec![0.5, 0.0, -2.25]).unwrap();
        let f = HeightField::from_grid(grid);
        assert_eq!(f.to_string(), "0.50-2.25");
    }
}
