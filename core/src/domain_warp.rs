use crate::{NoiseGenerator, grid::Grid};

// Domain warp: every cell copies the height found at a noise-displaced
// position of the source map.
pub struct DomainWarp2D<'a> {
    pub noise: &'a dyn NoiseGenerator,
    pub frequency: f64,
    // Maximum offset in cells, scaled by the noise sample
    pub displacement: f64,
}

impl DomainWarp2D<'_> {
    // Writes into a fresh grid so that every cell reads pre-warp heights
    pub fn apply(&self, map: &Grid) -> Grid {
        let w = map.width();
        let h = map.height();
        let mut out = map.zeros_like();

        for x in 0..w {
            for y in 0..h {
                let fx = self.frequency * x as f64 / w as f64;
                let fy = self.frequency * y as f64 / h as f64;

                // Offsets truncate toward zero, two z planes give independent axes
                let du = (self.noise.get3(fx, fy, 0.0) * self.displacement) as i64;
                let dv = (self.noise.get3(fx, fy, 1.0) * self.displacement) as i64;

                let u = (x as i64).saturating_add(du).clamp(0, w as i64 - 1) as usize;
                let v = (y as i64).saturating_add(dv).clamp(0, h as i64 - 1) as usize;

                out[(x, y)] = map[(u, v)];
            }
        }
        out
    }
}
