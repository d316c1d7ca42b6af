use crate::grid::Grid;

// Neighbour scan order. On equal drops the first one found here wins.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub struct ThermalErosion2D {
    iterations: usize,
    smoothness: f64,
}

impl ThermalErosion2D {
    // iterations - how many relaxation passes to run
    // smoothness - stability threshold, scaled by the grid width.
    // A cell only sheds material to its steepest downhill neighbour when
    // that drop is at most smoothness / width. Steeper drops are left alone.
    pub fn new(iterations: usize, smoothness: f64) -> Self {
        Self {
            iterations,
            smoothness,
        }
    }

    // In-place erosion of the interior cells
    pub fn apply(&self, map: &mut Grid) {
        for i in 0..self.iterations {
            let moved = self.pass(map);
            tracing::trace!(iteration = i, moved, "erosion pass");
        }
    }

    // One row-major sweep. Cells are updated in place, so a cell visited
    // later sees the transfers made by earlier cells of the same sweep.
    // Returns how many cells shed material.
    fn pass(&self, map: &mut Grid) -> usize {
        let w = map.width();
        let h = map.height();
        let threshold = self.smoothness / w as f64;
        let mut moved = 0;

        for x in 1..w.saturating_sub(1) {
            for y in 1..h.saturating_sub(1) {
                let curr = map[(x, y)];
                let mut d_max = 0.0;
                let mut target = (x, y);
                for &(dx, dy) in &NEIGHBOURS {
                    let n = (x.wrapping_add_signed(dx), y.wrapping_add_signed(dy));
                    let d = curr - map[n];
                    if d > d_max {
                        d_max = d;
                        target = n;
                    }
                }

                if 0.0 < d_max && d_max <= threshold {
                    let half = 0.5 * d_max;
                    map[(x, y)] -= half;
                    map[target] += half;
                    moved += 1;
                }
            }
        }
        moved
    }
}
