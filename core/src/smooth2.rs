use crate::grid::Grid;

// 3×3 box blur over the interior cells, border left as is
pub struct BoxBlur2D {
    passes: usize,
}

impl BoxBlur2D {
    pub fn new(passes: usize) -> Self {
        Self { passes }
    }

    pub fn apply(&self, map: &mut Grid) {
        for _ in 0..self.passes {
            Self::pass(map);
        }
    }

    // Every output is averaged from the pre-pass snapshot, never from
    // cells already blurred in this pass.
    fn pass(map: &mut Grid) {
        let src = map.clone();
        let w = map.width();
        let h = map.height();

        for x in 1..w.saturating_sub(1) {
            for y in 1..h.saturating_sub(1) {
                let mut total = 0.0;
                for dx in -1..=1 {
                    for dy in -1..=1 {
                        total += src[(x.wrapping_add_signed(dx), y.wrapping_add_signed(dy))];
                    }
                }
                map[(x, y)] = total / 9.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoxBlur2D;
    use crate::grid::Grid;

    #[test]
    fn blur_spreads_spike_evenly() {
        let mut map = Grid::new(5, 5);
        map[(2, 2)] = 9.0;
        BoxBlur2D::new(1).apply(&mut map);
        for x in 1..4 {
            for y in 1..4 {
                assert!((map[(x, y)] - 1.0).abs() < 1e-12);
            }
        }
        // border untouched
        assert_eq!(map[(0, 2)], 0.0);
        assert_eq!(map[(4, 4)], 0.0);
    }

    #[test]
    fn blur_preserves_linear_ramp() {
        let data: Vec<f64> = (0..16).map(|i| (i / 4) as f64).collect();
        let mut map = Grid::from_vec(4, 4, data).unwrap();
        let before = map.clone();
        BoxBlur2D::new(1).apply(&mut map);
        assert_eq!(map, before);
    }

    #[test]
    fn blur_keeps_border() {
        let data: Vec<f64> = (0..42).map(|i| (i * i % 13) as f64).collect();
        let mut map = Grid::from_vec(6, 7, data).unwrap();
        let before = map.clone();
        BoxBlur2D::new(2).apply(&mut map);
        for ((x, y), v) in before.iter() {
            if x == 0 || y == 0 || x == 5 || y == 6 {
                assert_eq!(map[(x, y)], v);
            }
        }
    }

    #[test]
    fn blur_empty_map() {
        let mut map = Grid::new(0, 3);
        BoxBlur2D::new(1).apply(&mut map);
        assert!(map.is_empty());
    }
}
