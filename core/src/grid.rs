use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

// Flat width×height array of heights.
// Cell (x, y) lives at x * height + y, so a sweep with x outer and y inner
// walks the buffer front to back.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Grid {
    // Zero-filled grid. Panics if width * height overflows usize,
    // use `try_new` to get an error instead.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width.checked_mul(height).is_some(),
            "grid of {width}x{height} cells overflows usize"
        );
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(Error::DimensionsOverflow { width, height })?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    // Wrap an existing buffer laid out as x * height + y
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or(Error::DimensionsOverflow { width, height })?;
        if data.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    // Same dimensions, all zeros. Used as the write buffer of snapshot passes.
    pub fn zeros_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: vec![0.0; self.data.len()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        self.offset(x, y).map(|i| self.data[i])
    }

    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    // All cells with their coordinates, x outer and y inner
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        let height = self.height;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &v)| ((i / height, i % height), v))
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    // None for an empty grid
    pub fn min_max(&self) -> Option<(f64, f64)> {
        if self.data.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.data {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, (x, y): (usize, usize)) -> &f64 {
        match self.offset(x, y) {
            Some(i) => &self.data[i],
            None => panic!(
                "cell ({x}, {y}) is outside the {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut f64 {
        match self.offset(x, y) {
            Some(i) => &mut self.data[i],
            None => panic!(
                "cell ({x}, {y}) is outside the {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::error::Error;

    #[test]
    fn grid_layout_is_x_major() {
        let g = Grid::from_vec(2, 3, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(g[(0, 2)], 2.0);
        assert_eq!(g[(1, 0)], 3.0);
        assert_eq!(g.get(1, 2), Some(5.0));
    }

    #[test]
    fn grid_bounds() {
        let g = Grid::new(4, 2);
        assert_eq!(g.get(4, 0), None);
        assert_eq!(g.get(0, 2), None);
        assert_eq!(g.get(3, 1), Some(0.0));
    }

    #[test]
    #[should_panic]
    fn grid_index_out_of_bounds_panics() {
        let g = Grid::new(3, 3);
        let _ = g[(3, 0)];
    }

    #[test]
    fn grid_zero_area() {
        let g = Grid::new(0, 10);
        assert!(g.is_empty());
        assert_eq!(g.min_max(), None);
        assert_eq!(g.iter().count(), 0);
    }

    #[test]
    fn grid_overflow_is_rejected() {
        assert!(matches!(
            Grid::try_new(usize::MAX, 2),
            Err(Error::DimensionsOverflow { .. })
        ));
    }

    #[test]
    fn grid_from_vec_length_mismatch() {
        let err = Grid::from_vec(3, 3, vec![0.0; 8]).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 9,
                actual: 8
            }
        ));
    }

    #[test]
    fn grid_iter_coordinates() {
        let mut g = Grid::new(2, 2);
        g[(1, 0)] = 7.0;
        let hit: Vec<_> = g.iter().filter(|&(_, v)| v > 0.0).collect();
        assert_eq!(hit, vec![((1, 0), 7.0)]);
        assert_eq!(g.sum(), 7.0);
        assert_eq!(g.min_max(), Some((0.0, 7.0)));
    }
}
