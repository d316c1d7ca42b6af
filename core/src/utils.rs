use crate::grid::Grid;

// Smallest height range normalization divides by
const MIN_RANGE: f64 = 0.001;

// Rescale heights into [0, 1] for rendering or export downstream
pub fn normalize(map: &mut Grid) {
    let Some((min, max)) = map.min_max() else {
        return;
    };

    // prevent zero-division on flat maps
    let range = (max - min).max(MIN_RANGE);
    for val in map.values_mut() {
        *val = (*val - min) / range;
    }
}
