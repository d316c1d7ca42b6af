use std::f64::consts::PI;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::NoiseGenerator;

const GRADIENT_TABLE_SIZE: usize = 256;
const MASK: i64 = GRADIENT_TABLE_SIZE as i64 - 1;

pub const DEFAULT_SEED: u64 = 0;

// Lattice permutation. Fixed for every generator, only the gradients follow the seed.
#[rustfmt::skip]
const PERM: [usize; GRADIENT_TABLE_SIZE] = [
    225, 155, 210, 108, 175, 199, 221, 144, 203, 116, 70, 213, 69, 158, 33, 252,
    5, 82, 173, 133, 222, 139, 174, 27, 9, 71, 90, 246, 75, 130, 91, 191,
    169, 138, 2, 151, 194, 235, 81, 7, 25, 113, 228, 159, 205, 253, 134, 142,
    248, 65, 224, 217, 22, 121, 229, 63, 89, 103, 96, 104, 156, 17, 201, 129,
    36, 8, 165, 110, 237, 117, 231, 56, 132, 211, 152, 20, 181, 111, 239, 218,
    170, 163, 51, 172, 157, 47, 80, 212, 176, 250, 87, 49, 99, 242, 136, 189,
    162, 115, 44, 43, 124, 94, 150, 16, 141, 247, 32, 10, 198, 223, 255, 72,
    53, 131, 84, 57, 220, 197, 58, 50, 208, 11, 241, 28, 3, 192, 62, 202,
    18, 215, 153, 24, 76, 41, 15, 179, 39, 46, 55, 6, 128, 167, 23, 188,
    106, 34, 187, 140, 164, 73, 112, 182, 244, 195, 227, 13, 35, 77, 196, 185,
    26, 200, 226, 119, 31, 123, 168, 125, 249, 68, 183, 230, 177, 135, 160, 180,
    12, 1, 243, 148, 102, 166, 38, 238, 251, 37, 240, 126, 64, 74, 161, 40,
    184, 149, 171, 178, 101, 66, 29, 59, 146, 61, 254, 107, 42, 86, 154, 4,
    236, 232, 120, 21, 233, 209, 45, 98, 193, 114, 78, 19, 206, 14, 118, 127,
    48, 79, 147, 85, 30, 207, 219, 54, 88, 234, 190, 122, 95, 67, 143, 109,
    137, 214, 145, 93, 92, 100, 245, 0, 216, 186, 60, 83, 105, 97, 204, 52
];

// Single-octave 3D gradient noise.
// Each lattice point gets one of 256 seeded unit gradients via the permutation hash.
#[derive(Debug, Clone)]
pub struct Perlin3D {
    seed: u64,
    gradients: [[f64; 3]; GRADIENT_TABLE_SIZE],
}

impl Perlin3D {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut gradients = [[0.0; 3]; GRADIENT_TABLE_SIZE];
        // Uniform point on the unit sphere: height z, then an angle around the z axis
        for g in gradients.iter_mut() {
            let z = 1.0 - 2.0 * rng.gen_range(0.0_f64..1.0);
            let r = (1.0 - z * z).sqrt();
            let theta = 2.0 * PI * rng.gen_range(0.0_f64..1.0);
            *g = [r * theta.cos(), r * theta.sin(), z];
        }
        tracing::debug!(seed, "seeded gradient table");

        Self { seed, gradients }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    // Hermite ease curve, zero slope at 0 and 1
    #[inline]
    fn smooth(t: f64) -> f64 {
        t * t * (3.0 - 2.0 * t)
    }

    #[inline]
    fn lerp(t: f64, a: f64, b: f64) -> f64 {
        a + t * (b - a)
    }

    // Integer lattice coordinate and the offset from it
    #[inline]
    fn split(v: f64) -> (i64, f64) {
        let floor = v.floor();
        (floor as i64, v - floor)
    }

    #[inline]
    fn permutate(i: i64) -> i64 {
        PERM[(i & MASK) as usize] as i64
    }

    #[inline]
    fn index(ix: i64, iy: i64, iz: i64) -> usize {
        Self::permutate(ix.wrapping_add(Self::permutate(iy.wrapping_add(Self::permutate(iz)))))
            as usize
    }

    // Dot product of the corner's gradient with the offset to that corner
    #[inline]
    fn lattice(&self, ix: i64, iy: i64, iz: i64, fx: f64, fy: f64, fz: f64) -> f64 {
        let g = &self.gradients[Self::index(ix, iy, iz)];
        g[0] * fx + g[1] * fy + g[2] * fz
    }

    // Raw noise at (x, y, z), roughly in [-1, 1].
    // Interpolates x first, then y, then z.
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        let (ix, fx0) = Self::split(x);
        let (iy, fy0) = Self::split(y);
        let (iz, fz0) = Self::split(z);
        let (jx, jy, jz) = (ix.wrapping_add(1), iy.wrapping_add(1), iz.wrapping_add(1));
        let (fx1, fy1, fz1) = (fx0 - 1.0, fy0 - 1.0, fz0 - 1.0);
        let (wx, wy, wz) = (Self::smooth(fx0), Self::smooth(fy0), Self::smooth(fz0));

        // near z face
        let vy0 = Self::lerp(
            wx,
            self.lattice(ix, iy, iz, fx0, fy0, fz0),
            self.lattice(jx, iy, iz, fx1, fy0, fz0),
        );
        let vy1 = Self::lerp(
            wx,
            self.lattice(ix, jy, iz, fx0, fy1, fz0),
            self.lattice(jx, jy, iz, fx1, fy1, fz0),
        );
        let vz0 = Self::lerp(wy, vy0, vy1);

        // far z face
        let vy0 = Self::lerp(
            wx,
            self.lattice(ix, iy, jz, fx0, fy0, fz1),
            self.lattice(jx, iy, jz, fx1, fy0, fz1),
        );
        let vy1 = Self::lerp(
            wx,
            self.lattice(ix, jy, jz, fx0, fy1, fz1),
            self.lattice(jx, jy, jz, fx1, fy1, fz1),
        );
        let vz1 = Self::lerp(wy, vy0, vy1);

        Self::lerp(wz, vz0, vz1)
    }
}

impl Default for Perlin3D {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl NoiseGenerator for Perlin3D {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise(x, y, z)
    }
}
