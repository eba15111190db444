//! Perlin gradient noise.

use crate::sampling::random_vec3;
use lumen_math::{Point3, Vec3};
use rand::seq::SliceRandom;
use rand::RngCore;

const POINT_COUNT: usize = 256;

/// Gradient-lattice noise with a fixed 256-entry table.
///
/// Immutable once built; share it by reference wherever noise is sampled.
#[derive(Clone)]
pub struct Perlin {
    gradients: Box<[Vec3; POINT_COUNT]>,
    perm_x: Box<[usize; POINT_COUNT]>,
    perm_y: Box<[usize; POINT_COUNT]>,
    perm_z: Box<[usize; POINT_COUNT]>,
}

impl Perlin {
    /// Build random gradients and three independent permutations.
    pub fn new(rng: &mut dyn RngCore) -> Self {
        let mut gradients = Box::new([Vec3::ZERO; POINT_COUNT]);
        for g in gradients.iter_mut() {
            *g = loop {
                let v = random_vec3(rng, -1.0, 1.0);
                if v.length_squared() > 1e-8 {
                    break v.normalize();
                }
            };
        }

        Self {
            gradients,
            perm_x: Self::generate_perm(rng),
            perm_y: Self::generate_perm(rng),
            perm_z: Self::generate_perm(rng),
        }
    }

    /// Smooth noise in roughly [-1, 1].
    pub fn noise(&self, p: Point3) -> f32 {
        let u = p.x - p.x.floor();
        let v = p.y - p.y.floor();
        let w = p.z - p.z.floor();

        let i = p.x.floor() as i32;
        let j = p.y.floor() as i32;
        let k = p.z.floor() as i32;

        let mut corners = [[[Vec3::ZERO; 2]; 2]; 2];
        for (di, plane) in corners.iter_mut().enumerate() {
            for (dj, row) in plane.iter_mut().enumerate() {
                for (dk, corner) in row.iter_mut().enumerate() {
                    let hash = self.perm_x[((i + di as i32) & 255) as usize]
                        ^ self.perm_y[((j + dj as i32) & 255) as usize]
                        ^ self.perm_z[((k + dk as i32) & 255) as usize];
                    *corner = self.gradients[hash];
                }
            }
        }

        trilinear_interp(&corners, u, v, w)
    }

    /// Sum of `depth` octaves, each at double frequency and half amplitude.
    pub fn turbulence(&self, p: Point3, depth: u32) -> f32 {
        let mut accum = 0.0;
        let mut temp_p = p;
        let mut weight = 1.0;

        for _ in 0..depth {
            accum += weight * self.noise(temp_p);
            weight *= 0.5;
            temp_p *= 2.0;
        }

        accum.abs()
    }

    fn generate_perm(rng: &mut dyn RngCore) -> Box<[usize; POINT_COUNT]> {
        let mut perm = Box::new([0usize; POINT_COUNT]);
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = i;
        }
        perm[..].shuffle(rng);
        perm
    }
}

/// Hermite-smoothed trilinear blend of corner gradient contributions.
fn trilinear_interp(corners: &[[[Vec3; 2]; 2]; 2], u: f32, v: f32, w: f32) -> f32 {
    let uu = u * u * (3.0 - 2.0 * u);
    let vv = v * v * (3.0 - 2.0 * v);
    let ww = w * w * (3.0 - 2.0 * w);

    let mut accum = 0.0;
    for (i, plane) in corners.iter().enumerate() {
        let fi = i as f32;
        for (j, row) in plane.iter().enumerate() {
            let fj = j as f32;
            for (k, gradient) in row.iter().enumerate() {
                let fk = k as f32;
                let weight = Vec3::new(u - fi, v - fj, w - fk);
                accum += (fi * uu + (1.0 - fi) * (1.0 - uu))
                    * (fj * vv + (1.0 - fj) * (1.0 - vv))
                    * (fk * ww + (1.0 - fk) * (1.0 - ww))
                    * gradient.dot(weight);
            }
        }
    }
    accum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::{gen_range_f32, seeded_rng};

    fn perlin() -> Perlin {
        Perlin::new(&mut seeded_rng(1234))
    }

    #[test]
    fn test_gradients_are_unit_and_perms_are_permutations() {
        let perlin = perlin();
        for g in perlin.gradients.iter() {
            assert!((g.length() - 1.0).abs() < 1e-5);
        }
        for perm in [&perlin.perm_x, &perlin.perm_y, &perlin.perm_z] {
            let mut sorted = perm.to_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..POINT_COUNT).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_noise_vanishes_on_lattice_points() {
        let perlin = perlin();
        for p in [Vec3::ZERO, Vec3::new(3.0, -7.0, 12.0), Vec3::new(-1.0, 255.0, 256.0)] {
            assert!(perlin.noise(p).abs() < 1e-6);
        }
    }

    #[test]
    fn test_noise_is_bounded() {
        let perlin = perlin();
        let mut rng = seeded_rng(5);
        for _ in 0..5000 {
            let p = Vec3::new(
                gen_range_f32(&mut rng, -50.0, 50.0),
                gen_range_f32(&mut rng, -50.0, 50.0),
                gen_range_f32(&mut rng, -50.0, 50.0),
            );
            assert!(perlin.noise(p).abs() <= 1.0 + 1e-4);
        }
    }

    #[test]
    fn test_noise_is_continuous_across_cell_boundaries() {
        let perlin = perlin();
        let eps = 1e-3;
        for axis in 0..3 {
            for cell in -3..3 {
                let mut below = Vec3::new(0.37, 0.61, 0.23);
                below[axis] = cell as f32 - eps;
                let mut above = below;
                above[axis] = cell as f32 + eps;

                let delta = (perlin.noise(above) - perlin.noise(below)).abs();
                // Gradient magnitude is bounded by a small constant
                assert!(delta < 8.0 * 2.0 * eps, "jump of {delta} at axis {axis}");
            }
        }
    }

    #[test]
    fn test_turbulence_bound() {
        let perlin = perlin();
        let mut rng = seeded_rng(6);
        for octaves in 1..=7u32 {
            let bound = 2.0 - 2.0f32.powi(1 - octaves as i32);
            for _ in 0..500 {
                let p = Vec3::new(
                    gen_range_f32(&mut rng, -20.0, 20.0),
                    gen_range_f32(&mut rng, -20.0, 20.0),
                    gen_range_f32(&mut rng, -20.0, 20.0),
                );
                let t = perlin.turbulence(p, octaves);
                assert!(t >= 0.0);
                assert!(t <= bound + 1e-3);
            }
        }
    }

    #[test]
    fn test_same_seed_same_noise() {
        let a = perlin();
        let b = perlin();
        let p = Vec3::new(1.3, -2.7, 0.45);
        assert_eq!(a.noise(p), b.noise(p));
    }
}
