//! 3D gradient noise for the animated wave background.
//!
//! Hash-based, so sampling is stateless: the same (seed, x, y, z) always
//! produces the same value. Output is smooth in all three coordinates and
//! spans approximately [-1, 1].

#[inline]
fn smootherstep(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
fn splitmix32(mut x: u32) -> u32 {
    x = x.wrapping_add(0x9E3779B9);
    let mut z = x;
    z = (z ^ (z >> 16)).wrapping_mul(0x7FEB352D);
    z = (z ^ (z >> 15)).wrapping_mul(0x846CA68B);
    z ^ (z >> 16)
}

#[inline]
fn hash3(ix: i32, iy: i32, iz: i32, seed: u32) -> u32 {
    let mut h = seed ^ 0x9E3779B9;
    h = splitmix32(h ^ (ix as u32).wrapping_mul(0x85EBCA6B));
    h = splitmix32(h ^ (iy as u32).wrapping_mul(0xC2B2AE35));
    h = splitmix32(h ^ (iz as u32).wrapping_mul(0x27D4EB2F));
    h
}

/// The 12 cube-edge gradients. Evenly distributed, no axis bias.
#[inline]
fn grad(hash: u32, dx: f64, dy: f64, dz: f64) -> f64 {
    match hash % 12 {
        0 => dx + dy,
        1 => -dx + dy,
        2 => dx - dy,
        3 => -dx - dy,
        4 => dx + dz,
        5 => -dx + dz,
        6 => dx - dz,
        7 => -dx - dz,
        8 => dy + dz,
        9 => -dy + dz,
        10 => dy - dz,
        _ => -dy - dz,
    }
}

/// Seeded 3D gradient-noise sampler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Noise3 {
    seed: u32,
}

impl Noise3 {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let ix = x.floor() as i32;
        let iy = y.floor() as i32;
        let iz = z.floor() as i32;
        let fx = x - ix as f64;
        let fy = y - iy as f64;
        let fz = z - iz as f64;
        let sx = smootherstep(fx);
        let sy = smootherstep(fy);
        let sz = smootherstep(fz);

        let corner = |cx: i32, cy: i32, cz: i32| {
            grad(
                hash3(ix + cx, iy + cy, iz + cz, self.seed),
                fx - cx as f64,
                fy - cy as f64,
                fz - cz as f64,
            )
        };

        let x00 = lerp(corner(0, 0, 0), corner(1, 0, 0), sx);
        let x10 = lerp(corner(0, 1, 0), corner(1, 1, 0), sx);
        let x01 = lerp(corner(0, 0, 1), corner(1, 0, 1), sx);
        let x11 = lerp(corner(0, 1, 1), corner(1, 1, 1), sx);
        let y0 = lerp(x00, x10, sy);
        let y1 = lerp(x01, x11, sy);
        // Raw range is ~[-0.87, 0.87]; rescale toward [-1, 1].
        lerp(y0, y1, sz) * 1.154
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_lattice_points() {
        let noise = Noise3::new(42);
        for ix in -3..3 {
            for iy in -3..3 {
                assert_eq!(noise.sample(ix as f64, iy as f64, 0.0), 0.0);
            }
        }
    }

    #[test]
    fn deterministic_for_same_seed() {
        let a = Noise3::new(7);
        let b = Noise3::new(7);
        assert_eq!(a.sample(0.3, 1.7, 2.4), b.sample(0.3, 1.7, 2.4));
    }

    #[test]
    fn seeds_decorrelate() {
        let a = Noise3::new(1);
        let b = Noise3::new(2);
        let differs = (0..32).any(|i| {
            let t = i as f64 * 0.37 + 0.11;
            a.sample(t, t * 0.5, t * 0.25) != b.sample(t, t * 0.5, t * 0.25)
        });
        assert!(differs);
    }

    #[test]
    fn output_is_bounded_and_varies() {
        let noise = Noise3::new(99);
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for i in 0..500 {
            let t = i as f64 * 0.113;
            let v = noise.sample(t, 0.5, t * 0.01);
            assert!(v.abs() <= 1.05, "out of range: {v}");
            min = min.min(v);
            max = max.max(v);
        }
        assert!(max - min > 0.1, "noise is suspiciously flat");
    }

    #[test]
    fn smooth_over_small_steps() {
        let noise = Noise3::new(5);
        for i in 0..200 {
            let t = i as f64 * 0.01;
            let a = noise.sample(t, 0.5, 0.0);
            let b = noise.sample(t + 0.001, 0.5, 0.0);
            assert!((a - b).abs() < 0.05);
        }
    }
}
