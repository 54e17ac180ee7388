//! Stratified jitter offsets for fragment-shader supersampling.
//!
//! A subdivision level `N` splits the sample footprint into an `N x N` grid and
//! draws one random point per cell. The flat output (`x0, y0, x1, y1, ...`) is
//! uploaded as-is into an `array<vec2<f32>>` storage buffer.

use rand::Rng;

/// Offset footprint in normalized screen units, before division by `N`.
pub const DEFAULT_JITTER_SCALE: f32 = 0.005;

/// Largest subdivision level the GPU-side jitter block has room for.
pub const MAX_SUBDIVISION: u32 = 8;

/// Anti-aliasing subdivision level (samples per axis). Always `>= 1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SubdivisionLevel(u32);

impl SubdivisionLevel {
    /// One sample per pixel; anti-aliasing off.
    pub const OFF: Self = Self(1);

    /// Builds a level; 0 is treated as 1 and anything above
    /// [`MAX_SUBDIVISION`] is capped to it.
    pub fn new(level: u32) -> Self {
        Self(level.clamp(1, MAX_SUBDIVISION))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Samples per pixel, `N²`.
    pub fn sample_count(self) -> u32 {
        self.0 * self.0
    }

    /// Length of the flat offset list, `2·N²`.
    pub fn offset_len(self) -> usize {
        2 * self.sample_count() as usize
    }
}

impl Default for SubdivisionLevel {
    fn default() -> Self {
        Self::OFF
    }
}

impl From<u32> for SubdivisionLevel {
    fn from(level: u32) -> Self {
        Self::new(level)
    }
}

/// Generator for per-frame jitter offsets.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JitterPattern {
    scale: f32,
}

impl JitterPattern {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    /// Generates the flat offset list for `level`.
    ///
    /// Level 1 yields exactly `[0.0, 0.0]`. Otherwise cell `(i, j)` (outer `i`,
    /// inner `j`) contributes `((i + u) * scale / N, (j + v) * scale / N)` with
    /// `u, v` uniform in `[0, 1)`, so the pair at index `i * N + j` lies inside
    /// `[i, i + 1) x [j, j + 1)` scaled by `scale / N`.
    pub fn generate<R: Rng + ?Sized>(&self, level: SubdivisionLevel, rng: &mut R) -> Vec<f32> {
        let mut out = Vec::with_capacity(level.offset_len());
        self.generate_into(level, rng, &mut out);
        out
    }

    /// Same as [`generate`](Self::generate), reusing `out`'s allocation.
    pub fn generate_into<R: Rng + ?Sized>(
        &self,
        level: SubdivisionLevel,
        rng: &mut R,
        out: &mut Vec<f32>,
    ) {
        out.clear();

        let n = level.get();
        if n == 1 {
            out.extend_from_slice(&[0.0, 0.0]);
            return;
        }

        for i in 0..n {
            for j in 0..n {
                let ([x0, x1], [y0, y1]) = self.cell_bounds(level, i, j);
                out.push(sample_in(x0, x1, rng.r#gen::<f32>()));
                out.push(sample_in(y0, y1, rng.r#gen::<f32>()));
            }
        }
    }

    /// Half-open bounds `(x_range, y_range)` that pair `(i, j)` must fall in.
    pub fn cell_bounds(&self, level: SubdivisionLevel, i: u32, j: u32) -> ([f32; 2], [f32; 2]) {
        let cell = self.scale / level.get() as f32;
        (
            [i as f32 * cell, (i + 1) as f32 * cell],
            [j as f32 * cell, (j + 1) as f32 * cell],
        )
    }
}

/// Maps `u` in `[0, 1)` into `[lo, hi)`.
///
/// `lo + u * (hi - lo)` can round up to `hi` when `u` is close to 1, so such
/// results are pulled back to the largest float below `hi`.
fn sample_in(lo: f32, hi: f32, u: f32) -> f32 {
    let v = lo + u * (hi - lo);
    if v >= hi && hi > lo {
        prev_float(hi)
    } else {
        v
    }
}

/// Largest `f32` strictly below a positive finite `x`.
fn prev_float(x: f32) -> f32 {
    f32::from_bits(x.to_bits() - 1)
}

impl Default for JitterPattern {
    fn default() -> Self {
        Self::new(DEFAULT_JITTER_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Always yields the largest value, so every `u` is `1 - 2^-24`.
    struct MaxRng;

    impl RngCore for MaxRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0xff);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    /// Always yields zero, so every `u` is exactly 0.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn assert_in_cells(pattern: &JitterPattern, level: SubdivisionLevel, offsets: &[f32]) {
        let n = level.get();
        for i in 0..n {
            for j in 0..n {
                let k = (i * n + j) as usize;
                let (x, y) = (offsets[2 * k], offsets[2 * k + 1]);
                let ([x0, x1], [y0, y1]) = pattern.cell_bounds(level, i, j);
                assert!(x >= x0 && x < x1, "x={x} not in [{x0}, {x1}) for cell ({i},{j})");
                assert!(y >= y0 && y < y1, "y={y} not in [{y0}, {y1}) for cell ({i},{j})");
            }
        }
    }

    // ── level 1 ───────────────────────────────────────────────────────────

    #[test]
    fn level_one_is_single_zero_offset() {
        let out = JitterPattern::default().generate(SubdivisionLevel::OFF, &mut rng(1));
        assert_eq!(out, vec![0.0, 0.0]);
    }

    #[test]
    fn level_zero_behaves_as_one() {
        let out = JitterPattern::default().generate(SubdivisionLevel::new(0), &mut rng(1));
        assert_eq!(out, vec![0.0, 0.0]);
    }

    // ── shape ─────────────────────────────────────────────────────────────

    #[test]
    fn length_is_two_n_squared() {
        let pattern = JitterPattern::default();
        for n in 2..=MAX_SUBDIVISION {
            let level = SubdivisionLevel::new(n);
            let out = pattern.generate(level, &mut rng(n as u64));
            assert_eq!(out.len(), 2 * (n * n) as usize);
            assert_eq!(out.len(), level.offset_len());
        }
    }

    #[test]
    fn every_pair_stays_in_its_cell() {
        let pattern = JitterPattern::default();
        for n in 2..=MAX_SUBDIVISION {
            let level = SubdivisionLevel::new(n);
            for seed in 0..16 {
                let out = pattern.generate(level, &mut rng(seed));
                assert_in_cells(&pattern, level, &out);
            }
        }
    }

    #[test]
    fn offsets_stay_below_scale() {
        let pattern = JitterPattern::default();
        let out = pattern.generate(SubdivisionLevel::new(4), &mut rng(9));
        assert!(out.iter().all(|v| (0.0..DEFAULT_JITTER_SCALE).contains(v)));
    }

    #[test]
    fn largest_draw_stays_below_upper_edge() {
        let pattern = JitterPattern::default();
        for n in 2..=MAX_SUBDIVISION {
            let level = SubdivisionLevel::new(n);
            let out = pattern.generate(level, &mut MaxRng);
            assert_in_cells(&pattern, level, &out);
        }
    }

    #[test]
    fn smallest_draw_sits_on_lower_edge() {
        let pattern = JitterPattern::default();
        let level = SubdivisionLevel::new(3);
        let out = pattern.generate(level, &mut ZeroRng);
        assert_in_cells(&pattern, level, &out);
        let ([x0, _], [y0, _]) = pattern.cell_bounds(level, 2, 1);
        assert_eq!((out[14], out[15]), (x0, y0));
    }

    #[test]
    fn custom_scale_scales_cells() {
        let pattern = JitterPattern::new(1.0);
        let level = SubdivisionLevel::new(2);
        let out = pattern.generate(level, &mut rng(3));
        assert_in_cells(&pattern, level, &out);
        // Pair (1, 1) sits in the upper half on both axes.
        assert!(out[6] >= 0.5 && out[7] >= 0.5);
    }

    // ── stochastic behaviour ──────────────────────────────────────────────

    #[test]
    fn repeated_calls_keep_shape_but_change_values() {
        let pattern = JitterPattern::default();
        let level = SubdivisionLevel::new(3);
        let mut r = rng(42);

        let a = pattern.generate(level, &mut r);
        let b = pattern.generate(level, &mut r);

        assert_eq!(a.len(), b.len());
        assert_in_cells(&pattern, level, &a);
        assert_in_cells(&pattern, level, &b);
        assert_ne!(a, b);
    }

    #[test]
    fn same_seed_reproduces_offsets() {
        let pattern = JitterPattern::default();
        let level = SubdivisionLevel::new(5);
        assert_eq!(
            pattern.generate(level, &mut rng(7)),
            pattern.generate(level, &mut rng(7)),
        );
    }

    #[test]
    fn generate_into_reuses_buffer() {
        let pattern = JitterPattern::default();
        let mut buf = vec![9.0; 100];
        pattern.generate_into(SubdivisionLevel::new(2), &mut rng(0), &mut buf);
        assert_eq!(buf.len(), 8);
        pattern.generate_into(SubdivisionLevel::OFF, &mut rng(0), &mut buf);
        assert_eq!(buf, vec![0.0, 0.0]);
    }

    // ── SubdivisionLevel ──────────────────────────────────────────────────

    #[test]
    fn sample_counts() {
        assert_eq!(SubdivisionLevel::new(1).sample_count(), 1);
        assert_eq!(SubdivisionLevel::new(3).sample_count(), 9);
        assert_eq!(SubdivisionLevel::from(0).get(), 1);
    }

    #[test]
    fn level_is_capped_at_max() {
        let level = SubdivisionLevel::new(65_536);
        assert_eq!(level.get(), MAX_SUBDIVISION);
        assert_eq!(level.sample_count(), MAX_SUBDIVISION * MAX_SUBDIVISION);
        assert_eq!(SubdivisionLevel::new(u32::MAX).offset_len(), 128);
    }
}
