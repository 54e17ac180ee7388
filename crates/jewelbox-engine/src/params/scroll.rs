/// Scroll-wheel driven scalar clamped to `[min, max]`.
///
/// Every wheel event moves the value by one fixed `step` regardless of the
/// event's magnitude; only the sign matters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScrollZoom {
    value: f32,
    min: f32,
    max: f32,
    step: f32,
}

impl ScrollZoom {
    /// Wheel step used by all demos.
    pub const DEFAULT_STEP: f32 = 0.05;

    /// Creates a zoom scalar; `initial` is clamped into range.
    ///
    /// Swapped bounds are reordered.
    pub fn new(initial: f32, min: f32, max: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: initial.clamp(min, max),
            min,
            max,
            step: Self::DEFAULT_STEP,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Applies one wheel event.
    ///
    /// `delta_y` uses DOM `deltaY` orientation: negative (wheel rolled away from the
    /// user) decreases the value by `step`, anything else increases it.
    pub fn apply_wheel(&mut self, delta_y: f32) -> f32 {
        let delta = if delta_y < 0.0 { -self.step } else { self.step };
        self.value = (self.value + delta).clamp(self.min, self.max);
        self.value
    }

    /// Sets the value directly, clamped to range.
    pub fn set(&mut self, value: f32) {
        if value.is_finite() {
            self.value = value.clamp(self.min, self.max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn negative_delta_steps_down() {
        let mut z = ScrollZoom::new(10.0, 5.0, 100.0);
        z.apply_wheel(-3.0);
        assert!((z.value() - 9.95).abs() < 1e-5);
    }

    #[test]
    fn positive_and_zero_delta_step_up() {
        let mut z = ScrollZoom::new(10.0, 5.0, 100.0);
        z.apply_wheel(120.0);
        z.apply_wheel(0.0);
        assert!((z.value() - 10.1).abs() < 1e-5);
    }

    #[test]
    fn magnitude_is_ignored() {
        let mut a = ScrollZoom::new(10.0, 1.0, 50.0);
        let mut b = ScrollZoom::new(10.0, 1.0, 50.0);
        a.apply_wheel(-0.001);
        b.apply_wheel(-1.0e6);
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn clamps_at_both_bounds() {
        let mut z = ScrollZoom::new(3.02, 3.0, 100.0);
        for _ in 0..10 {
            z.apply_wheel(-1.0);
        }
        assert_eq!(z.value(), 3.0);

        let mut z = ScrollZoom::new(99.98, 3.0, 100.0);
        for _ in 0..10 {
            z.apply_wheel(1.0);
        }
        assert_eq!(z.value(), 100.0);
    }

    #[test]
    fn initial_value_is_clamped() {
        assert_eq!(ScrollZoom::new(0.0, 1.0, 50.0).value(), 1.0);
        assert_eq!(ScrollZoom::new(80.0, 1.0, 50.0).value(), 50.0);
    }

    #[test]
    fn swapped_bounds_are_reordered() {
        assert_eq!(ScrollZoom::new(10.0, 50.0, 1.0).bounds(), (1.0, 50.0));
    }

    #[test]
    fn random_delta_sequences_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(0xC011);
        for (min, max) in [(1.0, 50.0), (3.0, 100.0), (5.0, 100.0)] {
            // Start on each edge so the clamps are exercised.
            for start in [min, max] {
                let mut z = ScrollZoom::new(start, min, max);
                for _ in 0..5_000 {
                    let delta = rng.gen_range(-500.0..500.0);
                    let v = z.apply_wheel(delta);
                    assert!(v >= min && v <= max, "{v} escaped [{min}, {max}]");
                }
            }
        }
    }

    #[test]
    fn set_ignores_non_finite() {
        let mut z = ScrollZoom::new(10.0, 5.0, 100.0);
        z.set(f32::NAN);
        assert_eq!(z.value(), 10.0);
        z.set(1000.0);
        assert_eq!(z.value(), 100.0);
    }
}
