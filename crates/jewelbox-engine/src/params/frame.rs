use crate::sampling::{MAX_SUBDIVISION, SubdivisionLevel};

use super::{ScrollZoom, Slider};

/// Parameters read by a renderer every frame.
///
/// Owned by the app and passed to the render step; input handlers mutate it
/// between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameParams {
    /// Scroll-derived zoom scalar (camera distance).
    pub zoom: ScrollZoom,

    /// Accumulated rotation angle in radians.
    pub theta: f32,

    /// Angular increment added to `theta` each frame.
    pub speed: Slider,

    /// Coin thickness.
    pub thickness: Slider,

    /// Light intensity.
    pub intensity: Slider,

    /// Anti-aliasing samples per axis.
    pub subdivision: Slider,
}

impl FrameParams {
    pub fn new(
        zoom: ScrollZoom,
        speed: Slider,
        thickness: Slider,
        intensity: Slider,
        subdivision: Slider,
    ) -> Self {
        Self {
            zoom,
            theta: 0.0,
            speed,
            thickness,
            intensity,
            subdivision,
        }
    }

    /// Integer slider covering every level the jitter block can hold.
    pub fn subdivision_slider(initial: u32) -> Slider {
        Slider::new(initial as f32, 1.0, MAX_SUBDIVISION as f32, 1.0)
    }

    /// Advances the rotation by one frame's increment.
    pub fn advance(&mut self) -> f32 {
        self.theta += self.speed.value();
        // Keep precision from draining away on long runs.
        if self.theta.abs() > std::f32::consts::TAU * 1024.0 {
            self.theta = self.theta.rem_euclid(std::f32::consts::TAU);
        }
        self.theta
    }

    pub fn subdivision_level(&self) -> SubdivisionLevel {
        SubdivisionLevel::new(self.subdivision.value().round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> FrameParams {
        FrameParams::new(
            ScrollZoom::new(10.0, 5.0, 100.0),
            Slider::new(0.01, 0.0, 0.1, 0.005),
            Slider::new(0.1, 0.01, 0.5, 0.01),
            Slider::new(20.0, 0.0, 50.0, 1.0),
            FrameParams::subdivision_slider(1),
        )
    }

    #[test]
    fn advance_adds_speed_each_frame() {
        let mut p = params();
        p.advance();
        p.advance();
        assert!((p.theta - 0.02).abs() < 1e-6);
    }

    #[test]
    fn zero_speed_holds_angle() {
        let mut p = params();
        p.speed = Slider::fixed(0.0);
        for _ in 0..100 {
            p.advance();
        }
        assert_eq!(p.theta, 0.0);
    }

    #[test]
    fn theta_wraps_after_many_turns() {
        let mut p = params();
        p.theta = std::f32::consts::TAU * 1024.0;
        p.advance();
        assert!(p.theta < std::f32::consts::TAU);
    }

    #[test]
    fn subdivision_rounds_and_clamps() {
        let mut p = params();
        p.subdivision.set(2.6).unwrap();
        assert_eq!(p.subdivision_level().get(), 3);
        p.subdivision.set(99.0).unwrap();
        assert_eq!(p.subdivision_level().get(), MAX_SUBDIVISION);
        p.subdivision.set(0.0).unwrap();
        assert_eq!(p.subdivision_level(), SubdivisionLevel::OFF);
    }
}
