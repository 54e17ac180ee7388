/// Drawable size in physical pixels.
///
/// The fullscreen shaders receive this as their `resolution` uniform and use it
/// to keep the image aspect-correct.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn as_array(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}
