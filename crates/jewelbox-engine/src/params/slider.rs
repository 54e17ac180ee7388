use super::ParamError;

/// Bounded numeric parameter, the native counterpart of an HTML range input.
///
/// Values arrive either as text (command line) or as discrete nudges (keys).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Slider {
    value: f32,
    min: f32,
    max: f32,
    step: f32,
}

impl Slider {
    /// Creates a slider; `initial` is clamped into range.
    pub fn new(initial: f32, min: f32, max: f32, step: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: initial.clamp(min, max),
            min,
            max,
            step: step.abs(),
        }
    }

    /// A slider pinned to one value.
    pub fn fixed(value: f32) -> Self {
        Self::new(value, value, value, 0.0)
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// Parses `text` and sets the value directly (clamped).
    ///
    /// On error the value is left unchanged.
    pub fn set_from_text(&mut self, text: &str) -> Result<f32, ParamError> {
        let text = text.trim();
        let parsed: f32 = text.parse().map_err(|source| ParamError::NotANumber {
            text: text.to_string(),
            source,
        })?;
        self.set(parsed)
    }

    /// Sets the value directly (clamped). Rejects NaN and infinities.
    pub fn set(&mut self, value: f32) -> Result<f32, ParamError> {
        if !value.is_finite() {
            return Err(ParamError::NotFinite(value));
        }
        self.value = value.clamp(self.min, self.max);
        Ok(self.value)
    }

    /// Moves by `steps * step` and clamps. Returns whether the value changed.
    pub fn nudge(&mut self, steps: i32) -> bool {
        let before = self.value;
        self.value = (self.value + steps as f32 * self.step).clamp(self.min, self.max);
        self.value != before
    }
}
