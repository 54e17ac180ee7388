//! Keyboard and wheel bindings for the parameter sliders.

use jewelbox_engine::core::AppControl;
use jewelbox_engine::input::{InputFrame, Key};
use jewelbox_engine::params::{FrameParams, Slider};

/// Down/up key pairs, one per slider.
const SLIDER_KEYS: [(Key, Key, SliderId); 4] = [
    (Key::Digit1, Key::Digit2, SliderId::Speed),
    (Key::Digit3, Key::Digit4, SliderId::Thickness),
    (Key::Digit5, Key::Digit6, SliderId::Intensity),
    (Key::Digit7, Key::Digit8, SliderId::Subdivision),
];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum SliderId {
    Speed,
    Thickness,
    Intensity,
    Subdivision,
}

impl SliderId {
    fn name(self) -> &'static str {
        match self {
            SliderId::Speed => "speed",
            SliderId::Thickness => "thickness",
            SliderId::Intensity => "intensity",
            SliderId::Subdivision => "subdivision",
        }
    }

    fn slider(self, params: &mut FrameParams) -> &mut Slider {
        match self {
            SliderId::Speed => &mut params.speed,
            SliderId::Thickness => &mut params.thickness,
            SliderId::Intensity => &mut params.intensity,
            SliderId::Subdivision => &mut params.subdivision,
        }
    }
}

/// Applies one frame of input to `params`.
///
/// `defaults` is what `R` restores. The rotation angle survives a reset so the
/// model does not jump.
pub fn apply_input(params: &mut FrameParams, defaults: &FrameParams, input: &InputFrame) -> AppControl {
    if input.pressed(Key::Escape) {
        log::info!("escape pressed, exiting");
        return AppControl::Exit;
    }

    if input.pressed(Key::R) {
        let theta = params.theta;
        *params = defaults.clone();
        params.theta = theta;
        log::debug!("parameters reset");
    }

    for (down, up, id) in SLIDER_KEYS {
        let steps = input.press_count(up) as i32 - input.press_count(down) as i32;
        if steps == 0 {
            continue;
        }
        let slider = id.slider(params);
        if slider.nudge(steps) {
            log::debug!("{} = {}", id.name(), slider.value());
        }
    }

    for delta in &input.wheel {
        // The zoom follows DOM wheel semantics, where positive means towards the user.
        let zoom = params.zoom.apply_wheel(-delta.y());
        log::debug!("zoom = {zoom}");
    }

    AppControl::Continue
}
