use crate::input::{InputFrame, InputState};

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demos.
pub trait App {
    /// Called once before the first frame, with the GPU ready.
    ///
    /// Create pipelines and upload static resources here.
    fn on_start(&mut self, ctx: &mut FrameCtx<'_, '_>) -> anyhow::Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Called before each frame with the input gathered since the last one.
    fn on_input(&mut self, input: &InputState, frame: &InputFrame) -> AppControl {
        let _ = (input, frame);
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
