//! User-controlled render parameters.
//!
//! Everything a demo frame depends on lives in [`FrameParams`], which the app
//! owns and passes to its renderer each frame.

mod error;
mod frame;
mod scroll;
mod slider;

pub use error::ParamError;
pub use frame::FrameParams;
pub use scroll::ScrollZoom;
pub use slider::Slider;
