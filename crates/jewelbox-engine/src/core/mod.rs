//! Engine-facing contracts.
//!
//! The runtime drives an [`App`] and hands it a [`FrameCtx`] once per frame;
//! nothing else of the platform loop leaks into demo code.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
