//! jewelbox engine crate.
//!
//! Platform + GPU runtime for the jewelbox demos, plus the pieces the demos
//! share: parameter state, jitter sampling, uniform layouts and asset loading.

pub mod assets;
pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod params;
pub mod render;
pub mod sampling;
pub mod time;
pub mod window;
