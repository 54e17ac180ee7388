//! Supersampling patterns.

mod jitter;

pub use jitter::{DEFAULT_JITTER_SCALE, JitterPattern, MAX_SUBDIVISION, SubdivisionLevel};
