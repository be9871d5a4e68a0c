//! Command implementations for storelens CLI

mod analyze;
mod misc;

pub use analyze::*;
pub use misc::*;
