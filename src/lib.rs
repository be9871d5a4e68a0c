pub mod classify;
pub mod cli;
pub mod competitors;
pub mod config;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod fetch;
pub mod market;
pub mod pipeline;
pub mod recommend;
pub mod render;
pub mod report;
pub mod tables;

pub use error::{Result, StorelensError};
pub use pipeline::{Analyzer, Outcome};
