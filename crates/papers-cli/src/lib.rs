//! Library half of the `papers-hub` binary: logging, configuration and
//! terminal presentation.

pub mod config;
pub mod logging;
pub mod render;
pub mod summary;
