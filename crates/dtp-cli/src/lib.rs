//! CLI library components for the `dtp` picker-state inspector.

pub mod commands;
pub mod logging;
pub mod summary;
