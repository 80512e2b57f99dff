//! CLI command handlers

pub mod scan;
pub mod split;
