//! CLI command implementations.

pub mod common;
pub mod multiply;
pub mod qft;
pub mod simulate;
pub mod version;
