//! make-labels CLI library exports for integration testing.
//!
//! The binary in `main.rs` only wires these modules together.

pub mod args;
pub mod config;
pub mod errors;
pub mod reporter;
pub mod run;
