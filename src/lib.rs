//! protcalc - protein sequence property calculator
//!
//! Computes molecular weight, extinction coefficient at 280nm, isoelectric
//! point and pH-dependent net charge from an amino-acid sequence, and renders
//! them in a terminal view or as plain text.

pub mod app;
pub mod config;
pub mod logging;
pub mod protein;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use protein::{ProteinReport, ProteinSequence, InvalidResidueError};
