//! Generation sequencing and the paced output driver

pub mod generation;
pub mod runner;

pub use generation::{Generation, Simulation};
pub use runner::{RunSummary, Runner, StopReason};
