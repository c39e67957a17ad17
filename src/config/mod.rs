//! Configuration management for the Game of Life runner

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, OutputConfig, OutputFormat, RaggedPolicy, Settings,
    SimulationConfig,
};
