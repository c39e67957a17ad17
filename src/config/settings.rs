//! Configuration settings for the Game of Life runner

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Pause between printed generations
    pub delay_ms: u64,
    /// Stop after this many generations; run forever when absent
    #[serde(default)]
    pub max_generations: Option<usize>,
    /// Stop once the grid is a still life or has died out
    #[serde(default)]
    pub stop_when_stable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub initial_state_file: PathBuf,
    #[serde(default)]
    pub ragged_policy: RaggedPolicy,
}

/// How rows of unequal length are handled when parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RaggedPolicy {
    /// Fail with a `GridError`
    #[default]
    Reject,
    /// Pad short rows with dead cells to the longest row
    Pad,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `Generation N:` header followed by the rendered grid
    Text,
    /// One JSON record per generation, one per line
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                delay_ms: 1000,
                max_generations: None,
                stop_when_stable: false,
            },
            input: InputConfig {
                initial_state_file: PathBuf::from("input/patterns/blinker.txt"),
                ragged_policy: RaggedPolicy::Reject,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                color: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults if it does not exist
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.max_generations == Some(0) {
            anyhow::bail!("Maximum generations must be positive");
        }

        if !self.input.initial_state_file.exists() {
            anyhow::bail!(
                "Initial state file does not exist: {}",
                self.input.initial_state_file.display()
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref input) = cli_overrides.input {
            self.input.initial_state_file = input.clone();
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.max_generations = Some(generations);
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.simulation.delay_ms = delay_ms;
        }
        if cli_overrides.stop_when_stable {
            self.simulation.stop_when_stable = true;
        }
        if let Some(policy) = cli_overrides.ragged_policy {
            self.input.ragged_policy = policy;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if cli_overrides.no_color {
            self.output.color = false;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub input: Option<PathBuf>,
    pub generations: Option<usize>,
    pub delay_ms: Option<u64>,
    pub stop_when_stable: bool,
    pub ragged_policy: Option<RaggedPolicy>,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
}
