//! Command line driver for the Game of Life

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use game_of_life::{
    config::{CliOverrides, OutputFormat, RaggedPolicy, Settings},
    game_of_life::{create_example_grids, load_grid_from_file, step_n},
    run_simulation,
    utils::{ColorOutput, GenerationFormatter},
};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a grid, printing one generation per tick
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        #[command(flatten)]
        overrides: RunOverrides,
    },

    /// Print the grid after a number of generations
    Step {
        /// Initial state file
        input: PathBuf,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// How to handle rows of unequal length
        #[arg(long, value_enum, default_value_t = RaggedPolicy::Reject)]
        ragged: RaggedPolicy,

        /// Show row and column numbers
        #[arg(long)]
        coords: bool,
    },

    /// Create a default configuration and example patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Default)]
struct RunOverrides {
    /// Initial state file (overrides config)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Stop after this many generations (overrides config)
    #[arg(short, long)]
    generations: Option<usize>,

    /// Delay between generations in milliseconds (overrides config)
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Stop once the grid is a still life or dies out
    #[arg(long)]
    stop_when_stable: bool,

    /// How to handle rows of unequal length (overrides config)
    #[arg(long, value_enum)]
    ragged: Option<RaggedPolicy>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored headers
    #[arg(long)]
    no_color: bool,
}

impl From<RunOverrides> for CliOverrides {
    fn from(overrides: RunOverrides) -> Self {
        Self {
            input: overrides.input,
            generations: overrides.generations,
            delay_ms: overrides.delay_ms,
            stop_when_stable: overrides.stop_when_stable,
            ragged_policy: overrides.ragged,
            format: overrides.format,
            no_color: overrides.no_color,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run { config, overrides } => run_command(&config, overrides.into()),
        Commands::Step {
            input,
            generations,
            ragged,
            coords,
        } => step_command(&input, generations, ragged, coords),
        Commands::Setup { directory, force } => setup_command(&directory, force),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_command(config_path: &Path, overrides: CliOverrides) -> Result<()> {
    let mut settings = Settings::from_file_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;

    let stdout = std::io::stdout();
    let summary = run_simulation(&settings, &mut stdout.lock())?;

    eprintln!(
        "{}",
        ColorOutput::success(&format!(
            "Stopped after {} generation(s): {}",
            summary.generations, summary.stop_reason
        ))
    );
    Ok(())
}

fn step_command(input: &Path, generations: usize, ragged: RaggedPolicy, coords: bool) -> Result<()> {
    let initial = load_grid_from_file(input, ragged)
        .with_context(|| format!("Failed to load grid from {}", input.display()))?;
    let grid = step_n(&initial, generations);

    if coords {
        print!("{}", GenerationFormatter::format_grid_with_coords(&grid));
    } else {
        println!("{grid}");
    }
    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    let config_path = directory.join("config/default.yaml");
    let input_dir = directory.join("input/patterns");

    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!("Skipped: {} (already exists)", config_path.display()))
        );
    }

    create_example_grids(&input_dir).context("Failed to create example grids")?;
    println!("Created example patterns in: {}", input_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("Run: game_of_life run --config {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--format",
            "json",
            "--ragged",
            "pad",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["game_of_life", "-v", "step", "grid.txt", "-g", "3"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let cli = Cli::try_parse_from(["game_of_life", "run", "--format", "xml"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_overrides_conversion() {
        let overrides = RunOverrides {
            generations: Some(7),
            no_color: true,
            ..RunOverrides::default()
        };
        let cli_overrides: CliOverrides = overrides.into();
        assert_eq!(cli_overrides.generations, Some(7));
        assert!(cli_overrides.no_color);
        assert!(cli_overrides.input.is_none());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/patterns/blinker.txt").exists());

        let settings = Settings::from_file(temp_dir.path().join("config/default.yaml")).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
