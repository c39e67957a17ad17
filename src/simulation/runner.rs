//! Paced driver that writes successive generations to an output sink

use super::{Generation, Simulation};
use crate::config::{OutputFormat, Settings};
use crate::game_of_life::Grid;
use crate::utils::GenerationFormatter;
use anyhow::{Context, Result};
use std::fmt;
use std::io::Write;
use std::time::Duration;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The configured number of generations was written
    GenerationLimit,
    /// The grid stopped changing
    StillLife,
    /// No live cells remain
    Extinct,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            StopReason::GenerationLimit => "generation limit reached",
            StopReason::StillLife => "still life reached",
            StopReason::Extinct => "all cells died",
        };
        f.write_str(reason)
    }
}

/// Outcome of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: usize,
    pub stop_reason: StopReason,
    pub final_grid: Grid,
}

/// Writes generations to a sink with a fixed delay between them
#[derive(Debug, Clone)]
pub struct Runner {
    delay: Duration,
    max_generations: Option<usize>,
    stop_when_stable: bool,
    format: OutputFormat,
    color: bool,
}

impl Runner {
    pub fn new(delay: Duration, format: OutputFormat) -> Self {
        Self {
            delay,
            max_generations: None,
            stop_when_stable: false,
            format,
            color: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            delay: Duration::from_millis(settings.simulation.delay_ms),
            max_generations: settings.simulation.max_generations,
            stop_when_stable: settings.simulation.stop_when_stable,
            format: settings.output.format,
            color: settings.output.color,
        }
    }

    pub fn with_max_generations(mut self, max_generations: Option<usize>) -> Self {
        self.max_generations = max_generations;
        self
    }

    pub fn with_stop_when_stable(mut self, stop_when_stable: bool) -> Self {
        self.stop_when_stable = stop_when_stable;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Drive `simulation`, writing each generation to `out`.
    ///
    /// Without a generation limit or stability check this only returns on a
    /// write error.
    pub fn run<W: Write>(&self, simulation: Simulation, out: &mut W) -> Result<RunSummary> {
        tracing::info!(
            delay_ms = self.delay.as_millis() as u64,
            max_generations = ?self.max_generations,
            stop_when_stable = self.stop_when_stable,
            "starting simulation"
        );

        let mut generations = simulation.peekable();
        loop {
            let generation = generations
                .next()
                .context("Simulation ended without producing a generation")?;
            self.write_generation(&generation, out)?;

            if let Some(reason) = self.stop_reason(&generation, generations.peek()) {
                tracing::info!(generations = generation.number, %reason, "simulation stopped");
                return Ok(RunSummary {
                    generations: generation.number,
                    stop_reason: reason,
                    final_grid: generation.grid,
                });
            }

            if !self.delay.is_zero() {
                std::thread::sleep(self.delay);
            }
        }
    }

    fn write_generation<W: Write>(&self, generation: &Generation, out: &mut W) -> Result<()> {
        tracing::debug!(
            generation = generation.number,
            living = generation.grid.living_count(),
            "writing generation"
        );

        let text = GenerationFormatter::format(generation, self.format, self.color)?;
        out.write_all(text.as_bytes())
            .and_then(|()| out.flush())
            .with_context(|| format!("Failed to write generation {}", generation.number))
    }

    fn stop_reason(&self, current: &Generation, next: Option<&Generation>) -> Option<StopReason> {
        if self.stop_when_stable {
            if current.grid.is_extinct() {
                return Some(StopReason::Extinct);
            }
            if next.is_some_and(|next| next.grid == current.grid) {
                return Some(StopReason::StillLife);
            }
        }

        match self.max_generations {
            Some(max) if current.number >= max => Some(StopReason::GenerationLimit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::parse;

    fn run_to_string(runner: &Runner, text: &str) -> (RunSummary, String) {
        let mut out = Vec::new();
        let summary = runner
            .run(Simulation::new(parse(text).unwrap()), &mut out)
            .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_generation_limit() {
        let runner = Runner::new(Duration::ZERO, OutputFormat::Text).with_max_generations(Some(2));
        let (summary, output) = run_to_string(&runner, "...\n***\n...");

        assert_eq!(summary.generations, 2);
        assert_eq!(summary.stop_reason, StopReason::GenerationLimit);
        assert_eq!(summary.final_grid, parse("...\n***\n...").unwrap());
        assert_eq!(
            output,
            "Generation 1:\n.*.\n.*.\n.*.\n\nGeneration 2:\n...\n***\n...\n\n"
        );
    }

    #[test]
    fn test_stops_on_extinction() {
        let runner = Runner::new(Duration::ZERO, OutputFormat::Text)
            .with_max_generations(Some(50))
            .with_stop_when_stable(true);
        let (summary, output) = run_to_string(&runner, "*");

        assert_eq!(summary.generations, 1);
        assert_eq!(summary.stop_reason, StopReason::Extinct);
        assert_eq!(output, "Generation 1:\n.\n\n");
    }

    #[test]
    fn test_stops_on_still_life() {
        let runner = Runner::new(Duration::ZERO, OutputFormat::Text).with_stop_when_stable(true);
        let (summary, _) = run_to_string(&runner, "....\n.**.\n.*..\n....");

        // The L-tromino fills in to a block after one generation
        assert_eq!(summary.generations, 1);
        assert_eq!(summary.stop_reason, StopReason::StillLife);
        assert_eq!(summary.final_grid, parse("....\n.**.\n.**.\n....").unwrap());
    }

    #[test]
    fn test_oscillator_ignores_stability_check() {
        let runner = Runner::new(Duration::ZERO, OutputFormat::Text)
            .with_max_generations(Some(5))
            .with_stop_when_stable(true);
        let (summary, _) = run_to_string(&runner, "...\n***\n...");

        assert_eq!(summary.generations, 5);
        assert_eq!(summary.stop_reason, StopReason::GenerationLimit);
    }

    #[test]
    fn test_json_lines() {
        let runner = Runner::new(Duration::ZERO, OutputFormat::Json).with_max_generations(Some(3));
        let (_, output) = run_to_string(&runner, "**\n**");

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        for (i, line) in lines.iter().enumerate() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["generation"], i + 1);
        }
    }

    #[test]
    fn test_from_settings() {
        let mut settings = Settings::default();
        settings.simulation.delay_ms = 0;
        settings.simulation.max_generations = Some(1);
        settings.output.color = false;

        let runner = Runner::from_settings(&settings);
        let (summary, output) = run_to_string(&runner, "*");
        assert_eq!(summary.generations, 1);
        assert_eq!(output, "Generation 1:\n.\n\n");
    }
}
