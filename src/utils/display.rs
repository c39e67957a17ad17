//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{render, Grid};
use crate::simulation::Generation;
use anyhow::{Context, Result};

/// Formats generations for an output sink
pub struct GenerationFormatter;

impl GenerationFormatter {
    /// Format one generation in the requested output format.
    ///
    /// Text output is a `Generation N:` header, the rendered grid and a
    /// blank line. JSON output is a single line.
    pub fn format(generation: &Generation, format: OutputFormat, color: bool) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::format_text(generation, color)),
            OutputFormat::Json => Self::format_json(generation),
        }
    }

    pub fn format_text(generation: &Generation, color: bool) -> String {
        let header = format!("Generation {}:", generation.number);
        let header = if color {
            ColorOutput::info(&header)
        } else {
            header
        };
        format!("{header}\n{}\n\n", render(&generation.grid))
    }

    pub fn format_json(generation: &Generation) -> Result<String> {
        let mut line = serde_json::to_string(generation).with_context(|| {
            format!("Failed to serialize generation {}", generation.number)
        })?;
        line.push('\n');
        Ok(line)
    }

    /// Format a grid with row and column numbers
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..grid.width() {
            output.push_str(&format!("{}", col % 10));
        }
        output.push('\n');

        for (row, line) in render(grid).split('\n').enumerate() {
            output.push_str(&format!("{:2} {}\n", row, line));
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && std::env::var("TERM").unwrap_or_default() != "dumb"
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
