//! Interactive coordinate entry.
//!
//! Asks for an entry format, reads `;`-separated coordinate pairs until the
//! user declines to add more, and re-prompts on any bad input. All parsing
//! and validation is delegated to `geomatch_geo`.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use geomatch_geo::{parse_entries, GeoPoint, InputFormat};

const FORMAT_PROMPT: &str = "Choose input format ('1' for lat, lon or '2' for degrees): ";
const ENTRY_PROMPT: &str = "Enter coordinates (multiple coordinates separated by ';'): ";
const MORE_PROMPT: &str = "Do you want to add more coordinates? (yes/no): ";

/// Line-oriented prompt over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    default_format: Option<InputFormat>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            default_format: None,
        }
    }

    /// Skip the format question and always use `format`.
    pub fn with_default_format(mut self, format: Option<InputFormat>) -> Self {
        self.default_format = format;
        self
    }

    /// Writer used for prompts; results are printed here too.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Collects one point set from the user.
    pub fn collect_set(&mut self, label: &str) -> Result<Vec<GeoPoint>> {
        writeln!(self.output, "Enter coordinates for {label}:")?;
        let format = match self.default_format {
            Some(format) => format,
            None => self.choose_format()?,
        };

        let mut points = Vec::new();
        loop {
            writeln!(self.output, "Example: {}", format.example())?;
            let entry = self.read_line(ENTRY_PROMPT)?;

            match parse_entries(&entry, format) {
                Ok(parsed) if parsed.is_empty() => {
                    writeln!(self.output, "Invalid input: no coordinates entered")?;
                    continue;
                }
                Ok(parsed) => points.extend(parsed),
                Err(e) => {
                    tracing::warn!(error = %e, code = e.code() as u32, "rejected coordinate entry");
                    writeln!(self.output, "Invalid input: {e}")?;
                    continue;
                }
            }

            let answer = self.read_line(MORE_PROMPT)?;
            if !answer.eq_ignore_ascii_case("yes") {
                break;
            }
        }

        tracing::debug!(label, count = points.len(), "point set complete");
        Ok(points)
    }

    fn choose_format(&mut self) -> Result<InputFormat> {
        loop {
            let choice = self.read_line(FORMAT_PROMPT)?;
            match choice.parse::<InputFormat>() {
                Ok(format) => return Ok(format),
                Err(_) => writeln!(self.output, "Invalid option. Please choose '1' or '2'.")?,
            }
        }
    }

    /// Prints `prompt` and returns the next trimmed line.
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            bail!("Input closed before coordinate entry finished");
        }
        Ok(line.trim().to_string())
    }
}
