//! geomatch: match each point of one coordinate set to its nearest point in another.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use geomatch_cli::output::{format_count, format_match, format_matches_json, Status};
use geomatch_core::config::Config;
use geomatch_geo::{match_closest_with_threshold, parse_entries, GeoPoint, InputFormat, MatchResult};
use geomatch_telemetry::{TelemetryConfig, Timer};
use owo_colors::OwoColorize;

mod prompt;

use prompt::Prompter;

/// Nearest-point matching between two coordinate sets
#[derive(Parser)]
#[command(name = "geomatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./geomatch.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Decimal places for distances, overrides the config file
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter both point sets at the prompt (default)
    Interactive,

    /// Match point sets given on the command line
    Match {
        /// Source points, e.g. "42.3601,-71.0589; 40.7128,-74.0060"
        #[arg(long)]
        source: String,

        /// Target points, same format as --source
        #[arg(long)]
        target: String,

        /// Points are written as DMS with hemisphere letters, e.g. "423010N,0710253W"
        #[arg(long)]
        dms: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Effective settings after merging config file and flags.
struct Settings {
    format: OutputFormat,
    precision: usize,
    parallel_threshold: usize,
    default_format: Option<InputFormat>,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let schema = &config.schema;
        let format = match cli.format {
            Some(format) => format,
            None if schema.output.format == "json" => OutputFormat::Json,
            None => OutputFormat::Text,
        };
        let default_format = schema
            .input
            .default_format
            .as_deref()
            .map(str::parse::<InputFormat>)
            .transpose()
            .context("Invalid input.default_format")?;

        Ok(Self {
            format,
            precision: cli.precision.unwrap_or(schema.output.precision),
            parallel_threshold: schema.matching.parallel_threshold,
            default_format,
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.schema.general.log_level.clone()
    };
    let json_logs = config.schema.general.log_format == "json";
    geomatch_telemetry::init_with_config(TelemetryConfig::with_level(log_level).json(json_logs))?;
    tracing::debug!(config = ?config.path, "configuration loaded");

    let settings = Settings::resolve(&cli, &config)?;

    match cli.command {
        None | Some(Commands::Interactive) => run_interactive(&settings),
        Some(Commands::Match { source, target, dms }) => {
            let format = if dms { InputFormat::Dms } else { InputFormat::Decimal };
            let source = parse_entries(&source, format).context("Invalid --source")?;
            let target = parse_entries(&target, format).context("Invalid --target")?;

            let results = find_matches(&source, &target, &settings);
            report(&mut io::stdout().lock(), &results, &settings)
        }
    }
}

fn run_interactive(settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    // Keep stdout clean for the JSON document; prompts go to stderr then.
    let prompts: Box<dyn Write> = match settings.format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };
    run_session(stdin.lock(), prompts, &mut io::stdout().lock(), settings)
}

/// Collects both point sets through `input`/`prompts` and writes results to `out`.
fn run_session<R: BufRead, P: Write>(
    input: R,
    prompts: P,
    out: &mut impl Write,
    settings: &Settings,
) -> Result<()> {
    let mut prompter = Prompter::new(input, prompts).with_default_format(settings.default_format);

    let source = prompter.collect_set("first set")?;
    let target = prompter.collect_set("second set")?;
    prompter.output().flush()?;

    if settings.format == OutputFormat::Text {
        Status::success(&format!(
            "Matching {} against {}",
            format_count(source.len(), "point", "points"),
            format_count(target.len(), "point", "points"),
        ));
    }
    if target.is_empty() {
        Status::warning("Second set is empty; no point has a match");
    }

    let results = find_matches(&source, &target, settings);
    report(out, &results, settings)
}

fn find_matches(source: &[GeoPoint], target: &[GeoPoint], settings: &Settings) -> Vec<MatchResult> {
    let timer = Timer::start("match_closest");
    let results = match_closest_with_threshold(source, target, settings.parallel_threshold);
    timer.stop();
    results
}

fn report(out: &mut impl Write, results: &[MatchResult], settings: &Settings) -> Result<()> {
    match settings.format {
        OutputFormat::Text => {
            for result in results {
                writeln!(out, "{}", format_match(result, settings.precision))?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", format_matches_json(results)?)?,
    }
    out.flush()?;
    Ok(())
}
