pub mod cli;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;

use crate::model::{GridSize, Options};

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    initialize_logging(&args)?;

    let count = convert(&args)?;
    info!("Wrote {} levels to {}", count, args.output.display());
    Ok(())
}

/// Whole conversion for already parsed arguments; returns the level count.
///
/// The output file is only touched after every map converted cleanly.
pub fn convert(args: &cli::Cli) -> anyhow::Result<usize> {
    let opts = Options {
        grid: GridSize {
            width: args.width,
            height: args.height,
        },
        wall_format: args.wall_format,
        bullets: args.bullets,
        strict: args.strict,
        table_name: args.table_name.clone(),
    };

    // 1. ── Load the level registry ────────────────────────────────────
    let registry = parser::registry::load_registry(&args.registry_path())?;

    // 2. ── Process every map ──────────────────────────────────────────
    let levels = processor::run(&registry, &args.input, &opts)
        .with_context(|| format!("Converting maps in {}", args.input.display()))?;

    // 3. ── Write output, once ─────────────────────────────────────────
    writer::lua::emit(&levels, &opts, &args.output)
        .with_context(|| format!("Writing {}", args.output.display()))?;

    Ok(levels.len())
}

fn initialize_logging(args: &cli::Cli) -> anyhow::Result<()> {
    let loglevel = LevelFilter::from(args.loglevel);
    let term_loglevel = if args.quiet { LevelFilter::Off } else { loglevel };

    match &args.logfile {
        Some(logfile) => {
            let file = File::create(logfile)
                .with_context(|| format!("Creating log file {}", logfile.display()))?;
            CombinedLogger::init(vec![
                TermLogger::new(
                    term_loglevel,
                    Config::default(),
                    TerminalMode::Stderr,
                    ColorChoice::Auto,
                ),
                WriteLogger::new(loglevel, Config::default(), file),
            ])?;
        }
        None => TermLogger::init(
            term_loglevel,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?,
    }
    Ok(())
}
