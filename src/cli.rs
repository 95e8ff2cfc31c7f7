use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

use crate::model::WallFormat;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory holding the .tmx maps
    pub input: PathBuf,
    /// Output .lua file
    pub output: PathBuf,

    /// Level registry (JSON list or file -> index table).
    /// Defaults to `levels.json` inside the input directory
    #[arg(long, value_name = "FILE")]
    pub levels: Option<PathBuf>,

    /// Layout of the walls section
    #[arg(long, value_enum, default_value_t = WallFormat::Records)]
    pub wall_format: WallFormat,

    /// Also emit maxBullets / medalBullets from the map properties
    #[arg(long)]
    pub bullets: bool,

    /// Fail instead of leaving out a section that is missing from a map
    #[arg(long)]
    pub strict: bool,

    /// Visible width in tiles
    #[arg(long, default_value_t = crate::model::WIDTH)]
    pub width: usize,

    /// Visible height in tiles
    #[arg(long, default_value_t = crate::model::HEIGHT)]
    pub height: usize,

    /// Name of the emitted Lua table
    #[arg(long, default_value = "LEVELS")]
    pub table_name: String,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub loglevel: LogLevel,

    /// Also write the log to this file
    #[arg(long, value_name = "FILE")]
    pub logfile: Option<PathBuf>,

    /// Disables output to the terminal
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn registry_path(&self) -> PathBuf {
        self.levels
            .clone()
            .unwrap_or_else(|| self.input.join("levels.json"))
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Off => LevelFilter::Off,
        }
    }
}
