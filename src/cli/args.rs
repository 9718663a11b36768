use crate::error::Result;
use crate::pipeline::DashboardConfig;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weather-map")]
#[command(about = "Month-by-month precipitation maps from station CSV data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Observed vs predicted, January and February 2019
    Comparison,
    /// Washington State, one month per step from January 2000
    Timelapse,
}

impl Preset {
    pub fn config(&self) -> DashboardConfig {
        match self {
            Preset::Comparison => DashboardConfig::comparison(),
            Preset::Timelapse => DashboardConfig::timelapse(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct DashboardArgs {
    #[arg(short, long, value_enum, default_value_t = Preset::Timelapse)]
    pub preset: Preset,

    #[arg(short, long, help = "Dashboard config file (TOML, YAML or JSON); overrides --preset")]
    pub config: Option<PathBuf>,

    #[arg(short, long, default_value = ".", help = "Directory relative source paths are read from")]
    pub data_dir: PathBuf,

    #[arg(long, help = "Fail on the first invalid CSV row instead of skipping it")]
    pub strict: bool,
}

impl DashboardArgs {
    pub fn dashboard_config(&self) -> Result<DashboardConfig> {
        match &self.config {
            Some(path) => DashboardConfig::from_file(path),
            None => Ok(self.preset.config()),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a single slider position to GeoJSON
    Render {
        #[command(flatten)]
        dashboard: DashboardArgs,

        #[arg(short, long, default_value = "0")]
        slider: u32,

        #[arg(short, long, help = "Output directory [default: output/weather-map-{YYMMDD}]")]
        output_dir: Option<PathBuf>,

        #[arg(long, help = "Pretty-print JSON output")]
        pretty: bool,
    },

    /// Render every slider position covered by the data, plus a manifest
    Export {
        #[command(flatten)]
        dashboard: DashboardArgs,

        #[arg(short, long, help = "Output directory [default: output/weather-map-{YYMMDD}]")]
        output_dir: Option<PathBuf>,

        #[arg(long, help = "Pretty-print JSON output")]
        pretty: bool,
    },

    /// Read slider positions from stdin, one per line, and redraw on each
    Scrub {
        #[command(flatten)]
        dashboard: DashboardArgs,

        #[arg(short, long, help = "Also write each frame to this directory")]
        output_dir: Option<PathBuf>,
    },

    /// Load every source and report rejected rows
    Validate {
        #[command(flatten)]
        dashboard: DashboardArgs,
    },

    /// Show the months each panel's data covers and the usable slider range
    Info {
        #[command(flatten)]
        dashboard: DashboardArgs,
    },
}
