//! Command line front end
//!
//! Each subcommand maps onto one [`MenuCommand`](crate::commands::MenuCommand);
//! `menu` lists the table itself.

mod handlers;

pub use handlers::{EXIT_INCOMPLETE, exit_status, geocode, run};

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::MenuCommand;
use crate::config::{Config, LogFormat};
use crate::core::batch::BatchSizing;
use crate::core::pipeline::FailurePolicy;
use crate::sheet::{OutputFormat, Selection};

/// Geocode UK postcodes with postcodes.io
#[derive(Debug, Parser)]
#[command(name = "geocoder", version, about, long_about = None)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, env = "GEOCODER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `postcode_geocoder=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format (pretty or json)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Geocode selection
    Geocode(GeocodeArgs),
    /// Show information about the geocoder
    About,
    /// List the menu commands
    Menu,
}

#[derive(Debug, Clone, Args)]
pub struct GeocodeArgs {
    /// CSV file holding the selection; `-` reads stdin
    #[arg(default_value = "-")]
    pub input: String,

    /// Write results here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Leading rows to leave out of the selection
    #[arg(long, default_value_t = 0)]
    pub skip_rows: usize,

    /// Zero-based column to select; repeat for several columns
    #[arg(long = "column", value_name = "INDEX")]
    pub columns: Vec<usize>,

    /// Nominal postcodes per request
    #[arg(long)]
    pub batch_limit: Option<usize>,

    /// How the limit maps to the batch size (reserve_one or exact)
    #[arg(long)]
    pub batch_sizing: Option<BatchSizing>,

    /// What to do when one batch fails (skip_batch or abort)
    #[arg(long)]
    pub on_batch_failure: Option<FailurePolicy>,

    /// Bulk lookup endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl Command {
    /// Menu entry behind this subcommand; `menu` is the table itself
    pub fn menu_command(&self) -> Option<MenuCommand> {
        match self {
            Command::Geocode(_) => Some(MenuCommand::GeocodeSelection),
            Command::About => Some(MenuCommand::About),
            Command::Menu => None,
        }
    }
}

impl Cli {
    /// Apply command line values on top of a loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
        if let Command::Geocode(args) = &self.command {
            args.apply_overrides(config);
        }
    }
}

impl GeocodeArgs {
    pub fn apply_overrides(&self, config: &mut Config) {
        let geocoder = &mut config.geocoder;
        if let Some(limit) = self.batch_limit {
            geocoder.batch_limit = limit;
        }
        if let Some(sizing) = self.batch_sizing {
            geocoder.batch_sizing = sizing;
        }
        if let Some(policy) = self.on_batch_failure {
            geocoder.failure_policy = policy;
        }
        if let Some(endpoint) = &self.endpoint {
            geocoder.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            geocoder.timeout = timeout;
        }
    }

    /// Active range described by `--skip-rows` and `--column`
    pub fn selection(&self) -> Selection {
        Selection {
            skip_rows: self.skip_rows,
            columns: if self.columns.is_empty() {
                None
            } else {
                Some(self.columns.clone())
            },
        }
    }
}
