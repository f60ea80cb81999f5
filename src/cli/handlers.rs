//! Subcommand handlers

use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

use super::{Cli, Command, GeocodeArgs};
use crate::commands::{CommandTable, about_text};
use crate::config::Config;
use crate::core::pipeline::{Notifier, Pipeline, PipelineReport, StderrNotifier};
use crate::sheet::{InputSource, SelectedSource, presenter_for};
use crate::utils::error::{GeocoderError, Result};
use crate::utils::logging::init_logging;

/// Exit status when some batches were skipped
pub const EXIT_INCOMPLETE: u8 = 2;

/// Load configuration, install logging, then run the chosen command
pub async fn run(cli: Cli) -> ExitCode {
    // No subscriber is installed until init_logging; earlier failures reach
    // the user only through the notifier's stderr line.
    let notifier: Arc<dyn Notifier> = Arc::new(StderrNotifier);

    let config = match load_config(&cli).await {
        Ok(config) => config,
        Err(e) => {
            notifier.notify(&e.user_message());
            return ExitCode::from(e.exit_code());
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        notifier.notify(&e.user_message());
        return ExitCode::from(e.exit_code());
    }

    let table = CommandTable::standard();
    if let Some(entry) = cli.command.menu_command().and_then(|c| table.entry(c)) {
        info!(command = entry.label, "Running menu command");
    }

    match &cli.command {
        Command::Menu => {
            print!("{}", table.render());
            ExitCode::SUCCESS
        }
        Command::About => {
            print!("{}", about_text(&config.geocoder));
            ExitCode::SUCCESS
        }
        Command::Geocode(args) => {
            let result = geocode(args, &config, notifier.clone()).await;
            if let Ok(report) = &result {
                if !report.is_complete() {
                    warn!(
                        failed_batches = report.failed_batches.len(),
                        missing_codes = report.missing_codes(),
                        "Results are incomplete"
                    );
                }
            }
            ExitCode::from(exit_status(&result))
        }
    }
}

/// Process exit status for a finished geocode run
///
/// 0 when every batch produced rows, [`EXIT_INCOMPLETE`] when some were
/// skipped, otherwise the error's own code.
pub fn exit_status(result: &Result<PipelineReport>) -> u8 {
    match result {
        Ok(report) if report.is_complete() => 0,
        Ok(_) => EXIT_INCOMPLETE,
        Err(e) => e.exit_code(),
    }
}

async fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref()).await?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Geocode the selection named by `args` and present the table
///
/// Pipeline failures have already been reported through `notifier`;
/// presentation failures are reported here.
pub async fn geocode(
    args: &GeocodeArgs,
    config: &Config,
    notifier: Arc<dyn Notifier>,
) -> Result<PipelineReport> {
    let mut pipeline = Pipeline::from_config(&config.geocoder, notifier.clone())
        .inspect_err(|e| notifier.notify(&e.user_message()))?;
    let mut source = SelectedSource::new(InputSource::new(args.input.clone()), args.selection());

    let report = pipeline.run(&mut source).await?;

    if let Err(e) = present(args, &report) {
        notifier.notify(&e.user_message());
        return Err(e);
    }
    Ok(report)
}

fn present(args: &GeocodeArgs, report: &PipelineReport) -> Result<()> {
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                GeocoderError::presentation(format!("Cannot create {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    presenter_for(args.format, writer).present(&report.table)
}
