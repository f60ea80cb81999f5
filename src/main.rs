//! Postcode geocoder command line tool
//!
//! Reads a selection of cells, geocodes every postcode in it and prints the table

#![allow(missing_docs)]

use clap::Parser;
use postcode_geocoder::cli::{self, Cli};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli::run(cli).await
}
