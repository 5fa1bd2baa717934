mod cache;
mod cli;
mod config;
mod fetch;
mod logging;
mod pipeline;
mod report;

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};

use crate::fetch::HttpFetcher;
use crate::pipeline::Scraper;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let args = cli::parse(env::args().skip(1).collect());
    logging::init(args.verbose);

    let scraper = Scraper::new(args.config, HttpFetcher::default())
        .context("Failed to set up cache directories")?;

    let report = scraper
        .run()
        .await
        .context("Failed to load the calendar page")?;

    for failure in &report.failures {
        error!("{failure}");
    }
    info!("{report}");

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
