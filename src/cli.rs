use std::env;
use std::path::PathBuf;
use std::process;

use getopts::Options;
use thiserror::Error;

use crate::config::{self, Config};

#[derive(Debug)]
pub struct Args {
    pub config: Config,
    pub verbose: bool,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "b",
        "base-url",
        "Origin prefixed to event detail links [Default: https://www.smallslive.com]",
        "URL",
    );
    opts.optopt(
        "u",
        "calendar-url",
        "Calendar page to scrape [Default: https://www.smallslive.com/events/calendar/]",
        "URL",
    );
    opts.optopt(
        "c",
        "cache-dir",
        "Directory for cached HTML pages [Default: cache]",
        "DIR",
    );
    opts.optopt(
        "o",
        "output-dir",
        "Directory for per-day JSON files [Default: cache/json]",
        "DIR",
    );
    opts.optopt(
        "m",
        "month",
        "Name the cached calendar page is stored under [Default: current month]",
        "MONTH",
    );
    opts.optflag("v", "verbose", "Log every event and musician");
    opts
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CliError {
    #[error(transparent)]
    Options(#[from] getopts::Fail),
    #[error("Provided value for option '{option}' is invalid: {value:?}")]
    InvalidValue { option: &'static str, value: String },
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    match try_parse(&opts, args) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
            process::exit(0);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

/// `None` when help was asked for.
fn try_parse(opts: &Options, args: Vec<String>) -> Result<Option<Args>, CliError> {
    let matches = opts.parse(args)?;

    if matches.opt_present("help") {
        return Ok(None);
    }

    let defaults = Config::default();

    let month = matches.opt_str("month").unwrap_or(defaults.month);
    if month.is_empty() || month.contains(['/', '\\']) {
        return Err(CliError::InvalidValue {
            option: "month",
            value: month,
        });
    }

    let config = Config {
        base_url: url_opt(&matches, "base-url", config::BASE_URL)?,
        calendar_url: url_opt(&matches, "calendar-url", config::CALENDAR_URL)?,
        page_cache: matches
            .opt_str("cache-dir")
            .map_or(defaults.page_cache, PathBuf::from),
        output: matches
            .opt_str("output-dir")
            .map_or(defaults.output, PathBuf::from),
        month,
    };

    Ok(Some(Args {
        config,
        verbose: matches.opt_present("verbose"),
    }))
}

fn url_opt(
    matches: &getopts::Matches,
    option: &'static str,
    default: &str,
) -> Result<String, CliError> {
    let value = matches.opt_str(option).unwrap_or_else(|| default.into());

    match reqwest::Url::parse(&value) {
        Ok(_) => Ok(value),
        Err(_) => Err(CliError::InvalidValue { option, value }),
    }
}
