use std::io;

use scraper::Html;
use smalls_parser::{day_filename, enrich_event, parse_schedule, Event, ParsedSchedule};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cache::Cache;
use crate::config::Config;
use crate::fetch::{FetchError, Fetcher};
use crate::report::Report;

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("cache access failed: {0}")]
    Io(#[from] io::Error),
}

/// Turns the calendar page into one enriched JSON file per day.
pub struct Scraper<F> {
    config: Config,
    fetcher: F,
    pages: Cache,
    output: Cache,
}

impl<F: Fetcher> Scraper<F> {
    pub fn new(config: Config, fetcher: F) -> io::Result<Self> {
        let pages = Cache::new(&config.page_cache)?;
        let output = Cache::new(&config.output)?;

        Ok(Self {
            config,
            fetcher,
            pages,
            output,
        })
    }

    /// Fails only when the calendar page itself cannot be had. Everything
    /// further down is recorded in the report and skipped.
    pub async fn run(&self) -> Result<Report, PageError> {
        let calendar = self
            .page(&self.config.calendar_page(), &self.config.calendar_url)
            .await?;

        let ParsedSchedule { schedule, failures } =
            parse_schedule(&Html::parse_document(&calendar));

        let mut report = Report::default();
        for failure in failures {
            warn!("{failure}");
            report.fail(
                failure.day.as_deref(),
                failure.error.event(),
                &failure.error,
            );
        }

        for (day, events) in schedule {
            self.scrape_day(&day, events, &mut report).await;
        }

        Ok(report)
    }

    /// Cached copy of the page stored as `name`, fetched from `url` on a miss.
    async fn page(&self, name: &str, url: &str) -> Result<String, PageError> {
        if let Some(html) = self.pages.get(name)? {
            debug!(name, "page is cached");
            return Ok(html);
        }

        info!(url, "page is not cached, fetching");
        let html = self.fetcher.fetch(url).await?;
        self.pages.insert(name, html.as_bytes())?;

        Ok(html)
    }

    async fn scrape_day(&self, day: &str, mut events: Vec<Event>, report: &mut Report) {
        let filename = match day_filename(day) {
            Ok(stem) => format!("{stem}.json"),
            Err(err) => {
                warn!(day, %err, "skipping day");
                report.fail(Some(day), None, err);
                return;
            }
        };

        if self.output.contains(&filename) {
            info!(day, "day is already written, skipping");
            report.days_cached += 1;
            return;
        }

        let mut clean = true;
        for event in &mut events {
            info!("Fetching musicians for {day} {}", event.time);

            let name = format!("{}.html", event.cache_key(day));
            let html = match self.page(&name, &self.config.event_url(&event.url)).await {
                Ok(html) => html,
                Err(err) => {
                    warn!(day, event = %event.name, %err, "could not load event page");
                    report.fail(Some(day), Some(&event.name), err);
                    clean = false;
                    continue;
                }
            };

            let failures = enrich_event(event, &Html::parse_document(&html));
            if failures.is_empty() {
                report.events_enriched += 1;
            } else {
                clean = false;
            }
            for failure in failures {
                report.fail(Some(day), Some(&event.name), failure);
            }
        }

        // Left unwritten so the next run tries the day again.
        if !clean {
            warn!(day, "not writing day with failed events");
            return;
        }

        let written = serde_json::to_vec_pretty(&events)
            .map_err(io::Error::from)
            .and_then(|json| self.output.insert(&filename, &json));

        match written {
            Ok(_) => {
                info!(day, file = %self.output.path(&filename).display(), "wrote day");
                report.days_persisted += 1;
            }
            Err(err) => {
                warn!(day, %err, "could not write day");
                report.fail(Some(day), None, err);
            }
        }
    }
}
