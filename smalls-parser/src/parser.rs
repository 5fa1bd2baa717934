use std::collections::btree_map::Entry;

use scraper::Html;
use tracing::{debug, info, warn};

use crate::chunker::chunk_description_list;
use crate::select::{child_elements, first_text, selector};
use crate::{DayError, ParseError, Schedule};

/// A schedule plus everything that had to be left out of it.
#[derive(Debug, Default)]
pub struct ParsedSchedule {
    pub schedule: Schedule,
    pub failures: Vec<DayError>,
}

/// Reads every `section.schedule > div.day` of the calendar page.
///
/// A day without a heading or without a `<dl>` is skipped, as is any event
/// the chunker rejects; all of them end up in [`ParsedSchedule::failures`].
/// Sections sharing a heading are merged in markup order. A page without day
/// sections gives an empty schedule.
pub fn parse_schedule(html: &Html) -> ParsedSchedule {
    let mut parsed = ParsedSchedule::default();

    let days = html
        .select(selector!("section.schedule > div.day"))
        .collect::<Vec<_>>();
    info!("Found {} nights with events", days.len());

    for (index, day) in days.into_iter().enumerate() {
        let label = day
            .select(selector!("h2"))
            .next()
            .and_then(first_text)
            .filter(|label| !label.trim().is_empty());

        let Some(label) = label else {
            warn!(index, "skipping day section without heading");
            parsed.failures.push(DayError {
                day: None,
                error: ParseError::MissingHeading { index },
            });
            continue;
        };

        let Some(list) = day.select(selector!("dl")).next() else {
            warn!(index, day = label, "skipping day section without description list");
            parsed.failures.push(DayError {
                day: Some(label.to_string()),
                error: ParseError::MissingDescriptionList { index },
            });
            continue;
        };
        let items = child_elements(list).collect::<Vec<_>>();

        let mut events = Vec::with_capacity(items.len() / 2);
        for result in chunk_description_list(&items) {
            match result {
                Ok(event) => events.push(event),
                Err(error) => parsed.failures.push(DayError {
                    day: Some(label.to_string()),
                    error,
                }),
            }
        }

        debug!(day = label, events = events.len(), "parsed day");

        match parsed.schedule.entry(label.to_string()) {
            Entry::Vacant(entry) => {
                entry.insert(events);
            }
            Entry::Occupied(mut entry) => {
                warn!(day = label, "day heading appears twice, merging the sections");
                entry.get_mut().append(&mut events);
            }
        }
    }

    parsed
}
