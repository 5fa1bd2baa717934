use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::key::cache_key;

/// Events per day, keyed by the day heading as it appears on the calendar page.
pub type Schedule = BTreeMap<String, Vec<Event>>;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct Event {
    pub name: String,
    /// Raw text as scraped, e.g. `7:30 PM - 9:30 PM`.
    pub time: String,
    /// Detail page path, relative to the site origin.
    pub url: String,
    pub musicians: Vec<Musician>,
}

impl Event {
    pub fn new(name: String, time: String, url: String) -> Self {
        Self {
            name,
            time,
            url,
            musicians: Vec::new(),
        }
    }

    #[must_use]
    pub fn cache_key(&self, day: &str) -> String {
        cache_key(day, &self.time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct Musician {
    pub name: String,
    pub instrument: String,
    #[cfg_attr(feature = "serde", serde(rename = "Bio"))]
    pub biography: String,
}

impl fmt::Display for Musician {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.name, self.instrument, self.biography)
    }
}
