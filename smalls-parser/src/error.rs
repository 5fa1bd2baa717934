use std::fmt;

use thiserror::Error;

/// A piece of markup the parser relies on was not where it was expected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("day section #{index} has no heading")]
    MissingHeading { index: usize },
    #[error("day section #{index} has no description list")]
    MissingDescriptionList { index: usize },
    #[error("event #{index} has no time text")]
    MissingTime { index: usize },
    #[error("event at {time:?} has no detail anchor")]
    MissingAnchor { time: String },
    #[error("event at {time:?} has no name")]
    MissingName { time: String },
    #[error("event {name:?} at {time:?} has no href")]
    MissingHref { name: String, time: String },
    #[error("artist block #{index} has no {field}")]
    MissingArtistField { index: usize, field: ArtistField },
    #[error("date label {0:?} is not of the form `<Weekday> <MM/DD/YYYY>`")]
    MalformedDateLabel(String),
}

impl ParseError {
    /// The event the error is about, by name when it was read, else by time.
    pub fn event(&self) -> Option<&str> {
        match self {
            Self::MissingHref { name, .. } => Some(name),
            Self::MissingAnchor { time } | Self::MissingName { time } => Some(time),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistField {
    Name,
    Instrument,
    Biography,
}

impl fmt::Display for ArtistField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Instrument => "instrument",
            Self::Biography => "biography",
        })
    }
}

/// A [`ParseError`] together with the day it happened in, when that is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayError {
    pub day: Option<String>,
    pub error: ParseError,
}

impl std::error::Error for DayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl fmt::Display for DayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.day {
            Some(day) => write!(f, "{day}: {}", self.error),
            None => write!(f, "{}", self.error),
        }
    }
}
