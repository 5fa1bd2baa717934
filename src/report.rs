use std::fmt;

/// One unit of work that could not be completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub day: Option<String>,
    pub event: Option<String>,
    pub reason: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.day, &self.event) {
            (Some(day), Some(event)) => write!(f, "{day} / {event}: {}", self.reason),
            (Some(day), None) => write!(f, "{day}: {}", self.reason),
            (None, Some(event)) => write!(f, "{event}: {}", self.reason),
            (None, None) => f.write_str(&self.reason),
        }
    }
}

/// Outcome of a whole run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// Days written to the output directory by this run.
    pub days_persisted: usize,
    /// Days whose output already existed and were left alone.
    pub days_cached: usize,
    pub events_enriched: usize,
    pub failures: Vec<Failure>,
}

impl Report {
    pub fn fail(&mut self, day: Option<&str>, event: Option<&str>, reason: impl ToString) {
        self.failures.push(Failure {
            day: day.map(str::to_string),
            event: event.map(str::to_string),
            reason: reason.to_string(),
        });
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days written, {} days already cached, {} events enriched, {} failures",
            self.days_persisted,
            self.days_cached,
            self.events_enriched,
            self.failures.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_locate_failures_by_day_and_event() {
        let mut report = Report::default();
        report.fail(Some("Friday 11/16/2018"), Some("Late Set"), "no href");
        report.fail(None, None, "day section #2 has no heading");

        assert!(!report.is_clean());
        assert_eq!(
            report.failures[0].to_string(),
            "Friday 11/16/2018 / Late Set: no href"
        );
        assert_eq!(
            report.failures[1].to_string(),
            "day section #2 has no heading"
        );
    }
}
