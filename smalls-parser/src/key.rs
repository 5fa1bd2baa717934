use sha1::{Digest, Sha1};

use crate::ParseError;

/// Stable identity of an event, usable as a file stem: the hex SHA-1 of
/// `"<day> <time>"`.
#[must_use]
pub fn cache_key(day: &str, time: &str) -> String {
    format!("{:x}", Sha1::digest(format!("{day} {time}").as_bytes()))
}

/// Turns `"Friday 11/16/2018"` into `"11-16-2018_friday"`.
pub fn day_filename(day: &str) -> Result<String, ParseError> {
    let malformed = || ParseError::MalformedDateLabel(day.to_string());

    let mut parts = day.split_whitespace();
    let (Some(weekday), Some(date), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    if date.split('/').count() != 3
        || !date.chars().all(|c| c.is_ascii_digit() || c == '/')
        || !weekday.chars().all(char::is_alphabetic)
    {
        return Err(malformed());
    }

    Ok(format!("{}_{}", date.replace('/', "-"), weekday).to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_hash_day_and_time_joined_by_a_space() {
        assert_eq!(
            cache_key("Friday 11/16/2018", "7:30 PM - 9:30 PM"),
            "15de91060cb34479300207590bfd3ec8293138a0"
        );
    }

    #[test_log::test]
    fn should_give_distinct_keys_to_distinct_sets_of_the_same_night() {
        let early = cache_key("Friday 11/16/2018", "7:30 PM - 9:30 PM");
        let late = cache_key("Friday 11/16/2018", "10:00 PM - 1:00 AM");

        assert_eq!(late, "bf54a05b7c6f06219026ea654e98ed52306f56de");
        assert_ne!(early, late);
        assert_eq!(early.len(), 40);
    }

    #[test_log::test]
    fn should_derive_day_filename() {
        assert_eq!(day_filename("Friday 11/16/2018").unwrap(), "11-16-2018_friday");
    }

    #[test_log::test]
    fn should_tolerate_surrounding_whitespace_in_day_label() {
        assert_eq!(
            day_filename("\n  Sunday   12/02/2018 ").unwrap(),
            "12-02-2018_sunday"
        );
    }

    #[test_log::test]
    fn when_day_label_is_malformed_should_fail() {
        for label in ["", "Friday", "Friday 11-16-2018", "11/16/2018 Friday", "Fri day 11/16/2018"] {
            assert_eq!(
                day_filename(label),
                Err(ParseError::MalformedDateLabel(label.to_string())),
                "{label:?}"
            );
        }
    }
}
