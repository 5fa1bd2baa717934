use scraper::ElementRef;
use tracing::{debug, warn};

use crate::select::{child_element, first_text, nested_text, non_empty_attr};
use crate::{Event, ParseError};

/// Pairs up the children of a `<dl>`: each `<dt>` holds the set time, the
/// `<dd>` after it an anchor carrying the event name and detail page link.
///
/// Yields one result per complete pair, in markup order. A trailing element
/// without a partner is dropped with a warning.
pub fn chunk_description_list(items: &[ElementRef]) -> Vec<Result<Event, ParseError>> {
    if items.len() % 2 != 0 {
        warn!(
            elements = items.len(),
            "description list has an odd number of elements, dropping the last one"
        );
    }

    items
        .chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| parse_pair(index, pair[0], pair[1]))
        .collect()
}

fn parse_pair(index: usize, time: ElementRef, detail: ElementRef) -> Result<Event, ParseError> {
    let time = first_text(time)
        .ok_or(ParseError::MissingTime { index })?
        .to_string();

    let Some(anchor) = child_element(detail, "a") else {
        return Err(ParseError::MissingAnchor { time });
    };

    let Some(name) = nested_text(anchor, 1) else {
        return Err(ParseError::MissingName { time });
    };

    let Some(url) = non_empty_attr(anchor, "href") else {
        return Err(ParseError::MissingHref {
            name: name.to_string(),
            time,
        });
    };

    let event = Event::new(name.to_string(), time, url.to_string());
    debug!(name = %event.name, time = %event.time, url = %event.url, "parsed event");

    Ok(event)
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;
    use crate::select::{child_elements, selector};

    fn list_items(html: &Html) -> Vec<ElementRef<'_>> {
        let list = html.select(selector!("dl")).next().unwrap();
        child_elements(list).collect()
    }

    fn events(markup: &str) -> Vec<Result<Event, ParseError>> {
        let html = Html::parse_fragment(markup);
        chunk_description_list(&list_items(&html))
    }

    #[test_log::test]
    fn should_pair_times_with_details() {
        let events = events(
            r#"<dl>
                <dt>7:30 PM - 9:30 PM</dt><dd><a href="/events/1">Early Set</a></dd>
                <dt>10:00 PM - 1:00 AM</dt><dd><a href="/events/2">Late Set</a></dd>
                <dt>1:00 AM - 4:00 AM</dt><dd><a href="/events/3">After Hours</a></dd>
            </dl>"#,
        );

        assert_eq!(
            events,
            vec![
                Ok(Event::new("Early Set".into(), "7:30 PM - 9:30 PM".into(), "/events/1".into())),
                Ok(Event::new("Late Set".into(), "10:00 PM - 1:00 AM".into(), "/events/2".into())),
                Ok(Event::new("After Hours".into(), "1:00 AM - 4:00 AM".into(), "/events/3".into())),
            ]
        );
    }

    #[test_log::test]
    fn should_keep_time_text_verbatim() {
        let events = events(r#"<dl><dt> 7:30 PM – 9:30 PM </dt><dd><a href="/e">Set</a></dd></dl>"#);

        assert_eq!(events[0].as_ref().unwrap().time, " 7:30 PM – 9:30 PM ");
    }

    #[test_log::test]
    fn when_list_has_odd_length_should_drop_the_trailing_element() {
        let events = events(
            r#"<dl>
                <dt>7:30 PM - 9:30 PM</dt><dd><a href="/events/1">Early Set</a></dd>
                <dt>10:00 PM - 1:00 AM</dt><dd><a href="/events/2">Late Set</a></dd>
                <dt>1:00 AM - 4:00 AM</dt>
            </dl>"#,
        );

        assert_eq!(events.len(), 2);
        assert!(events.iter().all(Result::is_ok));
    }

    #[test_log::test]
    fn when_anchor_has_no_href_should_name_the_event() {
        let events = events(
            r#"<dl>
                <dt>7:30 PM - 9:30 PM</dt><dd><a>Early Set</a></dd>
                <dt>10:00 PM - 1:00 AM</dt><dd><a href="/events/2">Late Set</a></dd>
            </dl>"#,
        );

        assert_eq!(
            events[0],
            Err(ParseError::MissingHref {
                name: "Early Set".into(),
                time: "7:30 PM - 9:30 PM".into(),
            })
        );
        assert!(events[1].is_ok());
    }

    #[test_log::test]
    fn when_href_is_empty_should_fail_instead_of_defaulting() {
        let events = events(r#"<dl><dt>7:30 PM</dt><dd><a href="">Early Set</a></dd></dl>"#);

        assert!(matches!(events[0], Err(ParseError::MissingHref { .. })));
    }

    #[test_log::test]
    fn when_detail_has_no_anchor_should_fail() {
        let events = events("<dl><dt>7:30 PM</dt><dd>Private event</dd></dl>");

        assert_eq!(
            events[0],
            Err(ParseError::MissingAnchor {
                time: "7:30 PM".into()
            })
        );
    }

    #[test_log::test]
    fn when_time_is_empty_should_fail() {
        let events = events(r#"<dl><dt></dt><dd><a href="/e">Set</a></dd></dl>"#);

        assert_eq!(events[0], Err(ParseError::MissingTime { index: 0 }));
    }

    #[test_log::test]
    fn when_list_is_empty_should_yield_nothing() {
        assert!(events("<dl></dl>").is_empty());
    }
}
