//! Named accessors over the handful of markup shapes the venue's pages use.
//!
//! Every accessor answers `None` when the node it reaches for is missing, so
//! callers decide what a missing node means instead of dereferencing blindly.

use scraper::ElementRef;

macro_rules! selector {
    ($query:expr) => {{
        static SELECTOR: ::once_cell::sync::Lazy<::scraper::Selector> =
            ::once_cell::sync::Lazy::new(|| ::scraper::Selector::parse($query).unwrap());
        &SELECTOR
    }};
}

pub(crate) use selector;

/// First text node anywhere below `element`, in document order, untrimmed.
///
/// `<dt>7:30 PM - 9:30 PM</dt>` and `<h2><span>Friday 11/16/2018</span></h2>`
/// both resolve to their inner text.
pub(crate) fn first_text<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    element.text().next()
}

/// Text held by the node reached by following `depth` first-children from
/// `element`. Depth 1 is `<p>text</p>`, depth 2 is `<h2><a>text</a></h2>`.
///
/// Whitespace counts as a child node, so `<h2>\n<a>text</a></h2>` does not
/// match depth 2.
pub(crate) fn nested_text<'a>(element: ElementRef<'a>, depth: usize) -> Option<&'a str> {
    let mut node = *element;
    for _ in 0..depth {
        node = node.first_child()?;
    }
    node.value().as_text().map(|text| &**text)
}

/// First direct child element of `element` with the given tag name.
pub(crate) fn child_element<'a>(element: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == name)
}

/// Direct child elements of `element`, skipping text and comment nodes.
pub(crate) fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Value of attribute `name`, treating an empty value as absent.
pub(crate) fn non_empty_attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    fn first<'a>(html: &'a Html, query: &str) -> ElementRef<'a> {
        let selector = scraper::Selector::parse(query).unwrap();
        html.select(&selector).next().unwrap()
    }

    #[test_log::test]
    fn should_read_first_text_below_nested_markup() {
        let html = Html::parse_fragment("<h2><span>Friday 11/16/2018</span> extra</h2>");

        assert_eq!(first_text(first(&html, "h2")), Some("Friday 11/16/2018"));
    }

    #[test_log::test]
    fn should_follow_first_children_to_the_requested_depth() {
        let html = Html::parse_fragment(r#"<h2 class="title"><a href="/a">Jane Doe</a></h2>"#);
        let title = first(&html, "h2");

        assert_eq!(nested_text(title, 2), Some("Jane Doe"));
        assert_eq!(nested_text(title, 1), None);
        assert_eq!(nested_text(title, 3), None);
    }

    #[test_log::test]
    fn when_an_attribute_is_empty_should_treat_it_as_absent() {
        let html = Html::parse_fragment(r#"<a href="">x</a><a title="y">z</a>"#);
        let anchor = first(&html, "a");

        assert_eq!(non_empty_attr(anchor, "href"), None);
        assert_eq!(non_empty_attr(first(&html, "a[title]"), "title"), Some("y"));
    }

    #[test_log::test]
    fn should_find_only_direct_children() {
        let html = Html::parse_fragment("<dd><span><a href=\"/deep\">x</a></span></dd>");

        assert!(child_element(first(&html, "dd"), "a").is_none());
        assert_eq!(child_elements(first(&html, "dd")).count(), 1);
    }
}
