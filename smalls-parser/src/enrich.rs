use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use crate::error::ArtistField;
use crate::select::{nested_text, selector};
use crate::{Event, Musician, ParseError};

/// Reads one musician per `div.mini-artist-info` block of an event page, in
/// block order.
pub fn parse_musicians(html: &Html) -> Vec<Result<Musician, ParseError>> {
    let musicians = html
        .select(selector!("div.mini-artist-info"))
        .enumerate()
        .map(|(index, block)| parse_artist_block(index, block))
        .collect::<Vec<_>>();

    debug!("Found info for {} artists", musicians.len());
    musicians
}

/// Appends the musicians found on `html` to `event`. Blocks that cannot be
/// read are skipped and returned.
pub fn enrich_event(event: &mut Event, html: &Html) -> Vec<ParseError> {
    let mut failures = Vec::new();

    for result in parse_musicians(html) {
        match result {
            Ok(musician) => {
                debug!(event = %event.name, %musician, "added musician");
                event.musicians.push(musician);
            }
            Err(error) => {
                warn!(event = %event.name, %error, "skipping artist block");
                failures.push(error);
            }
        }
    }

    failures
}

fn parse_artist_block(index: usize, block: ElementRef) -> Result<Musician, ParseError> {
    let missing = |field| ParseError::MissingArtistField { index, field };

    // <h2 class="mini-artist-info__title"><a href="/artists/..">Name</a></h2>
    let name = block
        .select(selector!("h2.mini-artist-info__title"))
        .next()
        .and_then(|title| nested_text(title, 2))
        .ok_or_else(|| missing(ArtistField::Name))?;

    let instrument = block
        .select(selector!("p.mini-artist-info__instrument"))
        .next()
        .and_then(|instrument| nested_text(instrument, 1))
        .ok_or_else(|| missing(ArtistField::Instrument))?;

    let biography = block
        .select(selector!("p.mini-artist-info__bio"))
        .next()
        .and_then(|bio| nested_text(bio, 1))
        .ok_or_else(|| missing(ArtistField::Biography))?;

    Ok(Musician {
        name: name.to_string(),
        instrument: instrument.to_string(),
        biography: biography.to_string(),
    })
}
