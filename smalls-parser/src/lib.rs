mod chunker;
mod enrich;
mod error;
mod key;
mod parser;
mod select;
mod structs;

pub use chunker::chunk_description_list;
pub use enrich::{enrich_event, parse_musicians};
pub use error::{ArtistField, DayError, ParseError};
pub use key::{cache_key, day_filename};
pub use parser::{parse_schedule, ParsedSchedule};
pub use structs::{Event, Musician, Schedule};
