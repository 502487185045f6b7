//! # NMEA 0183 Decoder
//!
//! A stateful decoder for NMEA 0183 sentences, the serial protocol spoken by marine
//! electronics (GNSS receivers, depth sounders, compasses, AIS transceivers, ...).
//!
//! Each sentence, `$TTSSS,D1,D2,...,Dn*CC\r\n` (or `!` for encapsulated sentences such
//! as AIS), goes through the same pipeline:
//!
//! 1. length and checksum validation
//! 2. in-place tokenization into a caller-provided scratch buffer
//! 3. decomposition of the identifier into talker and sentence type
//! 4. lookup of the sentence type in the dispatch table
//! 5. module and field count gating
//! 6. decoding into the state of the owning module
//!
//! The state of each module accumulates across sentences: a field that is empty in a
//! later sentence keeps its previous value.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{Error, MAX_SENTENCE_LEN, Nmea0183Context, ParserConfig};
//!
//! let mut context = Nmea0183Context::new();
//! context
//!     .init(ParserConfig::new().error_callback(|report| {
//!         eprintln!("{} error: {}", report.category, report.error);
//!     }))
//!     .unwrap();
//!
//! let mut scratch = [0u8; MAX_SENTENCE_LEN];
//! let sentences: [&[u8]; 3] = [
//!     b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n",
//!     b"$HEHDT,274.07,T*19",
//!     b"$GPXXX,1,2,3",
//! ];
//!
//! assert_eq!(context.parse(sentences[0], &mut scratch), Ok(()));
//! assert_eq!(context.parse(sentences[1], &mut scratch), Ok(()));
//! assert_eq!(context.parse(sentences[2], &mut scratch), Err(Error::UnknownSentence));
//!
//! assert_eq!(context.gnss_data().unwrap().fix_quality, Some(1));
//! assert_eq!(context.heading_data().unwrap().heading_true, Some(274.07));
//! ```
//!
//! ## Features
//!
//! Every module is a cargo feature (`gnss`, `ais`, `navigation`, `waypoint`, `heading`,
//! `sensor`, `radar`, `safety`, `comm`, `system`, `attitude`, `misc`), all enabled by
//! default. A module that is not compiled in has no dispatch entries and is never
//! enabled. The `serde` feature derives `Serialize`/`Deserialize` for the state types,
//! and `time` adds conversions to [`time::Time`](https://docs.rs/time) and `time::Date`.

pub mod context;
pub mod dispatch;
pub mod error;
pub mod nmea0183;
pub mod nmea_content;
pub mod parsing;

pub use context::{Nmea0183Context, ParserConfig};
pub use dispatch::{DISPATCH_TABLE, Decoder, DispatchEntry, Module, ModuleSet, lookup};
pub use error::{Error, ErrorCallback, ErrorCategory, ErrorReport};
pub use nmea0183::{
    MAX_FIELDS, MAX_SENTENCE_LEN,
    checksum::{
        calculate as calculate_checksum, extract as extract_checksum, format_checksum,
        validate as validate_checksum, verify as verify_checksum,
    },
    talker::{SentenceId, Talker, split_sentence_id},
    tokenizer::{Tokens, tokenize},
};
pub use nmea_content::{FaaMode, ModuleStates, Reference, Status, Steer};
pub use parsing::{Coordinate, Date, TimeOfDay};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
mod tests {
    mod scenarios;
}
