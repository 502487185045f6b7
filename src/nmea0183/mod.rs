//! # NMEA 0183 Framing
//!
//! This module handles the outer structure of an NMEA 0183 sentence:
//! `$TTSSS,D1,D2,...,Dn*CC\r\n` (or `!` for encapsulated sentences such as AIS).
//!
//! - [`checksum`]: calculation, extraction and validation of the `*CC` suffix
//! - [`tokenizer`]: in-place splitting of the body into fields
//! - [`talker`]: decomposition of the sentence identifier and talker validation

pub mod checksum;
pub mod talker;
pub mod tokenizer;

/// Maximum length of a sentence in bytes, delimiters and CRLF included.
///
/// This is larger than the 82 bytes of the NMEA 0183 standard to leave room for AIS and
/// proprietary payloads.
pub const MAX_SENTENCE_LEN: usize = 128;

/// Maximum number of comma delimited fields in a sentence, the identifier included.
pub const MAX_FIELDS: usize = 32;
