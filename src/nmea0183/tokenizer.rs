//! # Tokenizer
//!
//! Splits a sentence held in a caller-owned buffer into comma delimited fields without
//! allocating. Separators are overwritten in place and the returned [`Tokens`] borrow the
//! buffer, so they cannot outlive it.

use heapless::Vec;

use crate::{Error, MAX_FIELDS};

/// The fields of one tokenized sentence.
///
/// Field 0 is always the sentence identifier (for example `GPGGA`), even when it is
/// empty. Every field is a view into the tokenized buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
    fields: Vec<&'a str, MAX_FIELDS>,
}

impl<'a> Tokens<'a> {
    /// Number of fields, the sentence identifier included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The sentence identifier field.
    pub fn sentence_id(&self) -> &'a str {
        self.field(0)
    }

    /// Returns the field at `index`, or [`None`] past the last field.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    /// Returns the field at `index`, or an empty field past the last one.
    ///
    /// Decoders rely on this: a missing trailing field reads the same as an empty one.
    pub fn field(&self, index: usize) -> &'a str {
        self.get(index).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fields.iter().copied()
    }
}

/// Tokenizes a sentence in place.
///
/// The buffer must start with `$` or `!`. The sentence ends at the first `*`, `\r`, `\n`
/// or NUL byte, or at the end of the buffer. Everything between the leading delimiter
/// and that end is split on commas, and every comma is overwritten with a NUL byte.
///
/// # Errors
///
/// - [`Error::InvalidSentence`] if the leading delimiter is missing or the sentence
///   contains non-ASCII bytes.
/// - [`Error::TooManyFields`] if the sentence has more than [`MAX_FIELDS`] fields.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::tokenize;
///
/// let mut buffer = *b"$GPHDT,274.07,T*03";
/// let tokens = tokenize(&mut buffer).unwrap();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens.sentence_id(), "GPHDT");
/// assert_eq!(tokens.field(1), "274.07");
/// assert_eq!(tokens.field(2), "T");
/// ```
pub fn tokenize(buffer: &mut [u8]) -> Result<Tokens<'_>, Error> {
    if !matches!(buffer.first(), Some(b'$' | b'!')) {
        return Err(Error::InvalidSentence);
    }

    let end = buffer
        .iter()
        .position(|&byte| matches!(byte, b'*' | b'\r' | b'\n' | 0))
        .unwrap_or(buffer.len());

    let body = &mut buffer[1..end];
    if !body.is_ascii() {
        return Err(Error::InvalidSentence);
    }

    let mut separators = 0;
    for byte in body.iter_mut().filter(|byte| **byte == b',') {
        if separators == MAX_FIELDS - 1 {
            return Err(Error::TooManyFields);
        }

        *byte = 0;
        separators += 1;
    }

    let body: &[u8] = body;
    let mut fields = Vec::new();
    for field in body.split(|&byte| byte == 0) {
        let field = core::str::from_utf8(field).map_err(|_| Error::InvalidSentence)?;
        fields.push(field).map_err(|_| Error::TooManyFields)?;
    }

    Ok(Tokens { fields })
}
