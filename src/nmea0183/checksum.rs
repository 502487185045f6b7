//! # Checksum
//!
//! The NMEA 0183 checksum is the XOR of every byte between the leading `$`/`!` and the
//! `*` delimiter, transmitted as two hexadecimal digits after the `*`. The checksum is
//! optional: a sentence without one always validates.

use nom::{Parser, bytes::complete::take, error::ErrorKind, number::complete::hex_u32};

use crate::{Error, parsing::consumed};

/// Calculates the NMEA 0183 checksum of a sentence.
///
/// A leading `$` or `!` is skipped, and the calculation stops at the first `*` (or at
/// the end of the input when there is none).
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::calculate_checksum;
///
/// assert_eq!(calculate_checksum(b"$GPGGA,123456,data*41"), 0x41);
/// assert_eq!(calculate_checksum(b"GPGGA,123456,data"), 0x41);
/// ```
pub fn calculate(sentence: &[u8]) -> u8 {
    let body = match sentence.first() {
        Some(b'$' | b'!') => &sentence[1..],
        _ => sentence,
    };

    body.iter()
        .take_while(|&&byte| byte != b'*')
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Extracts the transmitted checksum following the first `*` of a sentence.
///
/// At least two bytes must follow the `*` and both must be hexadecimal digits. Anything
/// after those two digits (such as a trailing CRLF) is ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidSentence`] when there is no `*`, when fewer than two bytes
/// follow it, or when they are not hexadecimal digits.
pub fn extract(sentence: &[u8]) -> Result<u8, Error> {
    let star = sentence
        .iter()
        .position(|&byte| byte == b'*')
        .ok_or(Error::InvalidSentence)?;

    let result: nom::IResult<&[u8], u8> = hex_byte(&sentence[star + 1..]);
    result.map(|(_, cc)| cc).map_err(|_| Error::InvalidSentence)
}

/// Checks the transmitted checksum against the calculated one.
///
/// # Errors
///
/// Returns [`Error::ChecksumFailed`] with both values on a mismatch. A sentence without a
/// well-formed `*HH` suffix passes.
pub fn verify(sentence: &[u8]) -> Result<(), Error> {
    let Ok(found) = extract(sentence) else {
        return Ok(());
    };

    let expected = calculate(sentence);
    if expected == found {
        Ok(())
    } else {
        Err(Error::ChecksumFailed { expected, found })
    }
}

/// Returns `true` when the sentence carries no checksum or a correct one.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::validate_checksum;
///
/// assert!(validate_checksum(b"$GPGGA,123456,data*41"));
/// assert!(validate_checksum(b"$GPGGA,123456,data"));
/// assert!(!validate_checksum(b"$GPGGA,123456,data*42"));
/// ```
pub fn validate(sentence: &[u8]) -> bool {
    verify(sentence).is_ok()
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

fn hex_byte(i: &[u8]) -> nom::IResult<&[u8], u8> {
    let (i, digits) = take(2u8).parse(i)?;
    let (_, cc) = consumed(hex_u32, ErrorKind::HexDigit).parse(digits)?;

    Ok((i, cc as u8))
}
