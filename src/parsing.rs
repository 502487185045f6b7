//! # Parsing Utilities
//!
//! Field-level parsing primitives shared by every sentence decoder, together with the
//! combinators they are built on.
//!
//! Every primitive takes a single field and follows the same contract:
//! - an empty field fails with [`Error::NoData`],
//! - a field that is not entirely a valid value fails with [`Error::ParseFailed`]
//!   (trailing garbage is rejected, not truncated).

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser,
    character::complete::i64 as decimal,
    error::{ErrorKind, ParseError},
    number::complete::double,
};

use crate::Error;

/// A latitude or longitude in signed decimal degrees.
///
/// South and West are negative. `valid` is only set by a successful
/// [`parse_coordinate`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub degrees: f64,
    pub valid: bool,
}

/// A UTC time of day.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
    pub valid: bool,
}

/// A calendar date.
///
/// Two digit years are always mapped to `2000 + YY`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub day: u8,
    pub month: u8,
    pub year: u16,
    pub valid: bool,
}

#[cfg(feature = "time")]
impl TimeOfDay {
    /// Converts to a [`time::Time`], [`None`] while the value is not valid.
    pub fn to_time(&self) -> Option<time::Time> {
        if !self.valid {
            return None;
        }

        time::Time::from_hms_milli(self.hour, self.minute, self.second, self.millisecond).ok()
    }
}

#[cfg(feature = "time")]
impl Date {
    /// Converts to a [`time::Date`].
    ///
    /// Returns [`None`] while the value is not valid, and for dates that do not exist in
    /// the calendar (such as 31 February), which the field parser accepts.
    pub fn to_date(&self) -> Option<time::Date> {
        if !self.valid {
            return None;
        }

        let month = time::Month::try_from(self.month).ok()?;
        time::Date::from_calendar_date(self.year as i32, month, self.day).ok()
    }
}

/// Parses a decimal floating point field.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Error, parsing::parse_float};
///
/// assert_eq!(parse_float("545.4"), Ok(545.4));
/// assert_eq!(parse_float("-21.3"), Ok(-21.3));
/// assert_eq!(parse_float(""), Err(Error::NoData));
/// assert_eq!(parse_float("545.4M"), Err(Error::ParseFailed));
/// ```
pub fn parse_float(field: &str) -> Result<f64, Error> {
    if field.is_empty() {
        return Err(Error::NoData);
    }

    let result: nom::IResult<&str, f64> = consumed(double, ErrorKind::Float).parse(field);
    result.map(|(_, value)| value).map_err(|_| Error::ParseFailed)
}

/// Parses a base 10 integer field.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Error, parsing::parse_int};
///
/// assert_eq!(parse_int("08"), Ok(8));
/// assert_eq!(parse_int("-3"), Ok(-3));
/// assert_eq!(parse_int(""), Err(Error::NoData));
/// assert_eq!(parse_int("8.5"), Err(Error::ParseFailed));
/// ```
pub fn parse_int(field: &str) -> Result<i64, Error> {
    if field.is_empty() {
        return Err(Error::NoData);
    }

    let result: nom::IResult<&str, i64> = consumed(decimal, ErrorKind::Digit).parse(field);
    result.map(|(_, value)| value).map_err(|_| Error::ParseFailed)
}

/// Parses a base 10 integer field into a narrower integer type.
///
/// Values out of range for `T` fail with [`Error::ParseFailed`].
pub fn parse_int_as<T>(field: &str) -> Result<T, Error>
where
    T: TryFrom<i64>,
{
    T::try_from(parse_int(field)?).map_err(|_| Error::ParseFailed)
}

/// Parses a single character field, such as a status or unit indicator.
pub fn parse_char(field: &str) -> Result<char, Error> {
    let mut chars = field.chars();

    match (chars.next(), chars.next()) {
        (None, _) => Err(Error::NoData),
        (Some(c), None) => Ok(c),
        (Some(_), Some(_)) => Err(Error::ParseFailed),
    }
}

/// Parses an NMEA coordinate (`DDMM.MMMM` or `DDDMM.MMMM`) and its hemisphere letter.
///
/// The value is split into whole degrees (`value / 100`, truncated) and minutes (the
/// remainder), and converted to decimal degrees. `S` and `W` (in either case) negate the
/// result, `N` and `E` leave it positive.
///
/// # Errors
///
/// - [`Error::NoData`] if either field is empty.
/// - [`Error::ParseFailed`] if the value is malformed or the hemisphere is any other
///   letter.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::parsing::parse_coordinate;
///
/// let latitude = parse_coordinate("4807.038", "N").unwrap();
/// assert!((latitude.degrees - 48.1173).abs() < 1e-6);
/// assert!(latitude.valid);
///
/// let longitude = parse_coordinate("01131.000", "W").unwrap();
/// assert!((longitude.degrees + 11.516_667).abs() < 1e-6);
///
/// assert!(parse_coordinate("4807.038", "X").is_err());
/// ```
pub fn parse_coordinate(value: &str, hemisphere: &str) -> Result<Coordinate, Error> {
    if value.is_empty() || hemisphere.is_empty() {
        return Err(Error::NoData);
    }

    let raw = parse_float(value)?;
    let degrees = (raw / 100.0).trunc();
    let minutes = raw - degrees * 100.0;
    let decimal = degrees + minutes / 60.0;

    let degrees = match parse_char(hemisphere)?.to_ascii_uppercase() {
        'N' | 'E' => decimal,
        'S' | 'W' => -decimal,
        _ => return Err(Error::ParseFailed),
    };

    Ok(Coordinate {
        degrees,
        valid: true,
    })
}

/// Parses a UTC time field (`HHMMSS` or `HHMMSS.sss`).
///
/// # Errors
///
/// - [`Error::NoData`] if the field is empty.
/// - [`Error::ParseFailed`] if the field is not a number, or if the hour is above 23, or
///   the minute or second above 59.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::parsing::parse_time;
///
/// let time = parse_time("235959").unwrap();
/// assert_eq!((time.hour, time.minute, time.second), (23, 59, 59));
///
/// let time = parse_time("123519.25").unwrap();
/// assert_eq!(time.millisecond, 250);
///
/// assert!(parse_time("246000").is_err());
/// ```
pub fn parse_time(field: &str) -> Result<TimeOfDay, Error> {
    let value = parse_float(field)?;
    if !value.is_finite() || value.is_sign_negative() {
        return Err(Error::ParseFailed);
    }

    let whole = value.trunc() as u64;
    let hour = whole / 10000;
    let minute = (whole / 100) % 100;
    let second = whole % 100;
    let millisecond = ((value.fract() * 1000.0).round() as u16).min(999);

    if hour > 23 || minute > 59 || second > 59 {
        return Err(Error::ParseFailed);
    }

    Ok(TimeOfDay {
        hour: hour as u8,
        minute: minute as u8,
        second: second as u8,
        millisecond,
        valid: true,
    })
}

/// Parses a date field (`DDMMYY`).
///
/// The day must be within 1–31 and the month within 1–12; the day is not checked
/// against the month. The year is always `2000 + YY`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::parsing::parse_date;
///
/// let date = parse_date("230394").unwrap();
/// assert_eq!((date.day, date.month, date.year), (23, 3, 2094));
///
/// assert!(parse_date("311302").is_err());
/// ```
pub fn parse_date(field: &str) -> Result<Date, Error> {
    let value = parse_int(field)?;
    if value < 0 {
        return Err(Error::ParseFailed);
    }

    let day = value / 10000;
    let month = (value / 100) % 100;
    let year = 2000 + value % 100;

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return Err(Error::ParseFailed);
    }

    Ok(Date {
        day: day as u8,
        month: month as u8,
        year: year as u16,
        valid: true,
    })
}

/// Turns an empty field into [`None`] and keeps every other outcome.
///
/// Decoders use this for optional fields: an empty field leaves the previous value in
/// place, while a malformed one still fails the sentence.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Error, parsing::{optional, parse_float}};
///
/// assert_eq!(optional(parse_float("")), Ok(None));
/// assert_eq!(optional(parse_float("1.5")), Ok(Some(1.5)));
/// assert_eq!(optional(parse_float("x")), Err(Error::ParseFailed));
/// ```
pub fn optional<T>(result: Result<T, Error>) -> Result<Option<T>, Error> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Error::NoData) => Ok(None),
        Err(error) => Err(error),
    }
}

/// Ensures that the parser consumes all input, failing with `e` otherwise.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// let result = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_consumed() {
        let mut parser = consumed(double, ErrorKind::Float);

        let result: nom::IResult<&str, f64> = parser.parse("12.5");
        assert_eq!(result, Ok(("", 12.5)));

        let result: nom::IResult<&str, f64> = parser.parse("12.5M");
        assert_eq!(
            result,
            Err(Err::Error(nom::error::Error::new("M", ErrorKind::Float)))
        );
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("0.9"), Ok(0.9));
        assert_eq!(parse_float("008"), Ok(8.0));
        assert_eq!(parse_float(".5"), Ok(0.5));
        assert_eq!(parse_float("1e3"), Ok(1000.0));
        assert_eq!(parse_float(""), Err(Error::NoData));

        for field in ["M", "1.2.3", "12 ", " 12", "1,2", "0x10", "-"] {
            assert_eq!(parse_float(field), Err(Error::ParseFailed), "{field:?}");
        }
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("0"), Ok(0));
        assert_eq!(parse_int("123519"), Ok(123519));
        assert_eq!(parse_int(""), Err(Error::NoData));

        for field in ["A8", "8A", "1.0", "+", "99999999999999999999"] {
            assert_eq!(parse_int(field), Err(Error::ParseFailed), "{field:?}");
        }

        assert_eq!(parse_int_as::<u8>("255"), Ok(255u8));
        assert_eq!(parse_int_as::<u8>("256"), Err(Error::ParseFailed));
        assert_eq!(parse_int_as::<u8>("-1"), Err(Error::ParseFailed));
    }

    #[test]
    fn test_parse_char() {
        assert_eq!(parse_char("A"), Ok('A'));
        assert_eq!(parse_char(""), Err(Error::NoData));
        assert_eq!(parse_char("AV"), Err(Error::ParseFailed));
    }

    #[test]
    fn test_parse_coordinate() {
        let coordinate = parse_coordinate("4807.038", "N").unwrap();
        assert_close(coordinate.degrees, 48.1173);
        assert!(coordinate.valid);

        assert_close(parse_coordinate("01131.000", "E").unwrap().degrees, 11.516_667);
        assert_close(parse_coordinate("01131.000", "W").unwrap().degrees, -11.516_667);
        assert_close(parse_coordinate("4807.038", "s").unwrap().degrees, -48.1173);
        assert_close(parse_coordinate("4807.038", "n").unwrap().degrees, 48.1173);
        assert_close(parse_coordinate("0000.000", "S").unwrap().degrees, 0.0);
        assert_close(parse_coordinate("18000.000", "W").unwrap().degrees, -180.0);
    }

    #[test]
    fn test_parse_coordinate_errors() {
        assert_eq!(parse_coordinate("", "N"), Err(Error::NoData));
        assert_eq!(parse_coordinate("4807.038", ""), Err(Error::NoData));
        assert_eq!(parse_coordinate("4807.038", "X"), Err(Error::ParseFailed));
        assert_eq!(parse_coordinate("4807.038", "NE"), Err(Error::ParseFailed));
        assert_eq!(parse_coordinate("48O7.038", "N"), Err(Error::ParseFailed));
    }

    #[test]
    fn test_parse_time() {
        let time = parse_time("235959").unwrap();
        assert_eq!(
            time,
            TimeOfDay {
                hour: 23,
                minute: 59,
                second: 59,
                millisecond: 0,
                valid: true,
            }
        );

        let time = parse_time("000000.001").unwrap();
        assert_eq!((time.hour, time.minute, time.second), (0, 0, 0));
        assert_eq!(time.millisecond, 1);

        let time = parse_time("092725.45").unwrap();
        assert_eq!((time.hour, time.minute, time.second), (9, 27, 25));
        assert_eq!(time.millisecond, 450);
    }

    #[test]
    fn test_parse_time_errors() {
        assert_eq!(parse_time(""), Err(Error::NoData));

        for field in ["246000", "236000", "235960", "-10000", "12h519", "999999"] {
            assert_eq!(parse_time(field), Err(Error::ParseFailed), "{field:?}");
        }
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("010100").unwrap();
        assert_eq!(
            date,
            Date {
                day: 1,
                month: 1,
                year: 2000,
                valid: true,
            }
        );

        let date = parse_date("311299").unwrap();
        assert_eq!((date.day, date.month, date.year), (31, 12, 2099));

        // no calendar check
        let date = parse_date("310224").unwrap();
        assert_eq!((date.day, date.month, date.year), (31, 2, 2024));
    }

    #[test]
    fn test_parse_date_errors() {
        assert_eq!(parse_date(""), Err(Error::NoData));

        for field in ["000124", "320124", "010024", "011324", "-10124", "01.0124", "1234567"] {
            assert_eq!(parse_date(field), Err(Error::ParseFailed), "{field:?}");
        }
    }

    #[cfg(feature = "time")]
    #[test]
    fn test_time_conversions() {
        let converted = parse_time("123519.5").unwrap().to_time().unwrap();
        assert_eq!(converted.hour(), 12);
        assert_eq!(converted.millisecond(), 500);
        assert_eq!(TimeOfDay::default().to_time(), None);

        let converted = parse_date("230324").unwrap().to_date().unwrap();
        assert_eq!(converted.month(), time::Month::March);
        assert_eq!(parse_date("310224").unwrap().to_date(), None);
    }
}
