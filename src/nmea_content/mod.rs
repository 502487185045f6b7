//! # Sentence Content
//!
//! Per-module state structures and the per-sentence decoders that fill them.
//!
//! Every decoder has the same shape: it receives the module states of a context and the
//! tokenized sentence, parses every field it knows with the primitives of
//! [`parsing`](crate::parsing), and only then writes the parsed values into its module
//! state. A sentence that fails to decode leaves the state untouched, and an empty field
//! never clears a value set by an earlier sentence.

use crate::{
    Error, Tokens,
    parsing::{
        Coordinate, Date, TimeOfDay, optional, parse_char, parse_coordinate, parse_date,
        parse_float, parse_int_as, parse_time,
    },
};

#[cfg(feature = "ais")]
pub mod ais;
#[cfg(feature = "attitude")]
pub mod attitude;
#[cfg(feature = "comm")]
pub mod comm;
#[cfg(feature = "gnss")]
pub mod gnss;
#[cfg(feature = "heading")]
pub mod heading;
#[cfg(feature = "misc")]
pub mod misc;
#[cfg(feature = "navigation")]
pub mod navigation;
#[cfg(feature = "radar")]
pub mod radar;
#[cfg(feature = "safety")]
pub mod safety;
#[cfg(feature = "sensor")]
pub mod sensor;
#[cfg(feature = "system")]
pub mod system;
#[cfg(feature = "waypoint")]
pub mod waypoint;

/// Capacity of free text fields (alarm descriptions, text transmissions).
pub const TEXT_CAPACITY: usize = 96;

/// Capacity of waypoint, target and transducer identifiers.
pub const ID_CAPACITY: usize = 16;

/// Fixed capacity text, stored inline in the module state.
pub type Text<const N: usize> = heapless::String<N>;

/// The state of every compiled-in module of a context.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ModuleStates {
    #[cfg(feature = "gnss")]
    pub gnss: gnss::GnssState,
    #[cfg(feature = "ais")]
    pub ais: ais::AisState,
    #[cfg(feature = "navigation")]
    pub navigation: navigation::NavigationState,
    #[cfg(feature = "waypoint")]
    pub waypoint: waypoint::WaypointState,
    #[cfg(feature = "heading")]
    pub heading: heading::HeadingState,
    #[cfg(feature = "sensor")]
    pub sensor: sensor::SensorState,
    #[cfg(feature = "radar")]
    pub radar: radar::RadarState,
    #[cfg(feature = "safety")]
    pub safety: safety::SafetyState,
    #[cfg(feature = "comm")]
    pub comm: comm::CommState,
    #[cfg(feature = "system")]
    pub system: system::SystemState,
    #[cfg(feature = "attitude")]
    pub attitude: attitude::AttitudeState,
    #[cfg(feature = "misc")]
    pub misc: misc::MiscState,
}

macro_rules! char_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Parses a single character field.
            pub fn parse(field: &str) -> Result<Self, $crate::Error> {
                match $crate::parsing::parse_char(field)? {
                    $($char => Ok(Self::$variant),)*
                    _ => Err($crate::Error::ParseFailed),
                }
            }

            /// The wire character of this value.
            pub fn as_char(&self) -> char {
                match self {
                    $(Self::$variant => $char,)*
                }
            }
        }
    };
}

pub(crate) use char_enum;

char_enum! {
    /// Data status
    pub enum Status {
        /// A - Valid / active
        'A' => Valid,
        /// V - Invalid / void
        'V' => Invalid,
    }
}

char_enum! {
    /// FAA mode indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// C - Quectel Querk, "Caution"
        'C' => Caution,
        /// D - Differential Mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// F - RTK Float mode
        'F' => FloatRtk,
        /// M - Manual Input Mode
        'M' => Manual,
        /// N - Data Not Valid
        'N' => DataNotValid,
        /// P - Precise
        'P' => Precise,
        /// R - RTK Integer mode
        'R' => FixedRtk,
        /// S - Simulated Mode
        'S' => Simulator,
        /// U - Quectel Querk, "Unsafe"
        'U' => Unsafe,
    }
}

char_enum! {
    /// Direction to steer
    pub enum Steer {
        /// L - Left
        'L' => Left,
        /// R - Right
        'R' => Right,
    }
}

char_enum! {
    /// Reference of a bearing or heading
    pub enum Reference {
        /// T - True
        'T' => True,
        /// M - Magnetic
        'M' => Magnetic,
        /// R - Relative
        'R' => Relative,
    }
}

/// Overwrites `slot` only when a value was decoded.
pub(crate) fn update<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Overwrites an optional field only when a value was decoded.
pub(crate) fn update_opt<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

pub(crate) fn float(tokens: &Tokens<'_>, index: usize) -> Result<Option<f64>, Error> {
    optional(parse_float(tokens.field(index)))
}

pub(crate) fn int<T: TryFrom<i64>>(tokens: &Tokens<'_>, index: usize) -> Result<Option<T>, Error> {
    optional(parse_int_as(tokens.field(index)))
}

pub(crate) fn character(tokens: &Tokens<'_>, index: usize) -> Result<Option<char>, Error> {
    optional(parse_char(tokens.field(index)))
}

/// Coordinate value at `index`, hemisphere at `index + 1`.
pub(crate) fn coordinate(tokens: &Tokens<'_>, index: usize) -> Result<Option<Coordinate>, Error> {
    optional(parse_coordinate(
        tokens.field(index),
        tokens.field(index + 1),
    ))
}

pub(crate) fn time(tokens: &Tokens<'_>, index: usize) -> Result<Option<TimeOfDay>, Error> {
    optional(parse_time(tokens.field(index)))
}

pub(crate) fn date(tokens: &Tokens<'_>, index: usize) -> Result<Option<Date>, Error> {
    optional(parse_date(tokens.field(index)))
}

/// Text field; fails with [`Error::ParseFailed`] when it does not fit in `N` bytes.
pub(crate) fn text<const N: usize>(
    tokens: &Tokens<'_>,
    index: usize,
) -> Result<Option<Text<N>>, Error> {
    let field = tokens.field(index);
    if field.is_empty() {
        return Ok(None);
    }

    let mut text = Text::new();
    text.push_str(field).map_err(|_| Error::ParseFailed)?;
    Ok(Some(text))
}

/// A value followed by a direction letter; `negative` negates it.
///
/// Used for magnetic variation (`W` negative) and similar signed fields.
pub(crate) fn signed(
    tokens: &Tokens<'_>,
    index: usize,
    negative: char,
) -> Result<Option<f64>, Error> {
    let Some(value) = float(tokens, index)? else {
        return Ok(None);
    };

    match character(tokens, index + 1)? {
        Some(direction) if direction.eq_ignore_ascii_case(&negative) => Ok(Some(-value)),
        _ => Ok(Some(value)),
    }
}


#[cfg(test)]
mod tests {
    use super::{test_util::tokens, *};

    #[test]
    fn test_status() {
        assert_eq!(Status::parse("A"), Ok(Status::Valid));
        assert_eq!(Status::parse("V"), Ok(Status::Invalid));
        assert_eq!(Status::parse("K"), Err(Error::ParseFailed));
        assert_eq!(Status::parse(""), Err(Error::NoData));
        assert_eq!(Status::Valid.as_char(), 'A');
    }

    #[test]
    fn test_faa_mode() {
        for (c, mode) in [
            ("A", FaaMode::Autonomous),
            ("D", FaaMode::Differential),
            ("E", FaaMode::Estimated),
            ("F", FaaMode::FloatRtk),
            ("N", FaaMode::DataNotValid),
            ("R", FaaMode::FixedRtk),
        ] {
            assert_eq!(FaaMode::parse(c), Ok(mode));
        }

        assert_eq!(FaaMode::parse("X"), Err(Error::ParseFailed));
    }

    #[test]
    fn test_update_is_monotonic() {
        let mut value = Some(1.5);
        update_opt(&mut value, None);
        assert_eq!(value, Some(1.5));
        update_opt(&mut value, Some(2.5));
        assert_eq!(value, Some(2.5));

        let mut coordinate = Coordinate::default();
        update(&mut coordinate, None);
        assert!(!coordinate.valid);
    }

    #[test]
    fn test_signed_and_text() {
        let mut buffer = Vec::new();
        let t = tokens(&mut buffer, "$GPRMC,004.2,W,004.2,E,,W,NAME,12345678901234567");

        assert_eq!(signed(&t, 1, 'W'), Ok(Some(-4.2)));
        assert_eq!(signed(&t, 3, 'W'), Ok(Some(4.2)));
        assert_eq!(signed(&t, 5, 'W'), Ok(None));
        assert_eq!(
            text::<ID_CAPACITY>(&t, 7).map(|t| t.map(|t| t.len())),
            Ok(Some(4))
        );
        assert_eq!(text::<ID_CAPACITY>(&t, 8), Err(Error::ParseFailed));
        assert_eq!(text::<ID_CAPACITY>(&t, 9), Ok(None));
    }
}
