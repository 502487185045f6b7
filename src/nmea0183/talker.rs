//! # Talker and Sentence Identifiers
//!
//! The first field of every sentence combines a talker code, naming the kind of device
//! that sent it, with a three character sentence type.

use crate::Error;

macro_rules! talker_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $code:literal => $variant:ident
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
            /// P - Proprietary sentence
            Proprietary,
            /// Any code not in the table
            Unknown,
        }

        impl $name {
            /// Every standard talker code, in table order.
            pub const CODES: &'static [&'static str] = &[$($code),*];

            /// Looks up a talker code.
            ///
            /// `"P"` maps to [`Self::Proprietary`]; anything that is not one of the
            /// standard two character codes maps to [`Self::Unknown`].
            pub fn from_code(code: &str) -> Self {
                match code {
                    $($code => Self::$variant,)*
                    "P" => Self::Proprietary,
                    _ => Self::Unknown,
                }
            }

            /// The wire code of this talker, empty for [`Self::Unknown`].
            pub fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)*
                    Self::Proprietary => "P",
                    Self::Unknown => "",
                }
            }
        }
    };
}

talker_ids! {
    /// Talker identifier
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_talker_ids>
    pub enum Talker {
        /// GP - Global Positioning System (GPS)
        "GP" => Gps,
        /// GL - GLONASS
        "GL" => Glonass,
        /// GA - Galileo
        "GA" => Galileo,
        /// GB - BeiDou
        "GB" => Beidou,
        /// GN - Combined GNSS
        "GN" => Gnss,
        /// GI - NavIC
        "GI" => Navic,
        /// GQ - QZSS
        "GQ" => Qzss,
        /// BD - BeiDou (legacy)
        "BD" => BeidouLegacy,
        /// II - Integrated Instrumentation
        "II" => IntegratedInstrumentation,
        /// IN - Integrated Navigation
        "IN" => IntegratedNavigation,
        /// HE - Heading, North seeking gyro
        "HE" => NorthSeekingGyro,
        /// HC - Heading, magnetic compass
        "HC" => MagneticCompass,
        /// HN - Heading, non north seeking gyro
        "HN" => NonNorthSeekingGyro,
        /// AI - Mobile AIS station
        "AI" => MobileAis,
        /// AB - Independent AIS base station
        "AB" => AisBaseStation,
        /// AD - Dependent AIS base station
        "AD" => DependentAisBaseStation,
        /// AN - AIS aid to navigation
        "AN" => AisAidToNavigation,
        /// AR - AIS receiving station
        "AR" => AisReceivingStation,
        /// AS - AIS limited base station
        "AS" => AisLimitedBaseStation,
        /// AT - AIS transmitting station
        "AT" => AisTransmittingStation,
        /// AX - AIS simplex repeater
        "AX" => AisSimplexRepeater,
        /// CD - Digital selective calling
        "CD" => DigitalSelectiveCalling,
        /// CS - Satellite communications
        "CS" => SatelliteCommunications,
        /// EC - Electronic chart system
        "EC" => ElectronicChartSystem,
        /// EI - Electronic chart display and information system
        "EI" => Ecdis,
        /// ER - Engine room monitoring
        "ER" => EngineRoom,
        /// LC - Loran-C
        "LC" => LoranC,
        /// RA - Radar and/or radar plotting
        "RA" => Radar,
        /// SD - Depth sounder
        "SD" => DepthSounder,
        /// SN - Electronic positioning system
        "SN" => ElectronicPositioning,
        /// SS - Scanning sounder
        "SS" => ScanningSounder,
        /// TI - Turn rate indicator
        "TI" => TurnRateIndicator,
        /// VD - Doppler velocity sensor
        "VD" => DopplerVelocity,
        /// VW - Mechanical speed log
        "VW" => SpeedLog,
        /// WI - Weather instruments
        "WI" => WeatherInstruments,
        /// YX - Transducer
        "YX" => Transducer,
    }
}

impl Talker {
    pub fn is_known(&self) -> bool {
        *self != Talker::Unknown
    }
}

/// A sentence identifier split into its talker code and sentence type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceId<'a> {
    /// Talker code, two characters, or `"P"` for proprietary sentences
    pub talker: &'a str,
    /// Three character sentence type
    pub sentence_type: &'a str,
}

impl SentenceId<'_> {
    /// Validates the talker code against the talker table.
    pub fn talker_id(&self) -> Talker {
        Talker::from_code(self.talker)
    }
}

/// Splits a sentence identifier into talker code and sentence type.
///
/// - Five characters: two character talker, three character type (`GPGGA`).
/// - `P` followed by at least three characters: talker `P`, the next three characters
///   are the type (`PGRMZ` is tried as a five character identifier first).
/// - Six characters: two character talker and the next three characters. The sixth
///   character is dropped.
///
/// # Errors
///
/// Returns [`Error::InvalidSentence`] for any other length.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Talker, split_sentence_id};
///
/// let id = split_sentence_id("GPGGA").unwrap();
/// assert_eq!(id.talker, "GP");
/// assert_eq!(id.sentence_type, "GGA");
/// assert_eq!(id.talker_id(), Talker::Gps);
///
/// let id = split_sentence_id("PSRFX1").unwrap();
/// assert_eq!(id.talker_id(), Talker::Proprietary);
/// assert_eq!(id.sentence_type, "SRF");
/// ```
pub fn split_sentence_id(id: &str) -> Result<SentenceId<'_>, Error> {
    if !id.is_ascii() {
        return Err(Error::InvalidSentence);
    }

    let (talker, sentence_type) = match id.len() {
        5 => (&id[..2], &id[2..5]),
        len if len >= 4 && id.starts_with('P') => (&id[..1], &id[1..4]),
        6 => (&id[..2], &id[2..5]),
        _ => return Err(Error::InvalidSentence),
    };

    Ok(SentenceId {
        talker,
        sentence_type,
    })
}
