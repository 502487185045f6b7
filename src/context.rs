//! # Parser Context
//!
//! [`Nmea0183Context`] ties the framing layer, the dispatch table and the module states
//! together. A context is created empty, initialized once with a [`ParserConfig`], fed
//! sentences with [`Nmea0183Context::parse`], and reset with
//! [`Nmea0183Context::cleanup`].

use core::fmt;

#[cfg(feature = "ais")]
use crate::nmea_content::ais::AisState;
#[cfg(feature = "attitude")]
use crate::nmea_content::attitude::AttitudeState;
#[cfg(feature = "comm")]
use crate::nmea_content::comm::CommState;
#[cfg(feature = "gnss")]
use crate::nmea_content::gnss::GnssState;
#[cfg(feature = "heading")]
use crate::nmea_content::heading::HeadingState;
#[cfg(feature = "misc")]
use crate::nmea_content::misc::MiscState;
#[cfg(feature = "navigation")]
use crate::nmea_content::navigation::NavigationState;
#[cfg(feature = "radar")]
use crate::nmea_content::radar::RadarState;
#[cfg(feature = "safety")]
use crate::nmea_content::safety::SafetyState;
#[cfg(feature = "sensor")]
use crate::nmea_content::sensor::SensorState;
#[cfg(feature = "system")]
use crate::nmea_content::system::SystemState;
#[cfg(feature = "waypoint")]
use crate::nmea_content::waypoint::WaypointState;
use crate::{
    Error, ErrorCallback, ErrorCategory, ErrorReport, MAX_SENTENCE_LEN, Module, ModuleSet,
    Talker, lookup,
    nmea0183::{checksum, talker::split_sentence_id, tokenizer::tokenize},
    nmea_content::ModuleStates,
};

/// Configuration of a [`Nmea0183Context`].
///
/// Built with the builder pattern. The defaults are:
/// - every compiled-in module enabled
/// - checksum validation on
/// - no error callback
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Module, ModuleSet, ParserConfig};
///
/// let config = ParserConfig::new()
///     .enabled_modules(ModuleSet::EMPTY | Module::Gnss | Module::Heading)
///     .validate_checksums(false)
///     .error_callback(|report| eprintln!("{}: {}", report.category, report.error));
///
/// assert!(!config.validates_checksums());
/// assert!(config.modules().contains(Module::Heading));
/// ```
#[must_use]
pub struct ParserConfig {
    enabled_modules: ModuleSet,
    validate_checksums: bool,
    error_callback: Option<ErrorCallback>,
}

impl ParserConfig {
    pub fn new() -> Self {
        ParserConfig {
            enabled_modules: ModuleSet::ALL,
            validate_checksums: true,
            error_callback: None,
        }
    }

    /// Sets the modules whose sentences are decoded.
    ///
    /// Modules that are not compiled in stay disabled whatever the set contains.
    pub fn enabled_modules(mut self, modules: ModuleSet) -> Self {
        self.enabled_modules = modules;
        self
    }

    /// Turns checksum validation on or off.
    ///
    /// Sentences without a `*hh` suffix are accepted either way.
    pub fn validate_checksums(mut self, validate: bool) -> Self {
        self.validate_checksums = validate;
        self
    }

    /// Sets the callback invoked for every reported failure.
    ///
    /// The callback cannot change the outcome of a parse call. Any user data it needs is
    /// captured by the closure.
    pub fn error_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ErrorReport<'_>) + Send + 'static,
    {
        self.error_callback = Some(Box::new(callback));
        self
    }

    pub fn modules(&self) -> ModuleSet {
        self.enabled_modules
    }

    pub fn validates_checksums(&self) -> bool {
        self.validate_checksums
    }

    pub fn has_error_callback(&self) -> bool {
        self.error_callback.is_some()
    }

    /// A module is enabled when it is compiled in and part of the configured set.
    pub fn is_module_enabled(&self, module: Module) -> bool {
        module.is_compiled() && self.enabled_modules.contains(module)
    }

    fn report(&mut self, category: ErrorCategory, error: Error, message: Option<&str>) -> Error {
        match message {
            Some(message) => log::debug!("{category} error: {error} ({message})"),
            None => log::debug!("{category} error: {error}"),
        }

        if let Some(callback) = self.error_callback.as_mut() {
            callback(&ErrorReport {
                category,
                error,
                message,
            });
        }

        error
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig::new()
    }
}

impl fmt::Debug for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserConfig")
            .field("enabled_modules", &self.enabled_modules)
            .field("validate_checksums", &self.validate_checksums)
            .field("error_callback", &self.error_callback.is_some())
            .finish()
    }
}

/// A stateful NMEA 0183 decoder.
///
/// Every successful [`parse`](Self::parse) updates the state of the module owning the
/// sentence type; the `*_data` accessors return copies of that state.
///
/// Independent contexts share nothing but the immutable dispatch and talker tables.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{MAX_SENTENCE_LEN, Nmea0183Context, ParserConfig};
///
/// let mut context = Nmea0183Context::new();
/// context.init(ParserConfig::new()).unwrap();
///
/// let mut scratch = [0u8; MAX_SENTENCE_LEN];
/// context
///     .parse(
///         b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
///         &mut scratch,
///     )
///     .unwrap();
///
/// let gnss = context.gnss_data().unwrap();
/// assert_eq!(gnss.satellites_used, Some(8));
/// assert!((gnss.latitude.degrees - 48.1173).abs() < 1e-4);
/// ```
#[derive(Debug, Default)]
pub struct Nmea0183Context {
    config: Option<ParserConfig>,
    states: ModuleStates,
}

macro_rules! state_accessors {
    ($($feature:literal: $name:ident -> $state:ty, $field:ident;)*) => {
        impl Nmea0183Context {
            $(
                #[doc = concat!("Returns a copy of the ", $feature, " state.")]
                ///
                /// # Errors
                ///
                /// [`Error::InvalidContext`] if the context was never initialized.
                #[cfg(feature = $feature)]
                pub fn $name(&self) -> Result<$state, Error> {
                    if !self.is_initialized() {
                        return Err(Error::InvalidContext);
                    }

                    Ok(self.states.$field.clone())
                }
            )*
        }
    };
}

state_accessors! {
    "gnss": gnss_data -> GnssState, gnss;
    "ais": ais_data -> AisState, ais;
    "navigation": navigation_data -> NavigationState, navigation;
    "waypoint": waypoint_data -> WaypointState, waypoint;
    "heading": heading_data -> HeadingState, heading;
    "sensor": sensor_data -> SensorState, sensor;
    "radar": radar_data -> RadarState, radar;
    "safety": safety_data -> SafetyState, safety;
    "comm": comm_data -> CommState, comm;
    "system": system_data -> SystemState, system;
    "attitude": attitude_data -> AttitudeState, attitude;
    "misc": misc_data -> MiscState, misc;
}

impl Nmea0183Context {
    /// Creates an uninitialized context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes the context.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyInit`] if the context is already initialized. Call
    /// [`cleanup`](Self::cleanup) first to reuse it.
    pub fn init(&mut self, config: ParserConfig) -> Result<(), Error> {
        if self.config.is_some() {
            return Err(Error::AlreadyInit);
        }

        log::debug!(
            "initializing context: modules {:#05x}, checksum validation {}",
            config.enabled_modules.bits(),
            config.validate_checksums
        );

        self.states = ModuleStates::default();
        self.config = Some(config);
        Ok(())
    }

    /// Resets the context to its uninitialized state, clearing every module state.
    ///
    /// Safe to call on a context that is not initialized.
    pub fn cleanup(&mut self) {
        if self.config.is_some() {
            log::debug!("cleaning up context");
        }

        *self = Self::default();
    }

    pub fn is_initialized(&self) -> bool {
        self.config.is_some()
    }

    /// The configuration, [`None`] while the context is not initialized.
    pub fn config(&self) -> Option<&ParserConfig> {
        self.config.as_ref()
    }

    /// Decodes one sentence into the module states.
    ///
    /// `sentence` is the raw sentence, starting with `$` or `!`, with or without the `*hh`
    /// checksum and the trailing CRLF. It is copied into `scratch` and tokenized there;
    /// `scratch` holds the tokenized fields afterwards and must provide at least
    /// [`MAX_SENTENCE_LEN`] bytes.
    ///
    /// Every failure except [`Error::NotInit`] is also passed to the error callback.
    /// Decoder failures are reported under [`ErrorCategory::Semantic`]. A failed sentence
    /// leaves the module states untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::NotInit`] if the context is not initialized.
    /// - [`Error::BufferTooSmall`] if `scratch` is shorter than [`MAX_SENTENCE_LEN`].
    /// - [`Error::InvalidSentence`] if the sentence is empty or longer than
    ///   [`MAX_SENTENCE_LEN`], is not framed correctly, or has a malformed identifier or
    ///   unknown talker.
    /// - [`Error::ChecksumFailed`] if checksum validation is enabled and the checksum
    ///   does not match.
    /// - [`Error::TooManyFields`] if the sentence has more than
    ///   [`MAX_FIELDS`](crate::MAX_FIELDS) fields.
    /// - [`Error::UnknownSentence`] if the sentence type has no decoder.
    /// - [`Error::ModuleDisabled`] if the module owning the sentence type is disabled.
    /// - [`Error::TooFewFields`] if the sentence is shorter than its decoder requires.
    /// - [`Error::NoData`] or [`Error::ParseFailed`] if the decoder rejects a field.
    pub fn parse(&mut self, sentence: &[u8], scratch: &mut [u8]) -> Result<(), Error> {
        let Some(config) = self.config.as_mut() else {
            return Err(Error::NotInit);
        };

        if scratch.len() < MAX_SENTENCE_LEN {
            return Err(config.report(ErrorCategory::Buffer, Error::BufferTooSmall, None));
        }

        if sentence.is_empty() {
            return Err(config.report(
                ErrorCategory::Syntax,
                Error::InvalidSentence,
                Some("empty sentence"),
            ));
        }

        if sentence.len() > MAX_SENTENCE_LEN {
            return Err(config.report(
                ErrorCategory::Syntax,
                Error::InvalidSentence,
                Some("sentence too long"),
            ));
        }

        if config.validate_checksums
            && let Err(error) = checksum::verify(sentence)
        {
            return Err(config.report(error.category(), error, None));
        }

        let len = sentence.len();
        scratch[..len].copy_from_slice(sentence);
        if let Some(terminator) = scratch.get_mut(len) {
            *terminator = 0;
        }

        let tokens = match tokenize(&mut scratch[..len]) {
            Ok(tokens) => tokens,
            Err(error) => return Err(config.report(error.category(), error, None)),
        };

        if tokens.is_empty() {
            return Err(config.report(
                ErrorCategory::Syntax,
                Error::InvalidSentence,
                Some("no fields"),
            ));
        }

        let id = match split_sentence_id(tokens.sentence_id()) {
            Ok(id) => id,
            Err(error) => {
                return Err(config.report(
                    ErrorCategory::Syntax,
                    error,
                    Some(tokens.sentence_id()),
                ));
            }
        };

        if id.talker_id() == Talker::Unknown {
            return Err(config.report(
                ErrorCategory::Syntax,
                Error::InvalidSentence,
                Some(id.talker),
            ));
        }

        let Some(entry) = lookup(id.sentence_type) else {
            return Err(config.report(
                ErrorCategory::Syntax,
                Error::UnknownSentence,
                Some(id.sentence_type),
            ));
        };

        if !config.is_module_enabled(entry.module) {
            return Err(config.report(
                ErrorCategory::Config,
                Error::ModuleDisabled,
                Some(entry.module.name()),
            ));
        }

        if tokens.len() < entry.min_fields {
            let error = Error::TooFewFields {
                required: entry.min_fields,
                found: tokens.len(),
            };
            return Err(config.report(ErrorCategory::Syntax, error, Some(entry.sentence_type)));
        }

        if let Err(error) = (entry.decoder)(&mut self.states, &tokens) {
            return Err(config.report(ErrorCategory::Semantic, error, Some(entry.sentence_type)));
        }

        log::trace!("decoded {}{} ({})", id.talker, id.sentence_type, entry.module);
        Ok(())
    }

    /// Whether sentences with the given identifier (such as `"GPGGA"`) would be decoded.
    ///
    /// False for uninitialized contexts, malformed identifiers, unknown sentence types and
    /// disabled modules. The talker is not checked.
    pub fn is_sentence_enabled(&self, sentence_id: &str) -> bool {
        let Some(config) = self.config.as_ref() else {
            return false;
        };

        split_sentence_id(sentence_id)
            .ok()
            .and_then(|id| lookup(id.sentence_type))
            .is_some_and(|entry| config.is_module_enabled(entry.module))
    }

    /// Whether the module is compiled in and enabled. False for uninitialized contexts.
    pub fn is_module_enabled(&self, module: Module) -> bool {
        self.config
            .as_ref()
            .is_some_and(|config| config.is_module_enabled(module))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ParserConfig::default();

        assert_eq!(config.modules(), ModuleSet::ALL);
        assert!(config.validates_checksums());
        assert!(!config.has_error_callback());
        assert_eq!(
            format!("{config:?}"),
            "ParserConfig { enabled_modules: ModuleSet(4095), validate_checksums: true, error_callback: false }"
        );
    }

    #[test]
    fn test_config_builder() {
        let config = ParserConfig::new()
            .enabled_modules(ModuleSet::from(Module::Ais))
            .validate_checksums(false)
            .error_callback(|_| {});

        assert_eq!(
            config.is_module_enabled(Module::Ais),
            Module::Ais.is_compiled()
        );
        assert!(!config.is_module_enabled(Module::Gnss));
        assert!(!config.validates_checksums());
        assert!(config.has_error_callback());
    }

    #[test]
    fn test_lifecycle() {
        let mut context = Nmea0183Context::new();
        assert!(!context.is_initialized());
        assert!(context.config().is_none());

        context.init(ParserConfig::new()).unwrap();
        assert!(context.is_initialized());
        assert_eq!(context.init(ParserConfig::new()), Err(Error::AlreadyInit));

        context.cleanup();
        assert!(!context.is_initialized());
        context.cleanup();
        assert!(!context.is_initialized());

        context.init(ParserConfig::new()).unwrap();
        assert!(context.is_initialized());
    }

    #[cfg(feature = "gnss")]
    #[test]
    fn test_sentence_and_module_queries() {
        let mut context = Nmea0183Context::new();
        assert!(!context.is_sentence_enabled("GPGGA"));
        assert!(!context.is_module_enabled(Module::Gnss));

        context
            .init(ParserConfig::new().enabled_modules(ModuleSet::ALL.without(Module::Ais)))
            .unwrap();

        assert!(context.is_sentence_enabled("GPGGA"));
        assert!(context.is_sentence_enabled("GNRMC"));
        assert!(context.is_module_enabled(Module::Gnss));
        assert!(!context.is_module_enabled(Module::Ais));
        assert!(!context.is_sentence_enabled("AIVDM"));
        assert!(!context.is_sentence_enabled("GPXXX"));
        assert!(!context.is_sentence_enabled("GGA"));
    }
}
