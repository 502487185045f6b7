//! # Error Types
//!
//! This module defines the result codes returned by every decoding operation and the
//! report handed to the optional error callback.

use thiserror::Error;

/// Represents all possible errors that can occur while decoding NMEA 0183 sentences.
///
/// Every protocol-level failure is both returned to the caller and, when a callback is
/// configured, reported through it (see [`ErrorReport`]). State errors caused by using a
/// context the wrong way ([`Error::NotInit`]) are only returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The context was initialized twice without an intervening cleanup.
    #[error("context is already initialized")]
    AlreadyInit,

    /// A sentence was parsed with a context that was never initialized.
    #[error("context is not initialized")]
    NotInit,

    /// Module state was requested from a context that was never initialized.
    #[error("context was never initialized")]
    InvalidContext,

    /// The scratch buffer is smaller than [`MAX_SENTENCE_LEN`](crate::MAX_SENTENCE_LEN).
    #[error("scratch buffer is smaller than the maximum sentence length")]
    BufferTooSmall,

    /// The sentence framing, length or identifier is malformed.
    #[error("invalid sentence")]
    InvalidSentence,

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the checksum calculated from the sentence body and the checksum
    /// found after the `*` delimiter.
    #[error("checksum mismatch: calculated {expected:02X}, found {found:02X}")]
    ChecksumFailed {
        /// The checksum calculated from the sentence body
        expected: u8,
        /// The checksum found in the sentence
        found: u8,
    },

    /// The sentence has more comma separated fields than [`MAX_FIELDS`](crate::MAX_FIELDS).
    #[error("too many fields")]
    TooManyFields,

    /// The sentence has fewer fields than its decoder requires.
    #[error("too few fields: {found} present, {required} required")]
    TooFewFields {
        /// Minimum token count of the dispatch entry, sentence identifier included
        required: usize,
        /// Token count of the sentence
        found: usize,
    },

    /// The module owning the sentence type is disabled or not compiled in.
    #[error("module disabled")]
    ModuleDisabled,

    /// The sentence type has no entry in the dispatch table.
    #[error("unknown sentence type")]
    UnknownSentence,

    /// A field that had to be decoded was empty.
    #[error("no data in field")]
    NoData,

    /// A field was present but could not be decoded.
    #[error("field could not be parsed")]
    ParseFailed,
}

impl Error {
    /// Returns the category this error is reported under by default.
    ///
    /// Decoder failures are always reported as [`ErrorCategory::Semantic`] regardless of
    /// the code they carry.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::AlreadyInit | Error::NotInit | Error::InvalidContext => ErrorCategory::State,
            Error::BufferTooSmall => ErrorCategory::Buffer,
            Error::InvalidSentence
            | Error::TooManyFields
            | Error::TooFewFields { .. }
            | Error::UnknownSentence => ErrorCategory::Syntax,
            Error::ChecksumFailed { .. } => ErrorCategory::Checksum,
            Error::ModuleDisabled => ErrorCategory::Config,
            Error::NoData | Error::ParseFailed => ErrorCategory::Semantic,
        }
    }
}

/// Broad classification of a reported error.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed arguments
    Parameter,
    /// Checksum mismatch
    Checksum,
    /// Malformed framing, talker, or field count
    Syntax,
    /// A decoder rejected well-formed field content
    Semantic,
    /// Undersized scratch space
    Buffer,
    /// Disabled module
    Config,
    /// Wrong context lifecycle
    State,
    /// Anything else
    Unknown,
}

impl core::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ErrorCategory::Parameter => "parameter",
            ErrorCategory::Checksum => "checksum",
            ErrorCategory::Syntax => "syntax",
            ErrorCategory::Semantic => "semantic",
            ErrorCategory::Buffer => "buffer",
            ErrorCategory::Config => "config",
            ErrorCategory::State => "state",
            ErrorCategory::Unknown => "unknown",
        };

        f.write_str(name)
    }
}

/// A single failure as seen by the error callback.
///
/// The report is advisory: whatever the callback does with it, the parse call returns
/// the same [`Error`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorReport<'a> {
    /// Category the failure is reported under
    pub category: ErrorCategory,
    /// The result code returned to the caller
    pub error: Error,
    /// Optional human readable description
    pub message: Option<&'a str>,
}

/// Callback invoked for every reported failure.
///
/// Any user data the callback needs is captured by the closure.
pub type ErrorCallback = Box<dyn FnMut(&ErrorReport<'_>) + Send>;
