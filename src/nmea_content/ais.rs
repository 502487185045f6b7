//! # AIS
//!
//! Encapsulated AIS radio messages (`!AIVDM` / `!AIVDO`). The six-bit payload is kept
//! armored; decoding the AIS message itself is left to the caller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Tokens,
    nmea_content::{ModuleStates, Text, character, int, text},
};

/// Capacity of the armored payload of one AIS sentence.
pub const AIS_PAYLOAD_CAPACITY: usize = 120;

/// One fragment of an AIS radio message
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AisMessage {
    pub total_sentences: u8,
    pub sentence_number: u8,
    /// Links the fragments of a multi-sentence message
    pub sequential_id: Option<u8>,
    /// Radio channel, `A` or `B`
    pub channel: Option<char>,
    pub payload: Text<AIS_PAYLOAD_CAPACITY>,
    /// Number of padding bits in the last six-bit character
    pub fill_bits: u8,
    pub valid: bool,
}

/// AIS state
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AisState {
    /// Last message received from other vessels
    pub vdm: AisMessage,
    /// Last message about our own vessel
    pub vdo: AisMessage,
}

/// VDM/VDO - AIS VHF Data-Link Message
///
/// ```text
///         1 2 3 4 5    6
///         | | | | |    |
///  !--VDM,x,x,x,a,s--s,x*hh<CR><LF>
/// ```
///
/// The message is replaced as a whole; fragments are not reassembled.
fn decode_message(tokens: &Tokens<'_>) -> Result<AisMessage, Error> {
    let total_sentences: u8 = int(tokens, 1)?.ok_or(Error::NoData)?;
    let sentence_number: u8 = int(tokens, 2)?.ok_or(Error::NoData)?;
    if total_sentences == 0 || sentence_number == 0 || sentence_number > total_sentences {
        return Err(Error::ParseFailed);
    }

    let sequential_id = int(tokens, 3)?;
    let channel = character(tokens, 4)?;
    let payload = text(tokens, 5)?.ok_or(Error::NoData)?;
    let fill_bits = int(tokens, 6)?.unwrap_or(0);
    if fill_bits > 5 {
        return Err(Error::ParseFailed);
    }

    Ok(AisMessage {
        total_sentences,
        sentence_number,
        sequential_id,
        channel,
        payload,
        fill_bits,
        valid: true,
    })
}

pub(crate) fn decode_vdm(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    states.ais.vdm = decode_message(tokens)?;
    Ok(())
}

pub(crate) fn decode_vdo(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    states.ais.vdo = decode_message(tokens)?;
    Ok(())
}
