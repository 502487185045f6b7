//! # Communication

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Tokens,
    nmea_content::{ModuleStates, TEXT_CAPACITY, Text, int, text, update_opt},
};

/// Communication state
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommState {
    pub total_sentences: Option<u8>,
    pub sentence_number: Option<u8>,
    pub text_id: Option<u8>,
    /// Last text message
    pub message: Option<Text<TEXT_CAPACITY>>,
}

/// TXT - Text Transmission
///
/// ```text
///         1  2  3  4
///         |  |  |  |
///  $--TXT,xx,xx,xx,c--c*hh<CR><LF>
/// ```
pub(crate) fn decode_txt(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let total_sentences = int(tokens, 1)?;
    let sentence_number = int(tokens, 2)?;
    let text_id = int(tokens, 3)?;
    let message = text(tokens, 4)?;

    let comm = &mut states.comm;
    update_opt(&mut comm.total_sentences, total_sentences);
    update_opt(&mut comm.sentence_number, sentence_number);
    update_opt(&mut comm.text_id, text_id);
    update_opt(&mut comm.message, message);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmea_content::test_util::decode;

    #[test]
    fn test_txt() {
        let mut states = ModuleStates::default();

        decode(decode_txt, &mut states, "$GPTXT,01,01,02,ANTSTATUS=OK").unwrap();

        let comm = &states.comm;
        assert_eq!(comm.total_sentences, Some(1));
        assert_eq!(comm.sentence_number, Some(1));
        assert_eq!(comm.text_id, Some(2));
        assert_eq!(comm.message.as_deref(), Some("ANTSTATUS=OK"));

        assert_eq!(
            decode(decode_txt, &mut states, "$GPTXT,01,01,XX,ANTSTATUS=OPEN"),
            Err(Error::ParseFailed)
        );
        assert_eq!(states.comm.message.as_deref(), Some("ANTSTATUS=OK"));
    }
}
