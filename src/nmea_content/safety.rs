//! # Safety
//!
//! Alarm states and acknowledgements.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Tokens,
    nmea_content::{ModuleStates, Status, TEXT_CAPACITY, Text, int, text, time, update, update_opt},
    parsing::{TimeOfDay, optional},
};

/// Number of alarms kept.
pub const MAX_ALARMS: usize = 16;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Alarm {
    pub id: u16,
    /// Time of the last change of the alarm condition
    pub time: TimeOfDay,
    /// Threshold exceeded
    pub active: Option<bool>,
    pub acknowledged: Option<bool>,
    pub description: Option<Text<TEXT_CAPACITY>>,
}

/// Safety state
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SafetyState {
    pub alarms: heapless::Vec<Alarm, MAX_ALARMS>,
}

impl SafetyState {
    pub fn alarm(&self, id: u16) -> Option<&Alarm> {
        self.alarms.iter().find(|a| a.id == id)
    }
}

/// ALR - Set Alarm State
///
/// ```text
///         1         2   3 4 5
///         |         |   | | |
///  $--ALR,hhmmss.ss,xxx,A,A,c--c*hh<CR><LF>
/// ```
///
/// New alarms are dropped once [`MAX_ALARMS`] are known.
pub(crate) fn decode_alr(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let utc_time = time(tokens, 1)?;
    let id = int(tokens, 2)?.ok_or(Error::NoData)?;
    let active = optional(Status::parse(tokens.field(3)))?;
    let acknowledged = optional(Status::parse(tokens.field(4)))?;
    let description = text(tokens, 5)?;

    let alarms = &mut states.safety.alarms;
    let alarm = match alarms.iter().position(|a| a.id == id) {
        Some(index) => &mut alarms[index],
        None => {
            if alarms
                .push(Alarm {
                    id,
                    ..Default::default()
                })
                .is_err()
            {
                log::debug!("alarm table full, dropping alarm {id}");
                return Ok(());
            }

            let last = alarms.len() - 1;
            &mut alarms[last]
        }
    };

    update(&mut alarm.time, utc_time);
    update_opt(&mut alarm.active, active.map(|s| s == Status::Valid));
    update_opt(&mut alarm.acknowledged, acknowledged.map(|s| s == Status::Valid));
    update_opt(&mut alarm.description, description);

    Ok(())
}

/// ACK - Acknowledge Alarm
///
/// ```text
///         1
///         |
///  $--ACK,xxx*hh<CR><LF>
/// ```
///
/// Acknowledging an unknown alarm is not an error.
pub(crate) fn decode_ack(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let id: u16 = int(tokens, 1)?.ok_or(Error::NoData)?;

    if let Some(alarm) = states.safety.alarms.iter_mut().find(|a| a.id == id) {
        alarm.acknowledged = Some(true);
    }

    Ok(())
}
