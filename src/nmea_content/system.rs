//! # System
//!
//! Time and date, and equipment heartbeat.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Tokens,
    nmea_content::{ModuleStates, Status, float, int, time, update, update_opt},
    parsing::{Date, TimeOfDay, optional},
};

/// System state
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SystemState {
    pub utc_time: TimeOfDay,
    /// UTC date with a four digit year
    pub date: Date,
    /// Local zone offset from UTC, hours (-13 to 13)
    pub local_zone_hours: Option<i8>,
    /// Local zone minutes, same sign as the hours
    pub local_zone_minutes: Option<i8>,
    /// Heartbeat repetition interval in seconds
    pub heartbeat_interval: Option<f64>,
    /// Equipment status: normal ([`Status::Valid`]) or alarm
    pub equipment_status: Option<Status>,
    pub heartbeat_id: Option<u8>,
}

/// Builds a date from separate day, month and four digit year fields.
fn zda_date(tokens: &Tokens<'_>) -> Result<Option<Date>, Error> {
    let day: Option<u8> = int(tokens, 2)?;
    let month: Option<u8> = int(tokens, 3)?;
    let year: Option<u16> = int(tokens, 4)?;

    let (Some(day), Some(month), Some(year)) = (day, month, year) else {
        return Ok(None);
    };

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return Err(Error::ParseFailed);
    }

    Ok(Some(Date {
        day,
        month,
        year,
        valid: true,
    }))
}

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
pub(crate) fn decode_zda(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let utc_time = time(tokens, 1)?;
    let date = zda_date(tokens)?;
    let zone_hours: Option<i8> = int(tokens, 5)?;
    let zone_minutes: Option<i8> = int(tokens, 6)?;

    if zone_hours.is_some_and(|h| !(-13..=13).contains(&h)) {
        return Err(Error::ParseFailed);
    }
    if zone_minutes.is_some_and(|m| !(0..=59).contains(&m)) {
        return Err(Error::ParseFailed);
    }

    let zone_minutes = zone_minutes.map(|m| match zone_hours {
        Some(h) if h < 0 => -m,
        _ => m,
    });

    let system = &mut states.system;
    update(&mut system.utc_time, utc_time);
    update(&mut system.date, date);
    update_opt(&mut system.local_zone_hours, zone_hours);
    update_opt(&mut system.local_zone_minutes, zone_minutes);

    Ok(())
}

/// HBT - Heartbeat Supervision Sentence
///
/// ```text
///         1   2 3
///         |   | |
///  $--HBT,x.x,A,x*hh<CR><LF>
/// ```
pub(crate) fn decode_hbt(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let interval = float(tokens, 1)?;
    let status = optional(Status::parse(tokens.field(2)))?;
    let id = int(tokens, 3)?;

    let system = &mut states.system;
    update_opt(&mut system.heartbeat_interval, interval);
    update_opt(&mut system.equipment_status, status);
    update_opt(&mut system.heartbeat_id, id);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmea_content::test_util::decode;

    #[test]
    fn test_zda() {
        let mut states = ModuleStates::default();

        decode(decode_zda, &mut states, "$GPZDA,201530.00,04,07,2002,-03,30").unwrap();

        let system = &states.system;
        assert_eq!(
            (system.utc_time.hour, system.utc_time.minute, system.utc_time.second),
            (20, 15, 30)
        );
        assert_eq!(
            system.date,
            Date {
                day: 4,
                month: 7,
                year: 2002,
                valid: true,
            }
        );
        assert_eq!(system.local_zone_hours, Some(-3));
        assert_eq!(system.local_zone_minutes, Some(-30));
    }

    #[test]
    fn test_zda_partial_and_invalid() {
        let mut states = ModuleStates::default();

        decode(decode_zda, &mut states, "$GPZDA,201530.00,,07,2002,,").unwrap();
        assert!(states.system.utc_time.valid);
        assert!(!states.system.date.valid);
        assert_eq!(states.system.local_zone_hours, None);

        for sentence in [
            "$GPZDA,201530.00,32,07,2002,00,00",
            "$GPZDA,201530.00,04,13,2002,00,00",
            "$GPZDA,201530.00,04,07,2002,14,00",
            "$GPZDA,201530.00,04,07,2002,00,60",
        ] {
            assert_eq!(
                decode(decode_zda, &mut states, sentence),
                Err(Error::ParseFailed),
                "{sentence}"
            );
        }
    }

    #[test]
    fn test_hbt() {
        let mut states = ModuleStates::default();

        decode(decode_hbt, &mut states, "$IIHBT,30.0,A,7").unwrap();

        let system = &states.system;
        assert_eq!(system.heartbeat_interval, Some(30.0));
        assert_eq!(system.equipment_status, Some(Status::Valid));
        assert_eq!(system.heartbeat_id, Some(7));
    }
}
