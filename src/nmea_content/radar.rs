//! # Radar
//!
//! Tracked targets reported by a radar or ARPA.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Tokens,
    nmea_content::{
        ID_CAPACITY, ModuleStates, Reference, Text, char_enum, character, coordinate, float, int,
        text, time, update, update_opt,
    },
    parsing::{Coordinate, TimeOfDay, optional},
};

/// Number of targets kept.
pub const MAX_TARGETS: usize = 16;

char_enum! {
    /// Target status
    pub enum TargetStatus {
        /// L - Lost, tracked target has been lost
        'L' => Lost,
        /// Q - Query, target in the process of acquisition
        'Q' => Query,
        /// T - Tracking
        'T' => Tracking,
    }
}

char_enum! {
    /// Type of target acquisition
    pub enum Acquisition {
        /// A - Automatic
        'A' => Automatic,
        /// M - Manual
        'M' => Manual,
        /// R - Reported
        'R' => Reported,
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RadarTarget {
    pub number: u8,
    pub name: Option<Text<ID_CAPACITY>>,
    pub distance: Option<f64>,
    pub bearing: Option<f64>,
    pub bearing_reference: Option<Reference>,
    pub speed: Option<f64>,
    pub course: Option<f64>,
    pub course_reference: Option<Reference>,
    /// Distance of closest point of approach
    pub cpa_distance: Option<f64>,
    /// Time to closest point of approach in minutes, negative once passed
    pub tcpa_minutes: Option<f64>,
    /// Units of speed and distance: `K` (km, km/h), `N` (knots, nautical miles) or
    /// `S` (statute miles, mph)
    pub units: Option<char>,
    pub status: Option<TargetStatus>,
    pub reference_target: Option<bool>,
    pub time: TimeOfDay,
    pub acquisition: Option<Acquisition>,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
}

/// Radar state
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RadarState {
    /// Targets in order of first report; the oldest is dropped when the list is full
    pub targets: heapless::Vec<RadarTarget, MAX_TARGETS>,
}

impl RadarState {
    pub fn target(&self, number: u8) -> Option<&RadarTarget> {
        self.targets.iter().find(|t| t.number == number)
    }

    fn target_mut(&mut self, number: u8) -> &mut RadarTarget {
        let index = match self.targets.iter().position(|t| t.number == number) {
            Some(index) => index,
            None => {
                if self.targets.is_full() {
                    self.targets.remove(0);
                }

                let _ = self.targets.push(RadarTarget {
                    number,
                    ..Default::default()
                });
                self.targets.len() - 1
            }
        };

        &mut self.targets[index]
    }
}

fn reference_target(tokens: &Tokens<'_>, index: usize) -> Result<Option<bool>, Error> {
    Ok(character(tokens, index)?.map(|c| c == 'R'))
}

/// TTM - Tracked Target Message
///
/// ```text
///                                          11     13
///         1  2   3   4 5   6   7 8   9   10|    12| 14        15
///         |  |   |   | |   |   | |   |   | |    | | |         |
///  $--TTM,xx,x.x,x.x,a,x.x,x.x,a,x.x,x.x,a,c--c,a,a,hhmmss.ss,a*hh<CR><LF>
/// ```
pub(crate) fn decode_ttm(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let number = int(tokens, 1)?.ok_or(Error::NoData)?;
    let distance = float(tokens, 2)?;
    let bearing = float(tokens, 3)?;
    let bearing_reference = optional(Reference::parse(tokens.field(4)))?;
    let speed = float(tokens, 5)?;
    let course = float(tokens, 6)?;
    let course_reference = optional(Reference::parse(tokens.field(7)))?;
    let cpa_distance = float(tokens, 8)?;
    let tcpa_minutes = float(tokens, 9)?;
    let units = character(tokens, 10)?;
    let name = text(tokens, 11)?;
    let status = optional(TargetStatus::parse(tokens.field(12)))?;
    let reference_target = reference_target(tokens, 13)?;
    let utc_time = time(tokens, 14)?;
    let acquisition = optional(Acquisition::parse(tokens.field(15)))?;

    let target = states.radar.target_mut(number);
    update_opt(&mut target.distance, distance);
    update_opt(&mut target.bearing, bearing);
    update_opt(&mut target.bearing_reference, bearing_reference);
    update_opt(&mut target.speed, speed);
    update_opt(&mut target.course, course);
    update_opt(&mut target.course_reference, course_reference);
    update_opt(&mut target.cpa_distance, cpa_distance);
    update_opt(&mut target.tcpa_minutes, tcpa_minutes);
    update_opt(&mut target.units, units);
    update_opt(&mut target.name, name);
    update_opt(&mut target.status, status);
    update_opt(&mut target.reference_target, reference_target);
    update(&mut target.time, utc_time);
    update_opt(&mut target.acquisition, acquisition);

    Ok(())
}

/// TLL - Target Latitude and Longitude
///
/// ```text
///         1  2       3 4        5 6    7         8 9
///         |  |       | |        | |    |         | |
///  $--TLL,xx,llll.ll,a,yyyyy.yy,a,c--c,hhmmss.ss,a,a*hh<CR><LF>
/// ```
pub(crate) fn decode_tll(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let number = int(tokens, 1)?.ok_or(Error::NoData)?;
    let latitude = coordinate(tokens, 2)?;
    let longitude = coordinate(tokens, 4)?;
    let name = text(tokens, 6)?;
    let utc_time = time(tokens, 7)?;
    let status = optional(TargetStatus::parse(tokens.field(8)))?;
    let reference_target = reference_target(tokens, 9)?;

    let target = states.radar.target_mut(number);
    update(&mut target.latitude, latitude);
    update(&mut target.longitude, longitude);
    update_opt(&mut target.name, name);
    update(&mut target.time, utc_time);
    update_opt(&mut target.status, status);
    update_opt(&mut target.reference_target, reference_target);

    Ok(())
}
