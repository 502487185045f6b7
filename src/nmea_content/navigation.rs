//! # Navigation
//!
//! Steering information towards the active waypoint.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Tokens,
    nmea_content::{
        FaaMode, ID_CAPACITY, ModuleStates, Status, Steer, Text, coordinate, float, text, time,
        update, update_opt,
    },
    parsing::{Coordinate, TimeOfDay, optional},
};

/// Navigation state
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NavigationState {
    pub status: Option<Status>,
    /// Cross track error magnitude in nautical miles
    pub cross_track_error: Option<f64>,
    pub steer: Option<Steer>,
    /// Loran-C blink or SNR warning of XTE sentences
    pub cycle_lock: Option<Status>,
    pub origin_waypoint: Option<Text<ID_CAPACITY>>,
    pub destination_waypoint: Option<Text<ID_CAPACITY>>,
    pub destination_latitude: Coordinate,
    pub destination_longitude: Coordinate,
    /// Range to destination in nautical miles
    pub range_to_destination: Option<f64>,
    pub bearing_to_destination_true: Option<f64>,
    pub bearing_to_destination_magnetic: Option<f64>,
    /// Velocity towards destination in knots
    pub closing_velocity: Option<f64>,
    /// Arrival circle entered
    pub arrived: Option<bool>,
    pub faa_mode: Option<FaaMode>,
    /// Bearing from origin to destination (BOD)
    pub origin_bearing_true: Option<f64>,
    pub origin_bearing_magnetic: Option<f64>,
    /// UTC time of the last BWC sentence
    pub waypoint_time: TimeOfDay,
}

/// RMB - Recommended Minimum Navigation Information
///
/// ```text
///                                                              14
///         1 2   3 4    5    6       7 8        9 10  11  12  13|
///         | |   | |    |    |       | |        | |   |   |   | |
///  $--RMB,A,x.x,a,c--c,c--c,llll.ll,a,yyyyy.yy,a,x.x,x.x,x.x,A,m*hh<CR><LF>
/// ```
pub(crate) fn decode_rmb(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let status = optional(Status::parse(tokens.field(1)))?;
    let cross_track_error = float(tokens, 2)?;
    let steer = optional(Steer::parse(tokens.field(3)))?;
    let origin = text(tokens, 4)?;
    let destination = text(tokens, 5)?;
    let latitude = coordinate(tokens, 6)?;
    let longitude = coordinate(tokens, 8)?;
    let range = float(tokens, 10)?;
    let bearing = float(tokens, 11)?;
    let closing_velocity = float(tokens, 12)?;
    let arrived = optional(Status::parse(tokens.field(13)))?;
    let faa_mode = optional(FaaMode::parse(tokens.field(14)))?;

    let navigation = &mut states.navigation;
    update_opt(&mut navigation.status, status);
    update_opt(&mut navigation.cross_track_error, cross_track_error);
    update_opt(&mut navigation.steer, steer);
    update_opt(&mut navigation.origin_waypoint, origin);
    update_opt(&mut navigation.destination_waypoint, destination);
    update(&mut navigation.destination_latitude, latitude);
    update(&mut navigation.destination_longitude, longitude);
    update_opt(&mut navigation.range_to_destination, range);
    update_opt(&mut navigation.bearing_to_destination_true, bearing);
    update_opt(&mut navigation.closing_velocity, closing_velocity);
    update_opt(&mut navigation.arrived, arrived.map(|s| s == Status::Valid));
    update_opt(&mut navigation.faa_mode, faa_mode);

    Ok(())
}

/// XTE - Cross-Track Error, Measured
///
/// ```text
///         1 2 3   4 5 6
///         | | |   | | |
///  $--XTE,A,A,x.x,a,N,m*hh<CR><LF>
/// ```
pub(crate) fn decode_xte(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let status = optional(Status::parse(tokens.field(1)))?;
    let cycle_lock = optional(Status::parse(tokens.field(2)))?;
    let cross_track_error = float(tokens, 3)?;
    let steer = optional(Steer::parse(tokens.field(4)))?;
    let faa_mode = optional(FaaMode::parse(tokens.field(6)))?;

    let navigation = &mut states.navigation;
    update_opt(&mut navigation.status, status);
    update_opt(&mut navigation.cycle_lock, cycle_lock);
    update_opt(&mut navigation.cross_track_error, cross_track_error);
    update_opt(&mut navigation.steer, steer);
    update_opt(&mut navigation.faa_mode, faa_mode);

    Ok(())
}

/// BOD - Bearing - Waypoint to Waypoint
///
/// ```text
///         1   2 3   4 5    6
///         |   | |   | |    |
///  $--BOD,x.x,T,x.x,M,c--c,c--c*hh<CR><LF>
/// ```
pub(crate) fn decode_bod(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let bearing_true = float(tokens, 1)?;
    let bearing_magnetic = float(tokens, 3)?;
    let destination = text(tokens, 5)?;
    let origin = text(tokens, 6)?;

    let navigation = &mut states.navigation;
    update_opt(&mut navigation.origin_bearing_true, bearing_true);
    update_opt(&mut navigation.origin_bearing_magnetic, bearing_magnetic);
    update_opt(&mut navigation.destination_waypoint, destination);
    update_opt(&mut navigation.origin_waypoint, origin);

    Ok(())
}

/// BWC - Bearing & Distance to Waypoint - Great Circle
///
/// ```text
///                                                        12
///         1         2       3 4        5 6   7 8   9 10  11|    13
///         |         |       | |        | |   | |   | |   | |    |
///  $--BWC,hhmmss.ss,llll.ll,a,yyyyy.yy,a,x.x,T,x.x,M,x.x,N,c--c,m*hh<CR><LF>
/// ```
pub(crate) fn decode_bwc(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let utc_time = time(tokens, 1)?;
    let latitude = coordinate(tokens, 2)?;
    let longitude = coordinate(tokens, 4)?;
    let bearing_true = float(tokens, 6)?;
    let bearing_magnetic = float(tokens, 8)?;
    let distance = float(tokens, 10)?;
    let destination = text(tokens, 12)?;
    let faa_mode = optional(FaaMode::parse(tokens.field(13)))?;

    let navigation = &mut states.navigation;
    update(&mut navigation.waypoint_time, utc_time);
    update(&mut navigation.destination_latitude, latitude);
    update(&mut navigation.destination_longitude, longitude);
    update_opt(&mut navigation.bearing_to_destination_true, bearing_true);
    update_opt(&mut navigation.bearing_to_destination_magnetic, bearing_magnetic);
    update_opt(&mut navigation.range_to_destination, distance);
    update_opt(&mut navigation.destination_waypoint, destination);
    update_opt(&mut navigation.faa_mode, faa_mode);

    Ok(())
}
