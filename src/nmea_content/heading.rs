//! # Heading
//!
//! Compass and gyro headings, rate of turn, and heading/track controller data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Tokens,
    nmea_content::{
        ModuleStates, Reference, Status, Steer, char_enum, float, signed, update_opt,
    },
    parsing::optional,
};

char_enum! {
    /// THS mode indicator
    pub enum ThsMode {
        /// A - Autonomous
        'A' => Autonomous,
        /// E - Estimated (dead reckoning)
        'E' => Estimated,
        /// M - Manual input
        'M' => Manual,
        /// S - Simulator
        'S' => Simulator,
        /// V - Data not valid
        'V' => Invalid,
    }
}

char_enum! {
    /// Selected steering mode of a heading/track controller
    pub enum SteeringMode {
        /// M - Manual steering
        'M' => Manual,
        /// S - Stand-alone heading control
        'S' => StandAlone,
        /// H - Heading control
        'H' => Heading,
        /// T - Track control
        'T' => Track,
        /// R - Rudder control
        'R' => Rudder,
    }
}

char_enum! {
    /// Turn mode of a heading/track controller
    pub enum TurnMode {
        /// R - Radius controlled
        'R' => Radius,
        /// T - Turn rate controlled
        'T' => TurnRate,
        /// N - Turn is not controlled
        'N' => NotControlled,
    }
}

/// Commanded values shared by HTC and HTD sentences
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HeadingControl {
    /// Override active
    pub override_active: Option<bool>,
    pub rudder_angle: Option<f64>,
    pub rudder_direction: Option<Steer>,
    pub steering_mode: Option<SteeringMode>,
    pub turn_mode: Option<TurnMode>,
    pub rudder_limit: Option<f64>,
    pub off_heading_limit: Option<f64>,
    /// Radius of turn for heading changes, nautical miles
    pub radius_of_turn: Option<f64>,
    /// Rate of turn for heading changes, degrees per minute
    pub rate_of_turn: Option<f64>,
    pub heading_to_steer: Option<f64>,
    /// Off-track limit, nautical miles
    pub off_track_limit: Option<f64>,
    pub track: Option<f64>,
    pub heading_reference: Option<Reference>,
}

/// Heading/track control data, including the controller's status (HTD)
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HeadingTrackData {
    pub control: HeadingControl,
    /// Rudder limit exceeded
    pub rudder_status: Option<Status>,
    pub off_heading_status: Option<Status>,
    pub off_track_status: Option<Status>,
    pub vessel_heading: Option<f64>,
}

/// Heading state
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HeadingState {
    pub heading_true: Option<f64>,
    pub heading_magnetic: Option<f64>,
    /// Raw magnetic sensor heading (HDG)
    pub sensor_heading: Option<f64>,
    /// Magnetic deviation in degrees, West negative
    pub magnetic_deviation: Option<f64>,
    /// Magnetic variation in degrees, West negative
    pub magnetic_variation: Option<f64>,
    /// Rate of turn in degrees per minute, negative to port
    pub rate_of_turn: Option<f64>,
    pub rate_of_turn_status: Option<Status>,
    pub ths_mode: Option<ThsMode>,
    /// Last commanded values (HTC)
    pub control: HeadingControl,
    /// Last controller data (HTD)
    pub track_data: HeadingTrackData,
}

/// HDG - Heading - Deviation & Variation
///
/// ```text
///         1   2   3 4   5
///         |   |   | |   |
///  $--HDG,x.x,x.x,a,x.x,a*hh<CR><LF>
/// ```
pub(crate) fn decode_hdg(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let sensor_heading = float(tokens, 1)?;
    let deviation = signed(tokens, 2, 'W')?;
    let variation = signed(tokens, 4, 'W')?;

    let heading = &mut states.heading;
    update_opt(&mut heading.sensor_heading, sensor_heading);
    update_opt(&mut heading.magnetic_deviation, deviation);
    update_opt(&mut heading.magnetic_variation, variation);

    Ok(())
}

/// HDT - Heading - True
///
/// ```text
///         1   2
///         |   |
///  $--HDT,x.x,T*hh<CR><LF>
/// ```
pub(crate) fn decode_hdt(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let heading_true = float(tokens, 1)?;
    update_opt(&mut states.heading.heading_true, heading_true);

    Ok(())
}

/// HDM - Heading - Magnetic
///
/// ```text
///         1   2
///         |   |
///  $--HDM,x.x,M*hh<CR><LF>
/// ```
pub(crate) fn decode_hdm(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let heading_magnetic = float(tokens, 1)?;
    update_opt(&mut states.heading.heading_magnetic, heading_magnetic);

    Ok(())
}

/// ROT - Rate Of Turn
///
/// ```text
///         1   2
///         |   |
///  $--ROT,x.x,A*hh<CR><LF>
/// ```
pub(crate) fn decode_rot(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let rate_of_turn = float(tokens, 1)?;
    let status = optional(Status::parse(tokens.field(2)))?;

    let heading = &mut states.heading;
    update_opt(&mut heading.rate_of_turn, rate_of_turn);
    update_opt(&mut heading.rate_of_turn_status, status);

    Ok(())
}

/// THS - True Heading and Status
///
/// ```text
///         1   2
///         |   |
///  $--THS,x.x,a*hh<CR><LF>
/// ```
pub(crate) fn decode_ths(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let heading_true = float(tokens, 1)?;
    let mode = optional(ThsMode::parse(tokens.field(2)))?;

    let heading = &mut states.heading;
    update_opt(&mut heading.heading_true, heading_true);
    update_opt(&mut heading.ths_mode, mode);

    Ok(())
}

/// Parses fields 1 to 13, common to HTC and HTD.
fn heading_control(tokens: &Tokens<'_>) -> Result<HeadingControl, Error> {
    Ok(HeadingControl {
        override_active: optional(Status::parse(tokens.field(1)))?.map(|s| s == Status::Valid),
        rudder_angle: float(tokens, 2)?,
        rudder_direction: optional(Steer::parse(tokens.field(3)))?,
        steering_mode: optional(SteeringMode::parse(tokens.field(4)))?,
        turn_mode: optional(TurnMode::parse(tokens.field(5)))?,
        rudder_limit: float(tokens, 6)?,
        off_heading_limit: float(tokens, 7)?,
        radius_of_turn: float(tokens, 8)?,
        rate_of_turn: float(tokens, 9)?,
        heading_to_steer: float(tokens, 10)?,
        off_track_limit: float(tokens, 11)?,
        track: float(tokens, 12)?,
        heading_reference: optional(Reference::parse(tokens.field(13)))?,
    })
}

fn merge_control(slot: &mut HeadingControl, control: HeadingControl) {
    update_opt(&mut slot.override_active, control.override_active);
    update_opt(&mut slot.rudder_angle, control.rudder_angle);
    update_opt(&mut slot.rudder_direction, control.rudder_direction);
    update_opt(&mut slot.steering_mode, control.steering_mode);
    update_opt(&mut slot.turn_mode, control.turn_mode);
    update_opt(&mut slot.rudder_limit, control.rudder_limit);
    update_opt(&mut slot.off_heading_limit, control.off_heading_limit);
    update_opt(&mut slot.radius_of_turn, control.radius_of_turn);
    update_opt(&mut slot.rate_of_turn, control.rate_of_turn);
    update_opt(&mut slot.heading_to_steer, control.heading_to_steer);
    update_opt(&mut slot.off_track_limit, control.off_track_limit);
    update_opt(&mut slot.track, control.track);
    update_opt(&mut slot.heading_reference, control.heading_reference);
}

/// HTC - Heading/Track Control Command
///
/// ```text
///         1 2   3 4 5 6   7   8   9   10  11  12  13
///         | |   | | | |   |   |   |   |   |   |   |
///  $--HTC,A,x.x,a,a,a,x.x,x.x,x.x,x.x,x.x,x.x,x.x,a*hh<CR><LF>
/// ```
pub(crate) fn decode_htc(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let control = heading_control(tokens)?;
    merge_control(&mut states.heading.control, control);

    Ok(())
}

/// HTD - Heading/Track Control Data
///
/// ```text
///         1 2   3 4 5 6   7   8   9   10  11  12  13 14 15 16 17
///         | |   | | | |   |   |   |   |   |   |   |  |  |  |  |
///  $--HTD,A,x.x,a,a,a,x.x,x.x,x.x,x.x,x.x,x.x,x.x,a,A,A,A,x.x*hh<CR><LF>
/// ```
pub(crate) fn decode_htd(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let control = heading_control(tokens)?;
    let rudder_status = optional(Status::parse(tokens.field(14)))?;
    let off_heading_status = optional(Status::parse(tokens.field(15)))?;
    let off_track_status = optional(Status::parse(tokens.field(16)))?;
    let vessel_heading = float(tokens, 17)?;

    let data = &mut states.heading.track_data;
    merge_control(&mut data.control, control);
    update_opt(&mut data.rudder_status, rudder_status);
    update_opt(&mut data.off_heading_status, off_heading_status);
    update_opt(&mut data.off_track_status, off_track_status);
    update_opt(&mut data.vessel_heading, vessel_heading);

    Ok(())
}
