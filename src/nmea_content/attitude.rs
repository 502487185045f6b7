//! # Attitude

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Tokens,
    nmea_content::{ModuleStates, Status, float, update_opt},
    parsing::optional,
};

/// Attitude state
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AttitudeState {
    /// Actual heel angle in degrees, negative to port
    pub heel_angle: Option<f64>,
    /// Roll period in seconds
    pub roll_period: Option<f64>,
    pub roll_amplitude_port: Option<f64>,
    pub roll_amplitude_starboard: Option<f64>,
    pub status: Option<Status>,
    pub roll_peak_port: Option<f64>,
    pub roll_peak_starboard: Option<f64>,
}

/// HRM - Heel angle, roll period and roll amplitude measurement
///
/// ```text
///         1   2   3   4   5 6   7
///         |   |   |   |   | |   |
///  $--HRM,x.x,x.x,x.x,x.x,A,x.x,x.x,hhmmss.ss,xx,xx*hh<CR><LF>
/// ```
pub(crate) fn decode_hrm(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let heel_angle = float(tokens, 1)?;
    let roll_period = float(tokens, 2)?;
    let amplitude_port = float(tokens, 3)?;
    let amplitude_starboard = float(tokens, 4)?;
    let status = optional(Status::parse(tokens.field(5)))?;
    let peak_port = float(tokens, 6)?;
    let peak_starboard = float(tokens, 7)?;

    let attitude = &mut states.attitude;
    update_opt(&mut attitude.heel_angle, heel_angle);
    update_opt(&mut attitude.roll_period, roll_period);
    update_opt(&mut attitude.roll_amplitude_port, amplitude_port);
    update_opt(&mut attitude.roll_amplitude_starboard, amplitude_starboard);
    update_opt(&mut attitude.status, status);
    update_opt(&mut attitude.roll_peak_port, peak_port);
    update_opt(&mut attitude.roll_peak_starboard, peak_starboard);

    Ok(())
}
