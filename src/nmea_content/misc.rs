//! # Miscellaneous
//!
//! Distance log and rudder angle.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Tokens,
    nmea_content::{ModuleStates, Status, float, update_opt},
    parsing::optional,
};

/// Miscellaneous state
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MiscState {
    /// Total cumulative water distance, nautical miles
    pub total_water_distance: Option<f64>,
    /// Water distance since reset, nautical miles
    pub trip_water_distance: Option<f64>,
    pub total_ground_distance: Option<f64>,
    pub trip_ground_distance: Option<f64>,
    /// Starboard (or single) rudder angle in degrees, negative to port
    pub starboard_rudder_angle: Option<f64>,
    pub starboard_rudder_status: Option<Status>,
    pub port_rudder_angle: Option<f64>,
    pub port_rudder_status: Option<Status>,
}

/// VLW - Distance Traveled through Water
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--VLW,x.x,N,x.x,N,x.x,N,x.x,N*hh<CR><LF>
/// ```
pub(crate) fn decode_vlw(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let total_water = float(tokens, 1)?;
    let trip_water = float(tokens, 3)?;
    let total_ground = float(tokens, 5)?;
    let trip_ground = float(tokens, 7)?;

    let misc = &mut states.misc;
    update_opt(&mut misc.total_water_distance, total_water);
    update_opt(&mut misc.trip_water_distance, trip_water);
    update_opt(&mut misc.total_ground_distance, total_ground);
    update_opt(&mut misc.trip_ground_distance, trip_ground);

    Ok(())
}

/// RSA - Rudder Sensor Angle
///
/// ```text
///         1   2 3   4
///         |   | |   |
///  $--RSA,x.x,A,x.x,A*hh<CR><LF>
/// ```
pub(crate) fn decode_rsa(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let starboard = float(tokens, 1)?;
    let starboard_status = optional(Status::parse(tokens.field(2)))?;
    let port = float(tokens, 3)?;
    let port_status = optional(Status::parse(tokens.field(4)))?;

    let misc = &mut states.misc;
    update_opt(&mut misc.starboard_rudder_angle, starboard);
    update_opt(&mut misc.starboard_rudder_status, starboard_status);
    update_opt(&mut misc.port_rudder_angle, port);
    update_opt(&mut misc.port_rudder_status, port_status);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmea_content::test_util::decode;

    #[test]
    fn test_vlw() {
        let mut states = ModuleStates::default();

        decode(decode_vlw, &mut states, "$IIVLW,7803.2,N,0.00,N").unwrap();

        let misc = &states.misc;
        assert_eq!(misc.total_water_distance, Some(7803.2));
        assert_eq!(misc.trip_water_distance, Some(0.0));
        assert_eq!(misc.total_ground_distance, None);
    }

    #[test]
    fn test_rsa() {
        let mut states = ModuleStates::default();

        decode(decode_rsa, &mut states, "$IIRSA,-10.5,A,,V").unwrap();

        let misc = &states.misc;
        assert_eq!(misc.starboard_rudder_angle, Some(-10.5));
        assert_eq!(misc.starboard_rudder_status, Some(Status::Valid));
        assert_eq!(misc.port_rudder_angle, None);
        assert_eq!(misc.port_rudder_status, Some(Status::Invalid));
    }
}
