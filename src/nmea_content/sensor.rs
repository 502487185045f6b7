//! # Sensors
//!
//! Depth, water temperature, wind, speed through water, and generic transducer
//! measurements.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Tokens,
    nmea_content::{
        ID_CAPACITY, ModuleStates, Reference, Status, Text, character, float, text, update_opt,
    },
    parsing::optional,
};

/// Number of transducers kept from XDR sentences.
pub const MAX_TRANSDUCERS: usize = 8;

const METERS_PER_FOOT: f64 = 0.3048;
const METERS_PER_FATHOM: f64 = 1.8288;
const KNOTS_PER_KMH: f64 = 1.0 / 1.852;
const KNOTS_PER_MPS: f64 = 3600.0 / 1852.0;

/// Wind angle and speed relative to the bow
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Wind {
    pub angle: Option<f64>,
    pub speed_knots: Option<f64>,
    pub status: Option<Status>,
}

/// Wind direction and speed relative to north (MWD)
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WindDirection {
    pub direction_true: Option<f64>,
    pub direction_magnetic: Option<f64>,
    pub speed_knots: Option<f64>,
    pub speed_mps: Option<f64>,
}

/// One XDR measurement
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Transducer {
    /// Transducer type, such as `C` (temperature) or `P` (pressure)
    pub kind: char,
    pub value: Option<f64>,
    pub units: Option<char>,
    pub name: Text<ID_CAPACITY>,
}

/// Sensor state
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SensorState {
    /// Depth below the transducer
    pub depth_meters: Option<f64>,
    /// Offset from the transducer, positive to the waterline, negative to the keel
    pub depth_offset_meters: Option<f64>,
    pub depth_max_range_meters: Option<f64>,
    pub water_temperature_celsius: Option<f64>,
    pub apparent_wind: Wind,
    pub true_wind: Wind,
    pub wind_direction: WindDirection,
    pub water_heading_true: Option<f64>,
    pub water_heading_magnetic: Option<f64>,
    pub water_speed_knots: Option<f64>,
    pub water_speed_kmh: Option<f64>,
    pub transducers: heapless::Vec<Transducer, MAX_TRANSDUCERS>,
}

impl SensorState {
    pub fn transducer(&self, name: &str) -> Option<&Transducer> {
        self.transducers.iter().find(|t| t.name.as_str() == name)
    }
}

/// DBT - Depth below transducer
///
/// ```text
///         1   2 3   4 5   6
///         |   | |   | |   |
///  $--DBT,x.x,f,x.x,M,x.x,F*hh<CR><LF>
/// ```
///
/// Meters are used when present, otherwise feet or fathoms are converted.
pub(crate) fn decode_dbt(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let feet = float(tokens, 1)?;
    let meters = float(tokens, 3)?;
    let fathoms = float(tokens, 5)?;

    let depth = meters
        .or(feet.map(|v| v * METERS_PER_FOOT))
        .or(fathoms.map(|v| v * METERS_PER_FATHOM));
    update_opt(&mut states.sensor.depth_meters, depth);

    Ok(())
}

/// DPT - Depth of Water
///
/// ```text
///         1   2   3
///         |   |   |
///  $--DPT,x.x,x.x,x.x*hh<CR><LF>
/// ```
pub(crate) fn decode_dpt(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let depth = float(tokens, 1)?;
    let offset = float(tokens, 2)?;
    let max_range = float(tokens, 3)?;

    let sensor = &mut states.sensor;
    update_opt(&mut sensor.depth_meters, depth);
    update_opt(&mut sensor.depth_offset_meters, offset);
    update_opt(&mut sensor.depth_max_range_meters, max_range);

    Ok(())
}

/// MTW - Mean Temperature of Water
///
/// ```text
///         1   2
///         |   |
///  $--MTW,x.x,C*hh<CR><LF>
/// ```
pub(crate) fn decode_mtw(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let temperature = float(tokens, 1)?;
    update_opt(&mut states.sensor.water_temperature_celsius, temperature);

    Ok(())
}

/// MWV - Wind Speed and Angle
///
/// ```text
///         1   2 3   4 5
///         |   | |   | |
///  $--MWV,x.x,a,x.x,a,A*hh<CR><LF>
/// ```
///
/// Relative readings update the apparent wind, theoretical readings the true wind.
/// Speeds are converted to knots.
pub(crate) fn decode_mwv(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let angle = float(tokens, 1)?;
    let reference = Reference::parse(tokens.field(2))?;
    let speed = float(tokens, 3)?;
    let factor = match character(tokens, 4)? {
        Some('N') | None => 1.0,
        Some('K') => KNOTS_PER_KMH,
        Some('M') => KNOTS_PER_MPS,
        Some(_) => return Err(Error::ParseFailed),
    };
    let status = optional(Status::parse(tokens.field(5)))?;

    let wind = match reference {
        Reference::Relative => &mut states.sensor.apparent_wind,
        Reference::True => &mut states.sensor.true_wind,
        Reference::Magnetic => return Err(Error::ParseFailed),
    };
    update_opt(&mut wind.angle, angle);
    update_opt(&mut wind.speed_knots, speed.map(|v| v * factor));
    update_opt(&mut wind.status, status);

    Ok(())
}

/// MWD - Wind Direction & Speed
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--MWD,x.x,T,x.x,M,x.x,N,x.x,M*hh<CR><LF>
/// ```
pub(crate) fn decode_mwd(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let direction_true = float(tokens, 1)?;
    let direction_magnetic = float(tokens, 3)?;
    let speed_knots = float(tokens, 5)?;
    let speed_mps = float(tokens, 7)?;

    let wind = &mut states.sensor.wind_direction;
    update_opt(&mut wind.direction_true, direction_true);
    update_opt(&mut wind.direction_magnetic, direction_magnetic);
    update_opt(&mut wind.speed_knots, speed_knots);
    update_opt(&mut wind.speed_mps, speed_mps);

    Ok(())
}

/// VHW - Water speed and heading
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--VHW,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
pub(crate) fn decode_vhw(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let heading_true = float(tokens, 1)?;
    let heading_magnetic = float(tokens, 3)?;
    let speed_knots = float(tokens, 5)?;
    let speed_kmh = float(tokens, 7)?;

    let sensor = &mut states.sensor;
    update_opt(&mut sensor.water_heading_true, heading_true);
    update_opt(&mut sensor.water_heading_magnetic, heading_magnetic);
    update_opt(&mut sensor.water_speed_knots, speed_knots);
    update_opt(&mut sensor.water_speed_kmh, speed_kmh);

    Ok(())
}

/// XDR - Transducer Measurement
///
/// ```text
///         1 2   3 4            n
///         | |   | |            |
///  $--XDR,a,x.x,a,c--c, ..... *hh<CR><LF>
/// ```
///
/// Each group of four fields is one measurement, matched to a known transducer by name.
/// New transducers are dropped once [`MAX_TRANSDUCERS`] are known.
pub(crate) fn decode_xdr(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let mut measurements = heapless::Vec::<Transducer, MAX_TRANSDUCERS>::new();

    for base in (1..tokens.len()).step_by(4) {
        let Some(kind) = character(tokens, base)? else {
            continue;
        };

        let measurement = Transducer {
            kind,
            value: float(tokens, base + 1)?,
            units: character(tokens, base + 2)?,
            name: text(tokens, base + 3)?.unwrap_or_default(),
        };

        if measurements.push(measurement).is_err() {
            return Err(Error::TooManyFields);
        }
    }

    let transducers = &mut states.sensor.transducers;
    for measurement in measurements {
        match transducers
            .iter_mut()
            .find(|t| t.kind == measurement.kind && t.name == measurement.name)
        {
            Some(transducer) => {
                update_opt(&mut transducer.value, measurement.value);
                update_opt(&mut transducer.units, measurement.units);
            }
            None => {
                let _ = transducers.push(measurement);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmea_content::test_util::{assert_close, decode};

    #[test]
    fn test_dbt() {
        let mut states = ModuleStates::default();

        decode(decode_dbt, &mut states, "$SDDBT,7.8,f,2.4,M,1.3,F").unwrap();
        assert_eq!(states.sensor.depth_meters, Some(2.4));

        decode(decode_dbt, &mut states, "$SDDBT,10.0,f,,M,,F").unwrap();
        assert_close(states.sensor.depth_meters.unwrap(), 3.048);

        decode(decode_dbt, &mut states, "$SDDBT,,f,,M,2.0,F").unwrap();
        assert_close(states.sensor.depth_meters.unwrap(), 3.6576);

        decode(decode_dbt, &mut states, "$SDDBT,,f,,M,,F").unwrap();
        assert_close(states.sensor.depth_meters.unwrap(), 3.6576);
    }

    #[test]
    fn test_dpt_and_mtw() {
        let mut states = ModuleStates::default();

        decode(decode_dpt, &mut states, "$SDDPT,2.4,-0.5,100").unwrap();
        decode(decode_mtw, &mut states, "$YXMTW,17.75,C").unwrap();

        let sensor = &states.sensor;
        assert_eq!(sensor.depth_meters, Some(2.4));
        assert_eq!(sensor.depth_offset_meters, Some(-0.5));
        assert_eq!(sensor.depth_max_range_meters, Some(100.0));
        assert_eq!(sensor.water_temperature_celsius, Some(17.75));
    }

    #[test]
    fn test_mwv() {
        let mut states = ModuleStates::default();

        decode(decode_mwv, &mut states, "$WIMWV,214.8,R,10.0,N,A").unwrap();
        decode(decode_mwv, &mut states, "$WIMWV,120.0,T,5.0,M,A").unwrap();

        let sensor = &states.sensor;
        assert_eq!(sensor.apparent_wind.angle, Some(214.8));
        assert_eq!(sensor.apparent_wind.speed_knots, Some(10.0));
        assert_eq!(sensor.apparent_wind.status, Some(Status::Valid));
        assert_eq!(sensor.true_wind.angle, Some(120.0));
        assert_close(sensor.true_wind.speed_knots.unwrap(), 9.719222);

        assert_eq!(
            decode(decode_mwv, &mut states, "$WIMWV,214.8,R,10.0,X,A"),
            Err(Error::ParseFailed)
        );
        assert_eq!(decode(decode_mwv, &mut states, "$WIMWV,214.8,,10.0,N,A"), Err(Error::NoData));
    }

    #[test]
    fn test_mwd_and_vhw() {
        let mut states = ModuleStates::default();

        decode(decode_mwd, &mut states, "$WIMWD,270.0,T,262.5,M,12.4,N,6.4,M").unwrap();
        decode(decode_vhw, &mut states, "$VWVHW,045.0,T,043.0,M,3.5,N,6.5,K").unwrap();

        let sensor = &states.sensor;
        assert_eq!(sensor.wind_direction.direction_true, Some(270.0));
        assert_eq!(sensor.wind_direction.direction_magnetic, Some(262.5));
        assert_eq!(sensor.wind_direction.speed_knots, Some(12.4));
        assert_eq!(sensor.wind_direction.speed_mps, Some(6.4));
        assert_eq!(sensor.water_heading_true, Some(45.0));
        assert_eq!(sensor.water_speed_knots, Some(3.5));
        assert_eq!(sensor.water_speed_kmh, Some(6.5));
    }

    #[test]
    fn test_xdr() {
        let mut states = ModuleStates::default();

        decode(decode_xdr, &mut states, "$IIXDR,C,19.52,C,TempAir,P,1.02481,B,Barometer").unwrap();
        decode(decode_xdr, &mut states, "$IIXDR,C,20.10,C,TempAir").unwrap();

        let sensor = &states.sensor;
        assert_eq!(sensor.transducers.len(), 2);
        assert_eq!(sensor.transducer("TempAir").unwrap().value, Some(20.1));
        let barometer = sensor.transducer("Barometer").unwrap();
        assert_eq!(barometer.kind, 'P');
        assert_eq!(barometer.units, Some('B'));
        assert_eq!(barometer.value, Some(1.02481));
    }
}
