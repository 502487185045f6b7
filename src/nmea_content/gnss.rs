//! # GNSS
//!
//! Position, fix quality, satellites, and velocity from satellite receivers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Tokens,
    nmea_content::{
        FaaMode, ModuleStates, Status, Text, char_enum, coordinate, date, float, int, signed,
        text, time, update, update_opt,
    },
    parsing::{Coordinate, Date, TimeOfDay, optional},
};

/// Number of satellite slots kept from GSV sentences.
pub const MAX_SATELLITES: usize = 32;

/// Number of active satellite slots in a GSA sentence.
pub const GSA_SATELLITES: usize = 12;

char_enum! {
    /// Selection Mode
    pub enum SelectionMode {
        /// A - Automatic, 2D/3D
        'A' => Automatic,
        /// M - Manual, forced to operate in 2D or 3D
        'M' => Manual,
    }
}

char_enum! {
    /// Fix Mode
    pub enum FixMode {
        /// 1 - No fix
        '1' => NoFix,
        /// 2 - 2D Fix
        '2' => Fix2D,
        /// 3 - 3D Fix
        '3' => Fix3D,
    }
}

char_enum! {
    /// Navigational status of GNS sentences (NMEA 4.10)
    pub enum NavigationalStatus {
        /// S - Safe
        'S' => Safe,
        /// C - Caution
        'C' => Caution,
        /// U - Unsafe
        'U' => Unsafe,
        /// V - Navigational status not valid
        'V' => NotValid,
    }
}

/// Satellite information from GSV sentences
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Satellite {
    pub prn: u8,
    pub elevation: Option<u8>,
    pub azimuth: Option<u16>,
    pub snr: Option<u8>,
}

/// Pseudorange error statistics from GST sentences
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ErrorStatistics {
    pub time: TimeOfDay,
    pub rms_range: Option<f64>,
    pub semi_major: Option<f64>,
    pub semi_minor: Option<f64>,
    pub orientation: Option<f64>,
    pub latitude_error: Option<f64>,
    pub longitude_error: Option<f64>,
    pub altitude_error: Option<f64>,
}

/// GNSS state
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GnssState {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    /// UTC time of the last position fix
    pub utc_time: TimeOfDay,
    /// UTC date from RMC sentences
    pub date: Date,
    /// GPS quality indicator (0 = no fix, 1 = GPS fix, 2 = DGPS fix, ...)
    pub fix_quality: Option<u8>,
    pub satellites_used: Option<u8>,
    pub hdop: Option<f32>,
    pub vdop: Option<f32>,
    pub pdop: Option<f32>,
    /// Altitude above mean sea level
    pub altitude_meters: Option<f64>,
    /// Difference between the WGS-84 ellipsoid and mean sea level
    pub geoid_separation_meters: Option<f64>,
    pub dgps_age_seconds: Option<f64>,
    pub dgps_station_id: Option<u16>,
    pub status: Option<Status>,
    pub faa_mode: Option<FaaMode>,
    /// Per-constellation mode indicators of GNS sentences
    pub gns_mode: Option<Text<8>>,
    pub navigational_status: Option<NavigationalStatus>,
    pub speed_knots: Option<f64>,
    pub speed_kmh: Option<f64>,
    pub course_true: Option<f64>,
    pub course_magnetic: Option<f64>,
    /// Magnetic variation in degrees, West negative
    pub magnetic_variation: Option<f64>,
    pub selection_mode: Option<SelectionMode>,
    pub fix_mode: Option<FixMode>,
    /// PRNs of the satellites used in the solution (GSA)
    pub active_satellites: [Option<u8>; GSA_SATELLITES],
    pub satellites_in_view: Option<u8>,
    /// GSV satellites, four slots per GSV message
    pub satellites: [Option<Satellite>; MAX_SATELLITES],
    pub error_statistics: ErrorStatistics,
}

/// GGA - Global Positioning System Fix Data
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
pub(crate) fn decode_gga(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let utc_time = time(tokens, 1)?;
    let latitude = coordinate(tokens, 2)?;
    let longitude = coordinate(tokens, 4)?;
    let fix_quality = int(tokens, 6)?;
    let satellites_used = int(tokens, 7)?;
    let hdop = float(tokens, 8)?;
    let altitude = float(tokens, 9)?;
    let geoid_separation = float(tokens, 11)?;
    let dgps_age = float(tokens, 13)?;
    let dgps_station_id = int(tokens, 14)?;

    let gnss = &mut states.gnss;
    update(&mut gnss.utc_time, utc_time);
    update(&mut gnss.latitude, latitude);
    update(&mut gnss.longitude, longitude);
    update_opt(&mut gnss.fix_quality, fix_quality);
    update_opt(&mut gnss.satellites_used, satellites_used);
    update_opt(&mut gnss.hdop, hdop.map(|v| v as f32));
    update_opt(&mut gnss.altitude_meters, altitude);
    update_opt(&mut gnss.geoid_separation_meters, geoid_separation);
    update_opt(&mut gnss.dgps_age_seconds, dgps_age);
    update_opt(&mut gnss.dgps_station_id, dgps_station_id);

    Ok(())
}

/// RMC - Recommended Minimum Navigation Information
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10  11 12
///         |         | |       | |        |  |   |   |    |   |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
pub(crate) fn decode_rmc(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let utc_time = time(tokens, 1)?;
    let status = optional(Status::parse(tokens.field(2)))?;
    let latitude = coordinate(tokens, 3)?;
    let longitude = coordinate(tokens, 5)?;
    let speed_knots = float(tokens, 7)?;
    let course_true = float(tokens, 8)?;
    let date = date(tokens, 9)?;
    let magnetic_variation = signed(tokens, 10, 'W')?;
    let faa_mode = optional(FaaMode::parse(tokens.field(12)))?;

    let gnss = &mut states.gnss;
    update(&mut gnss.utc_time, utc_time);
    update_opt(&mut gnss.status, status);
    update(&mut gnss.latitude, latitude);
    update(&mut gnss.longitude, longitude);
    update_opt(&mut gnss.speed_knots, speed_knots);
    update_opt(&mut gnss.course_true, course_true);
    update(&mut gnss.date, date);
    update_opt(&mut gnss.magnetic_variation, magnetic_variation);
    update_opt(&mut gnss.faa_mode, faa_mode);

    Ok(())
}

/// GLL - Geographic Position - Latitude/Longitude
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
pub(crate) fn decode_gll(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let latitude = coordinate(tokens, 1)?;
    let longitude = coordinate(tokens, 3)?;
    let utc_time = time(tokens, 5)?;
    let status = optional(Status::parse(tokens.field(6)))?;
    let faa_mode = optional(FaaMode::parse(tokens.field(7)))?;

    let gnss = &mut states.gnss;
    update(&mut gnss.latitude, latitude);
    update(&mut gnss.longitude, longitude);
    update(&mut gnss.utc_time, utc_time);
    update_opt(&mut gnss.status, status);
    update_opt(&mut gnss.faa_mode, faa_mode);

    Ok(())
}

/// GSA - GPS DOP and active satellites
///
/// ```text
///         1 2 3                        14 15  16  17
///         | | |                         |  |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// The satellite list replaces the previous one, empty slots included.
pub(crate) fn decode_gsa(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let selection_mode = optional(SelectionMode::parse(tokens.field(1)))?;
    let fix_mode = optional(FixMode::parse(tokens.field(2)))?;

    let mut active_satellites = [None; GSA_SATELLITES];
    for (slot, prn) in active_satellites.iter_mut().enumerate() {
        *prn = int(tokens, 3 + slot)?;
    }

    let pdop = float(tokens, 15)?;
    let hdop = float(tokens, 16)?;
    let vdop = float(tokens, 17)?;

    let gnss = &mut states.gnss;
    update_opt(&mut gnss.selection_mode, selection_mode);
    update_opt(&mut gnss.fix_mode, fix_mode);
    gnss.active_satellites = active_satellites;
    update_opt(&mut gnss.pdop, pdop.map(|v| v as f32));
    update_opt(&mut gnss.hdop, hdop.map(|v| v as f32));
    update_opt(&mut gnss.vdop, vdop.map(|v| v as f32));

    Ok(())
}

/// GSV - Satellites in View
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...*hh<CR><LF>
/// ```
///
/// Message `n` fills satellite slots `4 * (n - 1)` to `4 * n - 1`.
pub(crate) fn decode_gsv(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let message_number: Option<u8> = int(tokens, 2)?;
    let satellites_in_view = int(tokens, 3)?;

    let mut satellites = [None; 4];
    for (group, satellite) in satellites.iter_mut().enumerate() {
        let base = 4 + group * 4;
        if base >= tokens.len() {
            break;
        }

        let Some(prn) = int(tokens, base)? else {
            continue;
        };

        *satellite = Some(Satellite {
            prn,
            elevation: int(tokens, base + 1)?,
            azimuth: int(tokens, base + 2)?,
            snr: int(tokens, base + 3)?,
        });
    }

    let gnss = &mut states.gnss;
    update_opt(&mut gnss.satellites_in_view, satellites_in_view);

    if let Some(first) = message_number.filter(|&n| n > 0).map(|n| (n as usize - 1) * 4) {
        for (offset, satellite) in satellites.into_iter().enumerate() {
            if let Some(slot) = gnss.satellites.get_mut(first + offset) {
                update_opt(slot, satellite);
            }
        }
    }

    Ok(())
}

/// VTG - Track made good and Ground speed
///
/// ```text
///         1   2 3   4 5   6 7   8 9
///         |   | |   | |   | |   | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
pub(crate) fn decode_vtg(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let course_true = float(tokens, 1)?;
    let course_magnetic = float(tokens, 3)?;
    let speed_knots = float(tokens, 5)?;
    let speed_kmh = float(tokens, 7)?;
    let faa_mode = optional(FaaMode::parse(tokens.field(9)))?;

    let gnss = &mut states.gnss;
    update_opt(&mut gnss.course_true, course_true);
    update_opt(&mut gnss.course_magnetic, course_magnetic);
    update_opt(&mut gnss.speed_knots, speed_knots);
    update_opt(&mut gnss.speed_kmh, speed_kmh);
    update_opt(&mut gnss.faa_mode, faa_mode);

    Ok(())
}

/// GNS - Fix data
///
/// ```text
///         1         2       3 4        5 6    7  8   9   10  11  12  13
///         |         |       | |        | |    |  |   |   |   |   |   |
///  $--GNS,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,c--c,xx,x.x,x.x,x.x,x.x,x.x,a*hh<CR><LF>
/// ```
pub(crate) fn decode_gns(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let utc_time = time(tokens, 1)?;
    let latitude = coordinate(tokens, 2)?;
    let longitude = coordinate(tokens, 4)?;
    let gns_mode = text(tokens, 6)?;
    let satellites_used = int(tokens, 7)?;
    let hdop = float(tokens, 8)?;
    let altitude = float(tokens, 9)?;
    let geoid_separation = float(tokens, 10)?;
    let dgps_age = float(tokens, 11)?;
    let dgps_station_id = int(tokens, 12)?;
    let navigational_status = optional(NavigationalStatus::parse(tokens.field(13)))?;

    let gnss = &mut states.gnss;
    update(&mut gnss.utc_time, utc_time);
    update(&mut gnss.latitude, latitude);
    update(&mut gnss.longitude, longitude);
    update_opt(&mut gnss.gns_mode, gns_mode);
    update_opt(&mut gnss.satellites_used, satellites_used);
    update_opt(&mut gnss.hdop, hdop.map(|v| v as f32));
    update_opt(&mut gnss.altitude_meters, altitude);
    update_opt(&mut gnss.geoid_separation_meters, geoid_separation);
    update_opt(&mut gnss.dgps_age_seconds, dgps_age);
    update_opt(&mut gnss.dgps_station_id, dgps_station_id);
    update_opt(&mut gnss.navigational_status, navigational_status);

    Ok(())
}

/// GST - GPS Pseudorange Noise Statistics
///
/// ```text
///         1         2   3   4   5   6   7   8
///         |         |   |   |   |   |   |   |
///  $--GST,hhmmss.ss,x.x,x.x,x.x,x.x,x.x,x.x,x.x*hh<CR><LF>
/// ```
pub(crate) fn decode_gst(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let utc_time = time(tokens, 1)?;
    let mut values = [None; 7];
    for (offset, value) in values.iter_mut().enumerate() {
        *value = float(tokens, 2 + offset)?;
    }

    let [rms, major, minor, orientation, lat, lon, alt] = values;
    let statistics = &mut states.gnss.error_statistics;
    update(&mut statistics.time, utc_time);
    update_opt(&mut statistics.rms_range, rms);
    update_opt(&mut statistics.semi_major, major);
    update_opt(&mut statistics.semi_minor, minor);
    update_opt(&mut statistics.orientation, orientation);
    update_opt(&mut statistics.latitude_error, lat);
    update_opt(&mut statistics.longitude_error, lon);
    update_opt(&mut statistics.altitude_error, alt);

    Ok(())
}
