//! # Waypoints and Routes

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Tokens,
    nmea_content::{ID_CAPACITY, ModuleStates, Text, char_enum, coordinate, int, text, update_opt},
    parsing::{Coordinate, optional},
};

/// Number of waypoints kept from WPL sentences.
pub const MAX_WAYPOINTS: usize = 16;

/// Number of waypoint identifiers kept for the active route.
pub const MAX_ROUTE_WAYPOINTS: usize = 32;

char_enum! {
    /// Route message mode
    pub enum RouteMode {
        /// c - Complete list of waypoints
        'c' => Complete,
        /// w - Working route: first listed is the FROM waypoint, second the TO waypoint
        'w' => Working,
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Waypoint {
    pub id: Text<ID_CAPACITY>,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Route {
    pub total_sentences: Option<u8>,
    pub sentence_number: Option<u8>,
    pub mode: Option<RouteMode>,
    pub id: Option<Text<ID_CAPACITY>>,
    pub waypoints: heapless::Vec<Text<ID_CAPACITY>, MAX_ROUTE_WAYPOINTS>,
}

/// Waypoint state
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WaypointState {
    /// Known waypoints, oldest first
    pub waypoints: heapless::Vec<Waypoint, MAX_WAYPOINTS>,
    pub route: Route,
}

impl WaypointState {
    pub fn waypoint(&self, id: &str) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.id.as_str() == id)
    }
}

/// WPL - Waypoint Location
///
/// ```text
///         1       2 3        4 5
///         |       | |        | |
///  $--WPL,llll.ll,a,yyyyy.yy,a,c--c*hh<CR><LF>
/// ```
///
/// A waypoint with a known identifier is moved in place; once the list is full the
/// oldest waypoint is dropped.
pub(crate) fn decode_wpl(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let latitude = coordinate(tokens, 1)?.ok_or(Error::NoData)?;
    let longitude = coordinate(tokens, 3)?.ok_or(Error::NoData)?;
    let id = text(tokens, 5)?.ok_or(Error::NoData)?;

    let waypoints = &mut states.waypoint.waypoints;
    if let Some(waypoint) = waypoints.iter_mut().find(|w| w.id == id) {
        waypoint.latitude = latitude;
        waypoint.longitude = longitude;
        return Ok(());
    }

    if waypoints.is_full() {
        waypoints.remove(0);
    }

    let _ = waypoints.push(Waypoint {
        id,
        latitude,
        longitude,
    });

    Ok(())
}

/// RTE - Routes
///
/// ```text
///         1 2 3 4    5         x
///         | | | |    |         |
///  $--RTE,x,x,a,c--c,c--c,...,c--c*hh<CR><LF>
/// ```
///
/// Sentence 1 starts a new waypoint list, later sentences append to it. Identifiers
/// past [`MAX_ROUTE_WAYPOINTS`] are dropped.
pub(crate) fn decode_rte(states: &mut ModuleStates, tokens: &Tokens<'_>) -> Result<(), Error> {
    let total_sentences = int(tokens, 1)?;
    let sentence_number: Option<u8> = int(tokens, 2)?;
    let mode = optional(RouteMode::parse(tokens.field(3)))?;
    let id = text(tokens, 4)?;

    let mut ids = heapless::Vec::<Text<ID_CAPACITY>, MAX_ROUTE_WAYPOINTS>::new();
    for index in 5..tokens.len() {
        if let Some(waypoint) = text(tokens, index)? {
            if ids.push(waypoint).is_err() {
                break;
            }
        }
    }

    let route = &mut states.waypoint.route;
    if sentence_number.is_none_or(|n| n <= 1) {
        route.waypoints.clear();
    }

    for waypoint in ids {
        if route.waypoints.push(waypoint).is_err() {
            break;
        }
    }

    update_opt(&mut route.total_sentences, total_sentences);
    update_opt(&mut route.sentence_number, sentence_number);
    update_opt(&mut route.mode, mode);
    update_opt(&mut route.id, id);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmea_content::test_util::{assert_close, decode};

    #[test]
    fn test_wpl() {
        let mut states = ModuleStates::default();

        decode(decode_wpl, &mut states, "$GPWPL,4917.16,N,12310.64,W,003").unwrap();
        decode(decode_wpl, &mut states, "$GPWPL,4917.24,N,12309.57,W,004").unwrap();
        decode(decode_wpl, &mut states, "$GPWPL,4918.00,N,12310.64,W,003").unwrap();

        let waypoint = &states.waypoint;
        assert_eq!(waypoint.waypoints.len(), 2);
        assert_close(waypoint.waypoint("003").unwrap().latitude.degrees, 49.3);
        assert_close(waypoint.waypoint("004").unwrap().longitude.degrees, -123.1595);
        assert!(waypoint.waypoint("005").is_none());

        assert_eq!(
            decode(decode_wpl, &mut states, "$GPWPL,4917.16,N,12310.64,W,"),
            Err(Error::NoData)
        );
    }

    #[test]
    fn test_wpl_full_list_drops_oldest() {
        let mut states = ModuleStates::default();

        for n in 0..=MAX_WAYPOINTS {
            let sentence = format!("$GPWPL,4917.16,N,12310.64,W,WP{n}");
            decode(decode_wpl, &mut states, &sentence).unwrap();
        }

        let waypoint = &states.waypoint;
        assert_eq!(waypoint.waypoints.len(), MAX_WAYPOINTS);
        assert!(waypoint.waypoint("WP0").is_none());
        assert!(waypoint.waypoint("WP16").is_some());
    }

    #[test]
    fn test_rte() {
        let mut states = ModuleStates::default();

        decode(decode_rte, &mut states, "$GPRTE,2,1,c,0,PBRCPK,PBRTO,PTELGR,PPLAND").unwrap();
        decode(decode_rte, &mut states, "$GPRTE,2,2,c,0,PCRESY,GRYRIE").unwrap();

        let route = &states.waypoint.route;
        assert_eq!(route.total_sentences, Some(2));
        assert_eq!(route.sentence_number, Some(2));
        assert_eq!(route.mode, Some(RouteMode::Complete));
        assert_eq!(route.id.as_deref(), Some("0"));
        let ids: Vec<&str> = route.waypoints.iter().map(|w| w.as_str()).collect();
        assert_eq!(
            ids,
            ["PBRCPK", "PBRTO", "PTELGR", "PPLAND", "PCRESY", "GRYRIE"]
        );

        decode(decode_rte, &mut states, "$GPRTE,1,1,w,1,A,B").unwrap();
        assert_eq!(states.waypoint.route.waypoints.len(), 2);
        assert_eq!(states.waypoint.route.mode, Some(RouteMode::Working));
    }
}
