//! Proximity ranking: how far a location is from the picking zone.
//!
//! Lower ranks are closer and get filled first. The zone-letter distance is a
//! stand-in for real warehouse topology; anything implementing
//! [`ProximityRanker`] (including a plain closure) can replace it without
//! touching the matching loop.

use crate::Location;

/// Rank given to locations whose position cannot be determined.
pub const UNRANKED: u32 = u32::MAX;

/// Scores a location's distance from the picking zone (lower = closer).
pub trait ProximityRanker {
    fn rank(&self, location: &Location) -> u32;
}

impl<F> ProximityRanker for F
where
    F: Fn(&Location) -> u32,
{
    fn rank(&self, location: &Location) -> u32 {
        self(location)
    }
}

/// Distance between the first letter of a location's zone and the picking zone.
///
/// - no coordinates, or a blank zone: [`UNRANKED`]
/// - zone equal to the picking zone (ASCII case-insensitive): `0`
/// - otherwise `|first_char - picking_zone|` (`"B"` → 1, `"C"` → 2 for picking zone `A`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneDistanceRanker {
    picking_zone: char,
}

impl ZoneDistanceRanker {
    pub fn new(picking_zone: char) -> Self {
        Self { picking_zone }
    }
}

impl Default for ZoneDistanceRanker {
    fn default() -> Self {
        Self::new('A')
    }
}

impl ProximityRanker for ZoneDistanceRanker {
    fn rank(&self, location: &Location) -> u32 {
        let Some(zone) = location.zone() else {
            return UNRANKED;
        };
        let Some(first) = zone.chars().next() else {
            return UNRANKED;
        };

        let mut picking = [0u8; 4];
        if zone.eq_ignore_ascii_case(self.picking_zone.encode_utf8(&mut picking)) {
            return 0;
        }

        (first as u32).abs_diff(self.picking_zone as u32)
    }
}
