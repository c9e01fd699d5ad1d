//! Storage location model (read-only snapshots) and proximity ranking.
//!
//! Locations are created and updated by the location-management service; this
//! crate only describes the snapshot the putaway engine reasons over.

pub mod location;
pub mod proximity;

pub use location::{Location, LocationCapacity, LocationCoordinates, LocationStatus};
pub use proximity::{ProximityRanker, ZoneDistanceRanker, UNRANKED};
