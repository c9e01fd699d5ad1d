//! FEFO (first-expiring-first-out) putaway.
//!
//! Given a batch of stock lines and a snapshot of candidate locations, decide
//! which location each line goes to:
//! - lines closest to expiry are placed first, into the locations closest to
//!   the picking zone;
//! - a location is never filled beyond its maximum quantity;
//! - partially filled locations are topped off before empty ones are opened.
//!
//! The engine is a pure, synchronous computation. It does not read or write
//! any store, and a line it cannot place is simply missing from the result.

pub mod config;
pub mod engine;
pub mod events;
pub mod ledger;
pub mod ordering;
pub mod outcome;

pub use config::PutawayConfig;
pub use engine::{AssignmentMap, FefoAssignmentEngine, assign_locations_fefo};
pub use events::{PutawayEvent, StockAssignedToLocation, StockLeftUnassigned};
pub use ledger::CapacityLedger;
pub use outcome::AssignmentOutcome;
