//! Per-call bookkeeping of what has been routed where.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use wms_core::{Entity, LocationId};
use wms_location::Location;

/// Quantities routed to each location during one assignment call.
///
/// Location snapshots stay untouched; every capacity question the engine asks
/// goes through the ledger, which adds the quantity already routed in this
/// call on top of the snapshot. A ledger is created per call and dropped with
/// it, so nothing leaks between batches.
#[derive(Debug, Clone, Default)]
pub struct CapacityLedger {
    routed: HashMap<LocationId, Decimal>,
    full: HashSet<LocationId>,
}

impl CapacityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity routed to `location_id` so far in this call.
    pub fn routed(&self, location_id: &LocationId) -> Decimal {
        self.routed.get(location_id).copied().unwrap_or(Decimal::ZERO)
    }

    /// Snapshot quantity plus what this call has already routed there.
    pub fn current_quantity(&self, location: &Location) -> Decimal {
        location.current_quantity() + self.routed(location.id())
    }

    /// Remaining room after this call's placements; `None` when unlimited.
    pub fn available_capacity(&self, location: &Location) -> Option<Decimal> {
        location
            .maximum_quantity()
            .map(|max| max - self.current_quantity(location))
    }

    pub fn is_empty(&self, location: &Location) -> bool {
        self.current_quantity(location).is_zero()
    }

    pub fn has_capacity(&self, location: &Location, quantity: Decimal) -> bool {
        match self.available_capacity(location) {
            None => true,
            Some(available) => available >= quantity,
        }
    }

    pub fn is_full(&self, location_id: &LocationId) -> bool {
        self.full.contains(location_id)
    }

    /// Route `quantity` into `location`. Returns `true` when this fills it up.
    ///
    /// Unlimited locations never fill up.
    pub fn record(&mut self, location: &Location, quantity: Decimal) -> bool {
        let id = location.location_id();
        *self.routed.entry(id).or_insert(Decimal::ZERO) += quantity;

        let Some(max) = location.maximum_quantity() else {
            return false;
        };
        if self.current_quantity(location) >= max {
            self.full.insert(id);
            return true;
        }
        false
    }
}
