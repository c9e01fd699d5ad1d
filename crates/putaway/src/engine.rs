use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use wms_core::{DomainError, DomainResult, Entity, LocationId, StockItemId};
use wms_location::{Location, ProximityRanker, ZoneDistanceRanker};
use wms_stock::StockItemAssignmentRequest;

use crate::config::PutawayConfig;
use crate::ledger::CapacityLedger;
use crate::ordering::{fefo_order, proximity_order};
use crate::outcome::AssignmentOutcome;

/// Stock item → location chosen for it. Ordered for reproducible iteration.
pub type AssignmentMap = BTreeMap<StockItemId, LocationId>;

/// Assign locations using the default zone-distance ranker (picking zone `A`).
///
/// See [`FefoAssignmentEngine::assign`].
pub fn assign_locations_fefo(
    requests: &[StockItemAssignmentRequest],
    locations: &[Location],
) -> DomainResult<AssignmentMap> {
    FefoAssignmentEngine::new().assign(requests, locations)
}

/// Greedy FEFO putaway over one batch.
///
/// Model:
/// - Drop expired lines, order the rest earliest-expiry first.
/// - Keep available/reserved locations, order them by proximity rank.
/// - For each line pick, in order of preference: the first location the line
///   fills exactly; a partially filled location (least room left wins); the
///   first empty location.
///
/// The heuristic never backtracks, so it is not a globally optimal matching.
/// The engine holds no state between calls and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct FefoAssignmentEngine<R = ZoneDistanceRanker> {
    ranker: R,
}

impl FefoAssignmentEngine<ZoneDistanceRanker> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PutawayConfig) -> Self {
        Self::with_ranker(ZoneDistanceRanker::new(config.picking_zone))
    }
}

impl<R: ProximityRanker> FefoAssignmentEngine<R> {
    pub fn with_ranker(ranker: R) -> Self {
        Self { ranker }
    }

    /// Assign each stock line to a location.
    ///
    /// Errors only when either input list is empty. Lines that find no room
    /// are left out of the map; that is a normal outcome, not a failure.
    pub fn assign(
        &self,
        requests: &[StockItemAssignmentRequest],
        locations: &[Location],
    ) -> DomainResult<AssignmentMap> {
        self.assign_with_outcome(requests, locations)
            .map(AssignmentOutcome::into_assignments)
    }

    /// Same as [`Self::assign`], also reporting unassigned and expired lines.
    #[instrument(
        level = "debug",
        skip_all,
        fields(requests = requests.len(), locations = locations.len())
    )]
    pub fn assign_with_outcome(
        &self,
        requests: &[StockItemAssignmentRequest],
        locations: &[Location],
    ) -> DomainResult<AssignmentOutcome> {
        if requests.is_empty() {
            return Err(DomainError::invalid_input("stock items list cannot be empty"));
        }
        if locations.is_empty() {
            return Err(DomainError::invalid_input(
                "available locations list cannot be empty",
            ));
        }

        let mut outcome = AssignmentOutcome {
            excluded_expired: requests
                .iter()
                .filter(|r| !r.is_assignable())
                .map(|r| r.stock_item_id().clone())
                .collect(),
            ..AssignmentOutcome::default()
        };

        let ordered_requests = fefo_order(requests);
        if ordered_requests.is_empty() {
            info!(
                expired = outcome.excluded_expired.len(),
                "all stock items are expired; nothing to assign"
            );
            return Ok(outcome);
        }

        let candidates = proximity_order(locations, &self.ranker);
        let mut ledger = CapacityLedger::new();

        for request in ordered_requests {
            let stock_item_id = request.stock_item_id();
            outcome
                .quantities
                .insert(stock_item_id.clone(), request.quantity());

            match select_location(request.quantity(), &candidates, &ledger) {
                Some(location) => {
                    let filled = ledger.record(location, request.quantity());
                    debug!(
                        stock_item_id = %stock_item_id,
                        location_id = %location.id(),
                        quantity = %request.quantity(),
                        filled,
                        "stock item assigned"
                    );
                    let previous = outcome
                        .assignments
                        .insert(stock_item_id.clone(), location.location_id());
                    if let Some(previous) = previous {
                        debug!(
                            stock_item_id = %stock_item_id,
                            previous_location_id = %previous,
                            "duplicate stock item id; earlier placement overwritten"
                        );
                    }
                }
                None => {
                    debug!(
                        stock_item_id = %stock_item_id,
                        quantity = %request.quantity(),
                        "no location with room for stock item"
                    );
                    outcome.unassigned.push(stock_item_id.clone());
                }
            }
        }

        info!(
            requested = requests.len(),
            assigned = outcome.assigned_count(),
            unassigned = outcome.unassigned.len(),
            expired = outcome.excluded_expired.len(),
            "fefo assignment finished"
        );

        Ok(outcome)
    }
}

/// A location that can take the line, with its state as seen through the ledger.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    location: &'a Location,
    /// `None` when unlimited.
    available: Option<Decimal>,
    empty: bool,
}

impl Candidate<'_> {
    /// Whether `self` should replace `other` as the best non-exact candidate.
    ///
    /// Partially filled beats empty; between partially filled ones the one with
    /// less room left wins (unlimited counts as the most room). Between empty
    /// ones the earlier (closer) one stays.
    fn beats(&self, other: &Candidate<'_>) -> bool {
        match (self.empty, other.empty) {
            (false, true) => true,
            (true, _) => false,
            (false, false) => match (self.available, other.available) {
                (Some(mine), Some(theirs)) => mine < theirs,
                (Some(_), None) => true,
                (None, _) => false,
            },
        }
    }
}

/// Pick the location for one line of `quantity` from `candidates` (proximity order).
fn select_location<'a>(
    quantity: Decimal,
    candidates: &[&'a Location],
    ledger: &CapacityLedger,
) -> Option<&'a Location> {
    let mut best: Option<Candidate<'a>> = None;

    for &location in candidates {
        if ledger.is_full(location.id()) || !ledger.has_capacity(location, quantity) {
            continue;
        }

        let available = ledger.available_capacity(location);
        if available == Some(quantity) {
            return Some(location);
        }

        let candidate = Candidate {
            location,
            available,
            empty: ledger.is_empty(location),
        };
        best = match best {
            Some(current) if !candidate.beats(&current) => Some(current),
            _ => Some(candidate),
        };
    }

    best.map(|c| c.location)
}
