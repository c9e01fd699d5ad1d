use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wms_core::{LocationId, StockItemId, TenantId};
use wms_events::EventEnvelope;

use crate::engine::AssignmentMap;
use crate::events::{PutawayEvent, StockAssignedToLocation, StockLeftUnassigned};

/// Everything one assignment call decided, including what it could not place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentOutcome {
    /// Stock item → chosen location.
    pub assignments: AssignmentMap,
    /// Assignable lines no location could take, in FEFO order.
    pub unassigned: Vec<StockItemId>,
    /// Lines skipped because they are classified as expired, in input order.
    pub excluded_expired: Vec<StockItemId>,
    /// Quantity of every line that was considered (assigned or unassigned).
    #[serde(default)]
    pub quantities: BTreeMap<StockItemId, Decimal>,
}

impl AssignmentOutcome {
    pub fn assigned_count(&self) -> usize {
        self.assignments.len()
    }

    /// True when every non-expired line found a location.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    pub fn location_for(&self, stock_item_id: &StockItemId) -> Option<LocationId> {
        self.assignments.get(stock_item_id).copied()
    }

    pub fn into_assignments(self) -> AssignmentMap {
        self.assignments
    }

    /// Domain events for the caller to publish once the assignments are persisted.
    ///
    /// Assigned lines come first (ordered by stock item id), then unassigned
    /// lines in FEFO order. Expired lines produce no event.
    pub fn to_events(
        &self,
        tenant_id: TenantId,
        occurred_at: DateTime<Utc>,
    ) -> Vec<PutawayEvent> {
        let quantity_of =
            |id: &StockItemId| self.quantities.get(id).copied().unwrap_or(Decimal::ZERO);

        let assigned = self.assignments.iter().map(|(stock_item_id, location_id)| {
            PutawayEvent::StockAssignedToLocation(StockAssignedToLocation {
                tenant_id,
                stock_item_id: stock_item_id.clone(),
                location_id: *location_id,
                quantity: quantity_of(stock_item_id),
                occurred_at,
            })
        });
        let unassigned = self.unassigned.iter().map(|stock_item_id| {
            PutawayEvent::StockLeftUnassigned(StockLeftUnassigned {
                tenant_id,
                stock_item_id: stock_item_id.clone(),
                quantity: quantity_of(stock_item_id),
                occurred_at,
            })
        });

        assigned.chain(unassigned).collect()
    }

    /// [`Self::to_events`] wrapped in envelopes keyed by stock item id.
    pub fn to_envelopes(
        &self,
        tenant_id: TenantId,
        occurred_at: DateTime<Utc>,
    ) -> Vec<EventEnvelope<PutawayEvent>> {
        self.to_events(tenant_id, occurred_at)
            .into_iter()
            .enumerate()
            .map(|(seq, event)| {
                let stream_key = event.stock_item_id().to_string();
                EventEnvelope::new(Uuid::now_v7(), tenant_id, stream_key, seq as u64, event)
            })
            .collect()
    }
}
