use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wms_core::{LocationId, StockItemId, TenantId};
use wms_events::Event;

/// Event: StockAssignedToLocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAssignedToLocation {
    pub tenant_id: TenantId,
    pub stock_item_id: StockItemId,
    pub location_id: LocationId,
    pub quantity: Decimal,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockLeftUnassigned.
///
/// No location in the batch could take the line; it stays where it is and is
/// expected to be retried in a later batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLeftUnassigned {
    pub tenant_id: TenantId,
    pub stock_item_id: StockItemId,
    pub quantity: Decimal,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PutawayEvent {
    StockAssignedToLocation(StockAssignedToLocation),
    StockLeftUnassigned(StockLeftUnassigned),
}

impl PutawayEvent {
    pub fn stock_item_id(&self) -> &StockItemId {
        match self {
            PutawayEvent::StockAssignedToLocation(e) => &e.stock_item_id,
            PutawayEvent::StockLeftUnassigned(e) => &e.stock_item_id,
        }
    }
}

impl Event for PutawayEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PutawayEvent::StockAssignedToLocation(_) => "putaway.stock.assigned",
            PutawayEvent::StockLeftUnassigned(_) => "putaway.stock.unassigned",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            PutawayEvent::StockAssignedToLocation(e) => e.occurred_at,
            PutawayEvent::StockLeftUnassigned(e) => e.occurred_at,
        }
    }
}
