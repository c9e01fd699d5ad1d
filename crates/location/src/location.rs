use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wms_core::{DomainError, DomainResult, Entity, LocationId, ValueObject};

/// Position of a location in the zone / aisle / rack / level hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationCoordinates {
    pub zone: String,
    pub aisle: String,
    pub rack: String,
    pub level: String,
}

impl LocationCoordinates {
    pub fn new(
        zone: impl Into<String>,
        aisle: impl Into<String>,
        rack: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            zone: zone.into(),
            aisle: aisle.into(),
            rack: rack.into(),
            level: level.into(),
        }
    }

    /// Coordinates that only pin the zone (aisle/rack/level left blank).
    pub fn in_zone(zone: impl Into<String>) -> Self {
        Self::new(zone, "", "", "")
    }
}

impl ValueObject for LocationCoordinates {}

impl core::fmt::Display for LocationCoordinates {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{}-{}-{}", self.zone, self.aisle, self.rack, self.level)
    }
}

/// Location status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationStatus {
    Available,
    Occupied,
    Reserved,
    Blocked,
}

impl LocationStatus {
    /// Statuses the putaway engine may route stock into.
    pub fn is_assignable(self) -> bool {
        matches!(self, LocationStatus::Available | LocationStatus::Reserved)
    }
}

/// Current and maximum quantity held by a location.
///
/// `maximum_quantity == None` means the location has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLocationCapacity")]
pub struct LocationCapacity {
    current_quantity: Decimal,
    maximum_quantity: Option<Decimal>,
}

#[derive(Deserialize)]
struct RawLocationCapacity {
    current_quantity: Decimal,
    maximum_quantity: Option<Decimal>,
}

impl TryFrom<RawLocationCapacity> for LocationCapacity {
    type Error = DomainError;

    fn try_from(raw: RawLocationCapacity) -> DomainResult<Self> {
        Self::new(raw.current_quantity, raw.maximum_quantity)
    }
}

impl LocationCapacity {
    pub fn new(current_quantity: Decimal, maximum_quantity: Option<Decimal>) -> DomainResult<Self> {
        if current_quantity < Decimal::ZERO {
            return Err(DomainError::invalid_input("current quantity cannot be negative"));
        }
        if let Some(max) = maximum_quantity {
            if max < Decimal::ZERO {
                return Err(DomainError::invalid_input("maximum quantity cannot be negative"));
            }
            if current_quantity > max {
                return Err(DomainError::invalid_input(format!(
                    "current quantity {current_quantity} exceeds maximum quantity {max}"
                )));
            }
        }
        Ok(Self {
            current_quantity,
            maximum_quantity,
        })
    }

    pub fn bounded(current_quantity: Decimal, maximum_quantity: Decimal) -> DomainResult<Self> {
        Self::new(current_quantity, Some(maximum_quantity))
    }

    pub fn unlimited(current_quantity: Decimal) -> DomainResult<Self> {
        Self::new(current_quantity, None)
    }

    pub fn current_quantity(&self) -> Decimal {
        self.current_quantity
    }

    pub fn maximum_quantity(&self) -> Option<Decimal> {
        self.maximum_quantity
    }

    pub fn is_unlimited(&self) -> bool {
        self.maximum_quantity.is_none()
    }

    /// Remaining room; `None` when unlimited.
    pub fn available_capacity(&self) -> Option<Decimal> {
        self.maximum_quantity.map(|max| max - self.current_quantity)
    }
}

impl ValueObject for LocationCapacity {}

/// Snapshot of a physical storage slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    id: LocationId,
    coordinates: Option<LocationCoordinates>,
    status: LocationStatus,
    capacity: Option<LocationCapacity>,
}

impl Location {
    /// A location with no coordinates and no capacity record (unlimited, empty).
    pub fn new(id: LocationId, status: LocationStatus) -> Self {
        Self {
            id,
            coordinates: None,
            status,
            capacity: None,
        }
    }

    pub fn with_coordinates(mut self, coordinates: LocationCoordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn with_capacity(mut self, capacity: LocationCapacity) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_status(mut self, status: LocationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn location_id(&self) -> LocationId {
        self.id
    }

    pub fn coordinates(&self) -> Option<&LocationCoordinates> {
        self.coordinates.as_ref()
    }

    pub fn zone(&self) -> Option<&str> {
        self.coordinates.as_ref().map(|c| c.zone.as_str())
    }

    pub fn status(&self) -> LocationStatus {
        self.status
    }

    pub fn capacity(&self) -> Option<&LocationCapacity> {
        self.capacity.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.status == LocationStatus::Available
    }

    /// Eligible as a putaway target (available or reserved).
    pub fn is_assignable(&self) -> bool {
        self.status.is_assignable()
    }

    /// Empty when there is no capacity record or nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.current_quantity().is_zero()
    }

    pub fn current_quantity(&self) -> Decimal {
        self.capacity
            .map(|c| c.current_quantity())
            .unwrap_or(Decimal::ZERO)
    }

    pub fn maximum_quantity(&self) -> Option<Decimal> {
        self.capacity.and_then(|c| c.maximum_quantity())
    }

    pub fn has_unlimited_capacity(&self) -> bool {
        self.maximum_quantity().is_none()
    }

    /// Remaining room; `None` when unlimited.
    pub fn available_capacity(&self) -> Option<Decimal> {
        self.capacity.and_then(|c| c.available_capacity())
    }

    pub fn has_capacity(&self, quantity: Decimal) -> bool {
        match self.available_capacity() {
            None => true,
            Some(available) => available >= quantity,
        }
    }
}

impl Entity for Location {
    type Id = LocationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
