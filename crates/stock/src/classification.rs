use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use wms_core::{DomainError, DomainResult};

/// Shelf-life bucket of a stock line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockClassification {
    Expired,
    Critical,
    NearExpiry,
    Normal,
    ExtendedShelfLife,
}

impl StockClassification {
    /// Expired stock can never be shelved.
    pub fn is_assignable(self) -> bool {
        self != StockClassification::Expired
    }
}

/// Day thresholds used to bucket stock by remaining shelf life.
///
/// With `today` as reference and `days = expiration_date - today`:
/// - `days < 0`: `Expired`
/// - `days <= critical_days`: `Critical`
/// - `days <= near_expiry_days`: `NearExpiry`
/// - `days > extended_shelf_life_days`: `ExtendedShelfLife`
/// - otherwise, and for stock without an expiration date: `Normal`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpiryClassificationPolicy {
    pub critical_days: u32,
    pub near_expiry_days: u32,
    pub extended_shelf_life_days: u32,
}

impl Default for ExpiryClassificationPolicy {
    fn default() -> Self {
        Self {
            critical_days: 7,
            near_expiry_days: 30,
            extended_shelf_life_days: 365,
        }
    }
}

impl ExpiryClassificationPolicy {
    pub fn new(
        critical_days: u32,
        near_expiry_days: u32,
        extended_shelf_life_days: u32,
    ) -> DomainResult<Self> {
        let policy = Self {
            critical_days,
            near_expiry_days,
            extended_shelf_life_days,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Thresholds must be strictly ascending.
    pub fn validate(&self) -> DomainResult<()> {
        if self.critical_days >= self.near_expiry_days {
            return Err(DomainError::invalid_input(
                "critical_days must be lower than near_expiry_days",
            ));
        }
        if self.near_expiry_days >= self.extended_shelf_life_days {
            return Err(DomainError::invalid_input(
                "near_expiry_days must be lower than extended_shelf_life_days",
            ));
        }
        Ok(())
    }

    pub fn classify(
        &self,
        expiration_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> StockClassification {
        let Some(expiration_date) = expiration_date else {
            return StockClassification::Normal;
        };

        let days = (expiration_date - today).num_days();
        if days < 0 {
            StockClassification::Expired
        } else if days <= i64::from(self.critical_days) {
            StockClassification::Critical
        } else if days <= i64::from(self.near_expiry_days) {
            StockClassification::NearExpiry
        } else if days > i64::from(self.extended_shelf_life_days) {
            StockClassification::ExtendedShelfLife
        } else {
            StockClassification::Normal
        }
    }
}
