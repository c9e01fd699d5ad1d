use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wms_core::{DomainError, DomainResult, StockItemId};

use crate::{ExpiryClassificationPolicy, StockClassification};

/// One stock line to be placed into a location.
///
/// Deserialization goes through [`StockItemAssignmentRequest::new`], so a
/// decoded request always carries a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStockItemAssignmentRequest")]
pub struct StockItemAssignmentRequest {
    stock_item_id: StockItemId,
    quantity: Decimal,
    /// `None` for non-perishable stock.
    expiration_date: Option<NaiveDate>,
    classification: StockClassification,
}

/// Wire shape of a request before validation.
#[derive(Deserialize)]
struct RawStockItemAssignmentRequest {
    stock_item_id: StockItemId,
    quantity: Decimal,
    expiration_date: Option<NaiveDate>,
    classification: StockClassification,
}

impl TryFrom<RawStockItemAssignmentRequest> for StockItemAssignmentRequest {
    type Error = DomainError;

    fn try_from(raw: RawStockItemAssignmentRequest) -> DomainResult<Self> {
        Self::new(
            raw.stock_item_id,
            raw.quantity,
            raw.expiration_date,
            raw.classification,
        )
    }
}

impl StockItemAssignmentRequest {
    pub fn new(
        stock_item_id: StockItemId,
        quantity: Decimal,
        expiration_date: Option<NaiveDate>,
        classification: StockClassification,
    ) -> DomainResult<Self> {
        if quantity <= Decimal::ZERO {
            return Err(DomainError::invalid_input(format!(
                "quantity for stock item {stock_item_id} must be positive"
            )));
        }
        Ok(Self {
            stock_item_id,
            quantity,
            expiration_date,
            classification,
        })
    }

    /// Build a request whose classification is derived from its expiry date.
    pub fn classified(
        stock_item_id: StockItemId,
        quantity: Decimal,
        expiration_date: Option<NaiveDate>,
        policy: &ExpiryClassificationPolicy,
        today: NaiveDate,
    ) -> DomainResult<Self> {
        let classification = policy.classify(expiration_date, today);
        Self::new(stock_item_id, quantity, expiration_date, classification)
    }

    pub fn stock_item_id(&self) -> &StockItemId {
        &self.stock_item_id
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn expiration_date(&self) -> Option<NaiveDate> {
        self.expiration_date
    }

    pub fn classification(&self) -> StockClassification {
        self.classification
    }

    pub fn is_perishable(&self) -> bool {
        self.expiration_date.is_some()
    }

    pub fn is_assignable(&self) -> bool {
        self.classification.is_assignable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> StockItemId {
        StockItemId::new(s).unwrap()
    }

    #[test]
    fn rejects_zero_and_negative_quantity() {
        for qty in [Decimal::ZERO, Decimal::from(-3)] {
            let err =
                StockItemAssignmentRequest::new(id("S1"), qty, None, StockClassification::Normal)
                    .unwrap_err();
            match err {
                DomainError::InvalidInput(msg) if msg.contains("must be positive") => {}
                _ => panic!("Expected InvalidInput for non-positive quantity"),
            }
        }
    }

    #[test]
    fn accepts_fractional_quantity() {
        let request = StockItemAssignmentRequest::new(
            id("S1"),
            Decimal::new(25, 1),
            None,
            StockClassification::Normal,
        )
        .unwrap();
        assert_eq!(request.quantity(), Decimal::new(25, 1));
        assert!(!request.is_perishable());
    }

    #[test]
    fn classified_derives_bucket_from_expiry() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let expired = StockItemAssignmentRequest::classified(
            id("S1"),
            Decimal::ONE,
            NaiveDate::from_ymd_opt(2025, 2, 28),
            &ExpiryClassificationPolicy::default(),
            today,
        )
        .unwrap();
        assert_eq!(expired.classification(), StockClassification::Expired);
        assert!(!expired.is_assignable());
        assert!(expired.is_perishable());
    }

    #[test]
    fn deserializes_from_json_line() {
        let json = r#"{
            "stock_item_id": "S9",
            "quantity": "12.5",
            "expiration_date": "2025-06-30",
            "classification": "CRITICAL"
        }"#;
        let request: StockItemAssignmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.stock_item_id().as_str(), "S9");
        assert_eq!(request.quantity(), Decimal::new(125, 1));
        assert_eq!(request.classification(), StockClassification::Critical);
    }

    #[test]
    fn deserialize_rejects_non_positive_quantity() {
        for qty in ["-10", "0"] {
            let json = serde_json::json!({
                "stock_item_id": "N",
                "quantity": qty,
                "expiration_date": "2025-01-01",
                "classification": "NORMAL"
            });
            let err = serde_json::from_value::<StockItemAssignmentRequest>(json).unwrap_err();
            assert!(err.to_string().contains("must be positive"), "{err}");
        }
    }
}
