//! Stock lines waiting for a storage location.
//!
//! Classification and expiry data are resolved by the stock service before the
//! lines reach the putaway engine; [`ExpiryClassificationPolicy`] is the rule
//! that service applies.

pub mod classification;
pub mod request;

pub use classification::{ExpiryClassificationPolicy, StockClassification};
pub use request::StockItemAssignmentRequest;
