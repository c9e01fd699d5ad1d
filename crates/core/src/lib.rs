//! `wms-core` — domain foundation building blocks for the warehouse core.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, strongly-typed identifiers and the entity / value-object
//! markers shared by the location, stock and putaway crates.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{LocationId, StockItemId, TenantId};
pub use value_object::ValueObject;
