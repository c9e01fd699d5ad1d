//! Domain events and the envelope they travel in.
//!
//! The putaway core never publishes anything itself. It hands these types to
//! the caller, which persists assignments and forwards envelopes to the broker.

pub mod envelope;
pub mod event;
pub mod tenant;

pub use envelope::EventEnvelope;
pub use event::Event;
pub use tenant::TenantScoped;
