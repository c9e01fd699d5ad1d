use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wms_core::TenantId;

use crate::Event;

/// Envelope for an event, containing multi-tenant + stream metadata.
///
/// Notes:
/// - **Multi-tenancy** is enforced here via `tenant_id`.
/// - `stream_key` is the partition key downstream consumers order by
///   (for putaway events, the stock item id).
/// - `sequence_number` orders envelopes produced by the same call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    tenant_id: TenantId,

    event_type: String,
    event_version: u32,
    stream_key: String,

    sequence_number: u64,

    payload: E,
}

impl<E: Event> EventEnvelope<E> {
    /// Wrap `payload`, copying its type and schema version into the envelope header.
    pub fn new(
        event_id: Uuid,
        tenant_id: TenantId,
        stream_key: impl Into<String>,
        sequence_number: u64,
        payload: E,
    ) -> Self {
        Self {
            event_id,
            tenant_id,
            event_type: payload.event_type().to_string(),
            event_version: payload.version(),
            stream_key: stream_key.into(),
            sequence_number,
            payload,
        }
    }
}

impl<E> EventEnvelope<E> {
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn event_version(&self) -> u32 {
        self.event_version
    }

    pub fn stream_key(&self) -> &str {
        &self.stream_key
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}

impl<E: Serialize> EventEnvelope<E> {
    /// Serialize the whole envelope (header + payload) for a message broker.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Ping {
        at: DateTime<Utc>,
    }

    impl Event for Ping {
        fn event_type(&self) -> &'static str {
            "test.ping"
        }

        fn version(&self) -> u32 {
            2
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            self.at
        }
    }

    #[test]
    fn header_is_copied_from_payload() {
        let tenant_id = TenantId::new();
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();
        let envelope = EventEnvelope::new(Uuid::now_v7(), tenant_id, "S1", 0, Ping { at });

        assert_eq!(envelope.event_type(), "test.ping");
        assert_eq!(envelope.event_version(), 2);
        assert_eq!(envelope.stream_key(), "S1");
        assert_eq!(envelope.tenant_id(), tenant_id);
        assert_eq!(envelope.payload().occurred_at(), at);
    }

    #[test]
    fn to_json_contains_header_and_payload() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();
        let envelope = EventEnvelope::new(Uuid::now_v7(), TenantId::new(), "S1", 3, Ping { at });

        let json = envelope.to_json().unwrap();
        assert_eq!(json["event_type"], "test.ping");
        assert_eq!(json["sequence_number"], 3);
        assert!(json["payload"]["at"].is_string());
    }
}
