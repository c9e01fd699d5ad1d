//! Putaway configuration.
//!
//! Read from the process environment:
//!
//! | variable | default |
//! |---|---|
//! | `WMS_PICKING_ZONE` | `A` |
//! | `WMS_CRITICAL_DAYS` | `7` |
//! | `WMS_NEAR_EXPIRY_DAYS` | `30` |
//! | `WMS_EXTENDED_SHELF_LIFE_DAYS` | `365` |

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use wms_core::{DomainError, DomainResult};
use wms_stock::ExpiryClassificationPolicy;

pub const PICKING_ZONE_VAR: &str = "WMS_PICKING_ZONE";
pub const CRITICAL_DAYS_VAR: &str = "WMS_CRITICAL_DAYS";
pub const NEAR_EXPIRY_DAYS_VAR: &str = "WMS_NEAR_EXPIRY_DAYS";
pub const EXTENDED_SHELF_LIFE_DAYS_VAR: &str = "WMS_EXTENDED_SHELF_LIFE_DAYS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PutawayConfig {
    /// Zone letter closest to the pick faces.
    pub picking_zone: char,
    pub classification: ExpiryClassificationPolicy,
}

impl Default for PutawayConfig {
    fn default() -> Self {
        Self {
            picking_zone: 'A',
            classification: ExpiryClassificationPolicy::default(),
        }
    }
}

impl PutawayConfig {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PICKING_ZONE_VAR) {
            config.picking_zone = parse_zone(&raw)?;
        }
        if let Some(raw) = lookup(CRITICAL_DAYS_VAR) {
            config.classification.critical_days = parse_var(CRITICAL_DAYS_VAR, &raw)?;
        }
        if let Some(raw) = lookup(NEAR_EXPIRY_DAYS_VAR) {
            config.classification.near_expiry_days = parse_var(NEAR_EXPIRY_DAYS_VAR, &raw)?;
        }
        if let Some(raw) = lookup(EXTENDED_SHELF_LIFE_DAYS_VAR) {
            config.classification.extended_shelf_life_days =
                parse_var(EXTENDED_SHELF_LIFE_DAYS_VAR, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !self.picking_zone.is_alphanumeric() {
            return Err(DomainError::invalid_input(format!(
                "{PICKING_ZONE_VAR} must be a letter or digit, got {:?}",
                self.picking_zone
            )));
        }
        self.classification.validate()
    }
}

fn parse_zone(raw: &str) -> DomainResult<char> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(zone), None) => Ok(zone.to_ascii_uppercase()),
        _ => Err(DomainError::invalid_input(format!(
            "{PICKING_ZONE_VAR} must be a single character, got {raw:?}"
        ))),
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> DomainResult<T>
where
    T::Err: core::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| DomainError::invalid_input(format!("{key}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = PutawayConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PutawayConfig::default());
        assert_eq!(config.picking_zone, 'A');
        assert_eq!(config.classification.near_expiry_days, 30);
    }

    #[test]
    fn reads_overrides() {
        let config = PutawayConfig::from_lookup(lookup(&[
            (PICKING_ZONE_VAR, " c "),
            (CRITICAL_DAYS_VAR, "3"),
            (NEAR_EXPIRY_DAYS_VAR, "14"),
            (EXTENDED_SHELF_LIFE_DAYS_VAR, "180"),
        ]))
        .unwrap();

        assert_eq!(config.picking_zone, 'C');
        assert_eq!(
            config.classification,
            ExpiryClassificationPolicy::new(3, 14, 180).unwrap()
        );
    }

    #[test]
    fn rejects_multi_character_zone() {
        let err = PutawayConfig::from_lookup(lookup(&[(PICKING_ZONE_VAR, "AB")])).unwrap_err();
        match err {
            DomainError::InvalidInput(msg) if msg.contains(PICKING_ZONE_VAR) => {}
            _ => panic!("Expected InvalidInput for a multi-character zone"),
        }
    }

    #[test]
    fn rejects_non_numeric_days() {
        let err = PutawayConfig::from_lookup(lookup(&[(CRITICAL_DAYS_VAR, "soon")])).unwrap_err();
        match err {
            DomainError::InvalidInput(msg) if msg.starts_with(CRITICAL_DAYS_VAR) => {}
            _ => panic!("Expected InvalidInput for non-numeric days"),
        }
    }

    #[test]
    fn rejects_thresholds_out_of_order() {
        let result = PutawayConfig::from_lookup(lookup(&[(NEAR_EXPIRY_DAYS_VAR, "5")]));
        assert!(result.is_err());
    }

    #[test]
    fn deserializes_partial_json_with_defaults() {
        let config: PutawayConfig = serde_json::from_str(r#"{"picking_zone":"B"}"#).unwrap();
        assert_eq!(config.picking_zone, 'B');
        assert_eq!(config.classification, ExpiryClassificationPolicy::default());
    }
}
