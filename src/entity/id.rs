//! Record identifier generation
//!
//! Identifiers are random and are not checked against ids already present
//! in an entity.

use std::fmt;

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of identifiers produced by [`IdStrategy::Alphanumeric`]
pub const ALPHANUMERIC_ID_LEN: usize = 10;

/// How new record identifiers are produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID v4, e.g. `1f0e3dad-9990-4b2c-8a71-0c2d2c0f4e11`
    #[default]
    Uuid,
    /// Fixed-length string over `[A-Za-z0-9]`
    Alphanumeric,
}

impl IdStrategy {
    /// Produce a fresh identifier
    pub fn generate(&self) -> String {
        match self {
            IdStrategy::Uuid => Uuid::new_v4().to_string(),
            IdStrategy::Alphanumeric => rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(ALPHANUMERIC_ID_LEN)
                .map(char::from)
                .collect(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Uuid => "uuid",
            IdStrategy::Alphanumeric => "alphanumeric",
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_parse_as_uuid() {
        let id = IdStrategy::Uuid.generate();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(id.split('-').count(), 5);
    }

    #[test]
    fn test_alphanumeric_ids_have_fixed_length() {
        for _ in 0..50 {
            let id = IdStrategy::Alphanumeric.generate();
            assert_eq!(id.len(), ALPHANUMERIC_ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_ids_do_not_repeat() {
        for strategy in [IdStrategy::Uuid, IdStrategy::Alphanumeric] {
            let ids: HashSet<String> = (0..1000).map(|_| strategy.generate()).collect();
            assert_eq!(ids.len(), 1000);
        }
    }

    #[test]
    fn test_strategy_serde_names() {
        let s: IdStrategy = serde_json::from_str("\"alphanumeric\"").unwrap();
        assert_eq!(s, IdStrategy::Alphanumeric);
        assert_eq!(serde_json::to_string(&IdStrategy::Uuid).unwrap(), "\"uuid\"");
    }
}
