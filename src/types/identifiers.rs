//! Unique identifier types for the account simulator
//!
//! This module contains the UUID-based run identifier used to correlate
//! log output and summaries belonging to a single generation run.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Create a new random run ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RUN_{}", self.0.simple())
    }
}

impl Serialize for RunId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("RUN_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for RunId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if let Some(uuid_str) = s.strip_prefix("RUN_") {
            let uuid = Uuid::parse_str(uuid_str).map_err(serde::de::Error::custom)?;
            Ok(RunId(uuid))
        } else {
            // Fallback: try to parse as raw UUID for backward compatibility
            let uuid = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
            Ok(RunId(uuid))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_id_creation() {
        let id1 = RunId::new();
        let id2 = RunId::new();

        // IDs should be unique
        assert_ne!(id1, id2);

        // Default should create a new ID
        let id3 = RunId::default();
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_run_id_display() {
        let id = RunId::new();
        let display_str = format!("{}", id);

        // Should start with RUN_ prefix
        assert!(display_str.starts_with("RUN_"));

        // Should be 36 characters total (RUN_ + 32 hex chars)
        assert_eq!(display_str.len(), 36);
    }

    #[test]
    fn test_run_id_serialization() {
        let run_id = RunId::new();

        let run_json = serde_json::to_string(&run_id).unwrap();
        assert!(run_json.contains("RUN_"));
        let deserialized: RunId = serde_json::from_str(&run_json).unwrap();
        assert_eq!(run_id, deserialized);
    }

    #[test]
    fn test_run_id_deserialization_backward_compatibility() {
        // Raw UUIDs without the prefix should still deserialize
        let raw_uuid = Uuid::new_v4();
        let raw_uuid_str = format!("\"{}\"", raw_uuid);

        let run_id: RunId = serde_json::from_str(&raw_uuid_str).unwrap();
        assert_eq!(run_id.0, raw_uuid);
    }

    #[test]
    fn test_run_id_deserialization_with_prefix() {
        let raw_uuid = Uuid::new_v4();

        let run_json = format!("\"RUN_{}\"", raw_uuid.simple());
        let run_id: RunId = serde_json::from_str(&run_json).unwrap();
        assert_eq!(run_id.0, raw_uuid);
    }

    #[test]
    fn test_run_id_hash_and_equality() {
        use std::collections::HashSet;

        let id1 = RunId::new();
        let id2 = RunId::new();
        let id1_copy = RunId(id1.0);

        // Same ID should be equal
        assert_eq!(id1, id1_copy);

        // Different IDs should not be equal
        assert_ne!(id1, id2);

        // IDs should work in hash collections
        let mut set = HashSet::new();
        set.insert(id1);
        set.insert(id2);
        set.insert(id1_copy); // Should not increase size

        assert_eq!(set.len(), 2);
        assert!(set.contains(&id1));
        assert!(set.contains(&id2));
    }
}
