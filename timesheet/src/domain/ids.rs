use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a logged activity.
///
/// Assigned by the store when the entry is created and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(u64);

impl ActivityId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ActivityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ActivityId> for u64 {
    fn from(id: ActivityId) -> Self {
        id.0
    }
}

/// Key of a case in the reference list.
///
/// Wraps String as cases are keyed by labels like "SAK 67".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(String);

impl CaseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CaseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for CaseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CaseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_id_serializes_as_plain_string() {
        let id = CaseId::new("SAK 67");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""SAK 67""#);
    }

    #[test]
    fn activity_id_orders_by_value() {
        assert!(ActivityId::new(2) > ActivityId::new(1));
        assert_eq!(u64::from(ActivityId::from(7)), 7);
    }
}
