use serde::{Deserialize, Serialize};

use super::CaseId;

/// A billing matter hours are logged against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub description: String,
}

impl Case {
    pub fn new(id: impl Into<CaseId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }

    /// "SAK 67 - Tvangfravikelse"
    pub fn label(&self) -> String {
        format!("{} - {}", self.id, self.description)
    }
}
