//! Static lists the sheet is built around: cases and activity types.

use std::collections::HashSet;

use time::Date;

use crate::{ActivityDraft, Case, CaseId, Hours, ReferenceError, Week};

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    cases: Vec<Case>,
    activity_types: Vec<String>,
}

impl ReferenceData {
    /// Validate and normalize the lists. Activity type labels are trimmed.
    pub fn new(cases: Vec<Case>, activity_types: Vec<String>) -> Result<Self, ReferenceError> {
        if cases.is_empty() {
            return Err(ReferenceError::NoCases);
        }

        let mut seen = HashSet::new();
        for case in &cases {
            if !seen.insert(&case.id) {
                return Err(ReferenceError::DuplicateCase(case.id.clone()));
            }
        }

        let mut types = Vec::with_capacity(activity_types.len());
        for label in activity_types {
            let label = label.trim().to_string();
            if label.is_empty() {
                return Err(ReferenceError::BlankActivityType);
            }
            if types.contains(&label) {
                return Err(ReferenceError::DuplicateActivityType(label));
            }
            types.push(label);
        }

        Ok(Self {
            cases,
            activity_types: types,
        })
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn activity_types(&self) -> &[String] {
        &self.activity_types
    }

    pub fn case(&self, id: &CaseId) -> Option<&Case> {
        self.cases.iter().find(|c| &c.id == id)
    }

    /// Display label for a case id; falls back to the bare id for entries
    /// whose case is not configured.
    pub fn case_label(&self, id: &CaseId) -> String {
        self.case(id)
            .map(Case::label)
            .unwrap_or_else(|| id.to_string())
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            cases: default_cases(),
            activity_types: default_activity_types(),
        }
    }
}

pub fn default_cases() -> Vec<Case> {
    vec![
        Case::new("SAK 67", "Tvangfravikelse"),
        Case::new("SAK 9", "Drap"),
        Case::new("SAK 8", "Overprøving Tingretten"),
        Case::new("SAK 266", "Erstatningskrav"),
    ]
}

pub fn default_activity_types() -> Vec<String> {
    [
        "Juridisk Bistand",
        "Forhandlinger",
        "Kommunikasjon",
        "Undersøkelse",
        "Reisetid",
        "Mekling",
        "Kontraksgjennomgang",
        "Admin",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Demo entries placed in the given week, used when no seed is configured.
pub fn sample_seed(week: &Week) -> Vec<ActivityDraft> {
    let [monday, tuesday, wednesday, ..] = week.dates();
    vec![
        sample(
            "SAK 67",
            monday,
            10,
            "Tvangsfravikelse",
            "Kontraksgjennomgang",
            true,
        ),
        sample("SAK 9", tuesday, 7, "Drap", "Forhandlinger", false),
        sample(
            "SAK 8",
            monday,
            12,
            "Overprøving Tingretten",
            "Undersøkelse",
            false,
        ),
        sample(
            "SAK 266",
            wednesday,
            5,
            "Erstatningskrav",
            "Juridisk Bistand",
            false,
        ),
    ]
}

fn sample(
    case: &str,
    day: Date,
    quarters: u32,
    description: &str,
    activity_type: &str,
    billed: bool,
) -> ActivityDraft {
    ActivityDraft {
        case_id: CaseId::new(case),
        day,
        hours: Hours::from_quarters(quarters),
        description: description.to_string(),
        activity_type: activity_type.to_string(),
        billable: true,
        billed,
    }
}
