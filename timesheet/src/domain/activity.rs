use serde::{Deserialize, Serialize};
use time::Date;

use super::{iso_date, ActivityId, CaseId, Hours};

fn default_billable() -> bool {
    true
}

/// The editable part of an activity: everything except its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDraft {
    pub case_id: CaseId,
    #[serde(with = "iso_date")]
    pub day: Date,
    pub hours: Hours,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub activity_type: String,
    #[serde(default = "default_billable")]
    pub billable: bool,
    #[serde(default)]
    pub billed: bool,
}

impl ActivityDraft {
    /// Template for a new entry in an empty (case, day) cell.
    pub fn blank(case_id: CaseId, day: Date) -> Self {
        Self {
            case_id,
            day,
            hours: Hours::MIN,
            description: String::new(),
            activity_type: String::new(),
            billable: true,
            billed: false,
        }
    }
}

/// One logged block of hours for a case on a specific day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub case_id: CaseId,
    #[serde(with = "iso_date")]
    pub day: Date,
    pub hours: Hours,
    pub description: String,
    pub activity_type: String,
    pub billable: bool,
    pub billed: bool,
}

impl Activity {
    pub fn from_draft(id: ActivityId, draft: ActivityDraft) -> Self {
        Self {
            id,
            case_id: draft.case_id,
            day: draft.day,
            hours: draft.hours,
            description: draft.description,
            activity_type: draft.activity_type,
            billable: draft.billable,
            billed: draft.billed,
        }
    }

    pub fn to_draft(&self) -> ActivityDraft {
        ActivityDraft {
            case_id: self.case_id.clone(),
            day: self.day,
            hours: self.hours,
            description: self.description.clone(),
            activity_type: self.activity_type.clone(),
            billable: self.billable,
            billed: self.billed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn draft_defaults_billable_when_field_missing() {
        let draft: ActivityDraft = serde_json::from_str(
            r#"{"caseId":"SAK 9","day":"2025-03-04","hours":1.75,"activityType":"Admin"}"#,
        )
        .unwrap();

        assert!(draft.billable);
        assert!(!draft.billed);
        assert_eq!(draft.day, date!(2025 - 03 - 04));
        assert_eq!(draft.description, "");
    }

    #[test]
    fn activity_serializes_iso_day() {
        let activity = Activity::from_draft(
            ActivityId::new(3),
            ActivityDraft::blank(CaseId::new("SAK 8"), date!(2025 - 03 - 03)),
        );
        let json = serde_json::to_value(&activity).unwrap();

        assert_eq!(json["day"], "2025-03-03");
        assert_eq!(json["caseId"], "SAK 8");
        assert_eq!(json["hours"], 0.25);
    }

    #[test]
    fn draft_round_trips_through_activity() {
        let draft = ActivityDraft::blank(CaseId::new("SAK 67"), date!(2025 - 03 - 05));
        let activity = Activity::from_draft(ActivityId::new(1), draft.clone());
        assert_eq!(activity.to_draft(), draft);
    }
}
