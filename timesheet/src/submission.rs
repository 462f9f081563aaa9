use serde::Serialize;
use time::Date;

use crate::{domain::iso_date, Activity, ActivityStore, SubmitError, Week};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotal {
    #[serde(with = "iso_date")]
    pub day: Date,
    pub hours: f64,
}

/// Payload handed to a [`WeekSubmitter`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSubmission {
    #[serde(with = "iso_date")]
    pub week_start: Date,
    #[serde(with = "iso_date")]
    pub week_end: Date,
    pub iso_week: u8,
    pub daily_totals: Vec<DailyTotal>,
    pub total_hours: f64,
    pub entries: Vec<Activity>,
}

impl WeekSubmission {
    pub fn from_store(week: &Week, store: &ActivityStore) -> Self {
        Self {
            week_start: week.start(),
            week_end: week.end(),
            iso_week: week.iso_week(),
            daily_totals: week
                .dates()
                .into_iter()
                .map(|day| DailyTotal {
                    day,
                    hours: store.total_hours(day),
                })
                .collect(),
            total_hours: store.week_total(week),
            entries: store.week_entries(week).into_iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub iso_week: u8,
    pub entry_count: usize,
    pub total_hours: f64,
}

impl SubmissionReceipt {
    pub fn message(&self) -> String {
        format!(
            "Week {} submitted: {} entries, {:.2} hours",
            self.iso_week, self.entry_count, self.total_hours
        )
    }
}

pub trait WeekSubmitter {
    fn submit(&self, submission: &WeekSubmission) -> Result<SubmissionReceipt, SubmitError>;
}

/// Accepts every submission without sending it anywhere. The payload is
/// written to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcknowledgingSubmitter;

impl WeekSubmitter for AcknowledgingSubmitter {
    fn submit(&self, submission: &WeekSubmission) -> Result<SubmissionReceipt, SubmitError> {
        let payload = serde_json::to_string(submission)?;
        tracing::info!(week = submission.iso_week, %payload, "week submitted");

        Ok(SubmissionReceipt {
            iso_week: submission.iso_week,
            entry_count: submission.entries.len(),
            total_hours: submission.total_hours,
        })
    }
}
