use time::Date;

use crate::{total_hours, Activity, ActivityDraft, ActivityId, CaseId, StoreError, Week};

/// In-memory ordered list of logged activities.
///
/// Store order is insertion order; filters never reorder.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    entries: Vec<Activity>,
    next_id: u64,
}

impl Default for ActivityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_seed(drafts: impl IntoIterator<Item = ActivityDraft>) -> Self {
        let mut store = Self::new();
        for draft in drafts {
            store.create(draft);
        }
        store
    }

    pub fn entries(&self) -> &[Activity] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.entries.iter().find(|a| a.id == id)
    }

    #[tracing::instrument(level = "debug", skip(self, draft), fields(case = %draft.case_id, day = %draft.day))]
    pub fn create(&mut self, draft: ActivityDraft) -> Activity {
        let id = ActivityId::new(self.next_id);
        self.next_id += 1;

        let activity = Activity::from_draft(id, draft);
        self.entries.push(activity.clone());
        tracing::debug!(%id, hours = %activity.hours, "activity created");
        activity
    }

    /// Replace the stored entry carrying the same id, keeping its position.
    pub fn update(&mut self, activity: Activity) -> Result<Activity, StoreError> {
        let slot = self
            .entries
            .iter_mut()
            .find(|a| a.id == activity.id)
            .ok_or(StoreError::NotFound(activity.id))?;

        *slot = activity.clone();
        tracing::debug!(id = %activity.id, "activity updated");
        Ok(activity)
    }

    pub fn delete(&mut self, id: ActivityId) -> Result<Activity, StoreError> {
        let index = self
            .entries
            .iter()
            .position(|a| a.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let removed = self.entries.remove(index);
        tracing::debug!(%id, "activity deleted");
        Ok(removed)
    }

    pub fn entries_for_day(&self, day: Date) -> Vec<&Activity> {
        self.entries.iter().filter(|a| a.day == day).collect()
    }

    pub fn entries_for_case(&self, case_id: &CaseId) -> Vec<&Activity> {
        self.entries
            .iter()
            .filter(|a| &a.case_id == case_id)
            .collect()
    }

    pub fn entries_for_cell(&self, case_id: &CaseId, day: Date) -> Vec<&Activity> {
        self.entries
            .iter()
            .filter(|a| &a.case_id == case_id && a.day == day)
            .collect()
    }

    pub fn total_hours(&self, day: Date) -> f64 {
        total_hours(self.entries_for_day(day).into_iter().map(|a| &a.hours))
    }

    pub fn week_entries(&self, week: &Week) -> Vec<&Activity> {
        self.entries
            .iter()
            .filter(|a| week.contains(a.day))
            .collect()
    }

    pub fn week_total(&self, week: &Week) -> f64 {
        total_hours(self.week_entries(week).into_iter().map(|a| &a.hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hours;
    use time::macros::date;

    fn draft(case: &str, day: Date, hours: f64) -> ActivityDraft {
        ActivityDraft {
            hours: Hours::new(hours).unwrap(),
            ..ActivityDraft::blank(CaseId::new(case), day)
        }
    }

    fn two_entry_store() -> ActivityStore {
        ActivityStore::with_seed([
            draft("A", date!(2025 - 03 - 03), 2.5),
            draft("B", date!(2025 - 03 - 04), 1.75),
        ])
    }

    #[test]
    fn totals_per_day() {
        let store = two_entry_store();

        assert_eq!(store.total_hours(date!(2025 - 03 - 03)), 2.5);
        assert_eq!(store.total_hours(date!(2025 - 03 - 04)), 1.75);
        assert_eq!(store.total_hours(date!(2025 - 03 - 05)), 0.0);
    }

    #[test]
    fn create_assigns_unique_ids_and_appends() {
        let mut store = two_entry_store();
        let before = store.len();

        let mut created = draft("C", date!(2025 - 03 - 05), 0.25);
        created.activity_type = "Admin".to_string();
        let activity = store.create(created);

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.get(activity.id), Some(&activity));
        assert_eq!(store.entries().last(), Some(&activity));
        assert_eq!(
            store
                .entries()
                .iter()
                .filter(|a| a.id == activity.id)
                .count(),
            1
        );
    }

    #[test]
    fn ids_are_not_recycled_after_delete() {
        let mut store = two_entry_store();
        let last = store.entries()[1].id;
        store.delete(last).unwrap();

        let fresh = store.create(draft("A", date!(2025 - 03 - 06), 1.0));
        assert!(fresh.id > last);
    }

    #[test]
    fn update_replaces_only_the_matching_entry() {
        let mut store = two_entry_store();
        let untouched = store.entries()[1].clone();
        let mut changed = store.entries()[0].clone();
        changed.description = "Court prep".to_string();
        changed.billed = true;

        store.update(changed.clone()).unwrap();

        assert_eq!(store.entries()[0], changed);
        assert_eq!(store.entries()[1], untouched);
    }

    #[test]
    fn update_unknown_id_leaves_store_unchanged() {
        let mut store = two_entry_store();
        let before = store.entries().to_vec();
        let mut ghost = before[0].clone();
        ghost.id = ActivityId::new(999);

        assert_eq!(
            store.update(ghost),
            Err(StoreError::NotFound(ActivityId::new(999)))
        );
        assert_eq!(store.entries(), before.as_slice());
    }

    #[test]
    fn delete_keeps_order_of_the_rest() {
        let mut store = two_entry_store();
        let third = store.create(draft("C", date!(2025 - 03 - 05), 1.0));
        let first = store.entries()[0].id;

        let second = store.entries()[1].id;
        let removed = store.delete(second).unwrap();

        assert_eq!(removed.case_id, CaseId::new("B"));
        let ids: Vec<_> = store.entries().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![first, third.id]);
    }

    #[test]
    fn delete_unknown_id_is_reported() {
        let mut store = two_entry_store();
        assert!(store.delete(ActivityId::new(42)).is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn filters_preserve_store_order() {
        let mut store = two_entry_store();
        store.create(draft("B", date!(2025 - 03 - 03), 1.0));
        store.create(draft("A", date!(2025 - 03 - 03), 0.5));

        let monday: Vec<_> = store
            .entries_for_day(date!(2025 - 03 - 03))
            .iter()
            .map(|a| a.case_id.as_str().to_string())
            .collect();
        assert_eq!(monday, vec!["A", "B", "A"]);

        let case_a: Vec<_> = store
            .entries_for_case(&CaseId::new("A"))
            .iter()
            .map(|a| a.hours.as_f64())
            .collect();
        assert_eq!(case_a, vec![2.5, 0.5]);

        assert_eq!(
            store
                .entries_for_cell(&CaseId::new("A"), date!(2025 - 03 - 03))
                .len(),
            2
        );
    }

    #[test]
    fn week_total_ignores_other_weeks() {
        let mut store = two_entry_store();
        store.create(draft("A", date!(2025 - 03 - 10), 4.0));
        let week = Week::containing(date!(2025 - 03 - 03));

        assert_eq!(store.week_total(&week), 4.25);
        assert_eq!(store.week_entries(&week).len(), 2);
    }
}
