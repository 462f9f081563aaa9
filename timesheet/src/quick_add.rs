use time::Date;

use crate::{Activity, ActivityDraft, ActivityStore, CaseId, Hours, QuickAddError, Week};

/// Condensed entry form pinned above the grid.
///
/// The day is stored as a weekday index so that it follows week navigation:
/// an add always lands in the currently visible week.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickAddForm {
    pub weekday_index: usize,
    pub case_id: Option<CaseId>,
    pub activity_type: Option<String>,
    pub description: String,
    pub hours: Hours,
    pub billed: bool,
    today_index: usize,
}

impl QuickAddForm {
    pub fn new(today: Date) -> Self {
        Self::blank(today.weekday().number_days_from_monday() as usize)
    }

    pub fn next_day(&mut self) {
        self.weekday_index = (self.weekday_index + 1) % Week::DAYS;
    }

    pub fn previous_day(&mut self) {
        self.weekday_index = (self.weekday_index + Week::DAYS - 1) % Week::DAYS;
    }

    pub fn increment_hours(&mut self) {
        self.hours.increment();
    }

    pub fn decrement_hours(&mut self) {
        self.hours.decrement();
    }

    pub fn select_case(&mut self, case_id: CaseId) {
        self.case_id = Some(case_id);
    }

    pub fn select_activity_type(&mut self, activity_type: impl Into<String>) {
        self.activity_type = Some(activity_type.into());
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn toggle_billed(&mut self) {
        self.billed = !self.billed;
    }

    pub fn day_in(&self, week: &Week) -> Date {
        week.date_at(self.weekday_index).unwrap_or_else(|| week.start())
    }

    pub fn reset(&mut self) {
        *self = Self::blank(self.today_index);
    }

    fn blank(today_index: usize) -> Self {
        Self {
            weekday_index: today_index,
            case_id: None,
            activity_type: None,
            description: String::new(),
            hours: Hours::MIN,
            billed: false,
            today_index,
        }
    }

    /// Add the entry to the visible week and clear the form.
    ///
    /// A rejected add leaves both the store and the form untouched.
    pub fn submit(
        &mut self,
        week: &Week,
        store: &mut ActivityStore,
    ) -> Result<Activity, QuickAddError> {
        let case_id = self.case_id.clone().ok_or(QuickAddError::MissingCase)?;
        let activity_type = self
            .activity_type
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or(QuickAddError::MissingActivityType)?;

        let activity = store.create(ActivityDraft {
            case_id,
            day: self.day_in(week),
            hours: self.hours,
            description: self.description.trim().to_string(),
            activity_type,
            billable: true,
            billed: self.billed,
        });
        tracing::info!(id = %activity.id, case = %activity.case_id, "quick-add entry created");

        self.reset();
        Ok(activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    // Wednesday
    const TODAY: Date = date!(2025 - 03 - 05);

    fn filled_form() -> QuickAddForm {
        let mut form = QuickAddForm::new(TODAY);
        form.previous_day();
        form.select_case(CaseId::new("SAK 9"));
        form.select_activity_type("Mekling");
        form.set_description("  call with client ");
        form.increment_hours();
        form.increment_hours();
        form.toggle_billed();
        form
    }

    #[test]
    fn defaults_to_today() {
        let form = QuickAddForm::new(TODAY);
        assert_eq!(form.weekday_index, 2);
        assert_eq!(form.hours, Hours::MIN);
        assert!(form.case_id.is_none());
    }

    #[test]
    fn submit_adds_to_visible_week_and_resets() {
        let week = Week::containing(date!(2025 - 03 - 12));
        let mut store = ActivityStore::new();
        let mut form = filled_form();

        let activity = form.submit(&week, &mut store).unwrap();

        assert_eq!(activity.day, date!(2025 - 03 - 11));
        assert_eq!(activity.case_id, CaseId::new("SAK 9"));
        assert_eq!(activity.description, "call with client");
        assert_eq!(activity.hours.as_f64(), 0.75);
        assert!(activity.billable);
        assert!(activity.billed);
        assert_eq!(store.len(), 1);
        assert_eq!(form, QuickAddForm::new(TODAY));
    }

    #[test]
    fn missing_case_is_rejected() {
        let week = Week::containing(TODAY);
        let mut store = ActivityStore::new();
        let mut form = QuickAddForm::new(TODAY);
        form.select_activity_type("Admin");

        assert_eq!(
            form.submit(&week, &mut store),
            Err(QuickAddError::MissingCase)
        );
        assert!(store.is_empty());
        assert_eq!(form.activity_type.as_deref(), Some("Admin"));
    }

    #[test]
    fn missing_activity_type_is_rejected() {
        let week = Week::containing(TODAY);
        let mut store = ActivityStore::new();
        let mut form = QuickAddForm::new(TODAY);
        form.select_case(CaseId::new("SAK 8"));

        assert_eq!(
            form.submit(&week, &mut store),
            Err(QuickAddError::MissingActivityType)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn day_cycles_through_the_week() {
        let mut form = QuickAddForm::new(date!(2025 - 03 - 09));
        assert_eq!(form.weekday_index, 6);
        form.next_day();
        assert_eq!(form.weekday_index, 0);
        form.previous_day();
        form.previous_day();
        assert_eq!(form.weekday_index, 5);
    }

    #[test]
    fn hours_stepper_clamps_at_quarter() {
        let mut form = QuickAddForm::new(TODAY);
        form.decrement_hours();
        assert_eq!(form.hours.as_f64(), 0.25);
    }
}
