use time::Date;

use crate::{Activity, ActivityDraft, ActivityId, ActivityStore, CaseId, StoreError};

/// Side-sheet state: at most one entry is staged at a time.
///
/// Mutators only touch the staged draft; nothing reaches the store until
/// [`EntryEditor::save`] or [`EntryEditor::delete`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EntryEditor {
    #[default]
    Closed,
    Editing {
        id: ActivityId,
        draft: ActivityDraft,
    },
    Creating {
        draft: ActivityDraft,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorOutcome {
    Created(Activity),
    Updated(Activity),
    Deleted(Activity),
    Nothing,
}

impl EntryEditor {
    pub fn open_existing(&mut self, activity: &Activity) {
        *self = EntryEditor::Editing {
            id: activity.id,
            draft: activity.to_draft(),
        };
    }

    pub fn open_blank(&mut self, day: Date, case_id: CaseId) {
        *self = EntryEditor::Creating {
            draft: ActivityDraft::blank(case_id, day),
        };
    }

    pub fn close(&mut self) {
        *self = EntryEditor::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EntryEditor::Closed)
    }

    pub fn editing_id(&self) -> Option<ActivityId> {
        match self {
            EntryEditor::Editing { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&ActivityDraft> {
        match self {
            EntryEditor::Closed => None,
            EntryEditor::Editing { draft, .. } | EntryEditor::Creating { draft } => Some(draft),
        }
    }

    fn draft_mut(&mut self) -> Option<&mut ActivityDraft> {
        match self {
            EntryEditor::Closed => None,
            EntryEditor::Editing { draft, .. } | EntryEditor::Creating { draft } => Some(draft),
        }
    }

    pub fn mode_label(&self) -> &'static str {
        match self {
            EntryEditor::Closed => "",
            EntryEditor::Editing { .. } => "Edit activity",
            EntryEditor::Creating { .. } => "New activity",
        }
    }

    pub fn increment_hours(&mut self) {
        if let Some(draft) = self.draft_mut() {
            draft.hours.increment();
        }
    }

    pub fn decrement_hours(&mut self) {
        if let Some(draft) = self.draft_mut() {
            draft.hours.decrement();
        }
    }

    pub fn select_case(&mut self, case_id: CaseId) {
        if let Some(draft) = self.draft_mut() {
            draft.case_id = case_id;
        }
    }

    pub fn select_activity_type(&mut self, activity_type: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.activity_type = activity_type.into();
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.description = description.into();
        }
    }

    pub fn set_day(&mut self, day: Date) {
        if let Some(draft) = self.draft_mut() {
            draft.day = day;
        }
    }

    pub fn toggle_billable(&mut self) {
        if let Some(draft) = self.draft_mut() {
            draft.billable = !draft.billable;
        }
    }

    pub fn toggle_billed(&mut self) {
        if let Some(draft) = self.draft_mut() {
            draft.billed = !draft.billed;
        }
    }

    /// Commit the staged value. The editor is closed afterwards, also when
    /// the edited entry has vanished from the store.
    pub fn save(&mut self, store: &mut ActivityStore) -> Result<EditorOutcome, StoreError> {
        match std::mem::take(self) {
            EntryEditor::Closed => Ok(EditorOutcome::Nothing),
            EntryEditor::Editing { id, draft } => store
                .update(Activity::from_draft(id, draft))
                .map(EditorOutcome::Updated),
            EntryEditor::Creating { draft } => Ok(EditorOutcome::Created(store.create(draft))),
        }
    }

    /// Remove the entry being edited. Only meaningful while editing an
    /// existing entry; otherwise nothing happens and the editor stays as is.
    pub fn delete(&mut self, store: &mut ActivityStore) -> Result<EditorOutcome, StoreError> {
        let Some(id) = self.editing_id() else {
            return Ok(EditorOutcome::Nothing);
        };
        self.close();
        store.delete(id).map(EditorOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hours;
    use time::macros::date;

    fn store_with_one() -> (ActivityStore, Activity) {
        let mut store = ActivityStore::new();
        let activity = store.create(ActivityDraft {
            hours: Hours::new(2.0).unwrap(),
            description: "hearing prep".to_string(),
            activity_type: "Forhandlinger".to_string(),
            ..ActivityDraft::blank(CaseId::new("A"), date!(2025 - 03 - 03))
        });
        (store, activity)
    }

    #[test]
    fn edit_then_save_updates_in_place() {
        let (mut store, original) = store_with_one();
        let mut editor = EntryEditor::default();

        editor.open_existing(&original);
        editor.increment_hours();
        editor.set_description("court day");
        let outcome = editor.save(&mut store).unwrap();

        let updated = store.get(original.id).unwrap();
        assert_eq!(updated.hours.as_f64(), 2.25);
        assert_eq!(updated.description, "court day");
        assert_eq!(outcome, EditorOutcome::Updated(updated.clone()));
        assert_eq!(store.len(), 1);
        assert!(!editor.is_open());
    }

    #[test]
    fn close_discards_staged_changes() {
        let (store, original) = store_with_one();
        let mut editor = EntryEditor::default();

        editor.open_existing(&original);
        editor.toggle_billed();
        editor.select_case(CaseId::new("B"));
        editor.close();

        assert_eq!(store.get(original.id), Some(&original));
        assert_eq!(editor, EntryEditor::Closed);
    }

    #[test]
    fn blank_template_creates_entry_with_defaults() {
        let mut store = ActivityStore::new();
        let mut editor = EntryEditor::default();

        editor.open_blank(date!(2025 - 03 - 05), CaseId::new("B"));
        assert_eq!(editor.mode_label(), "New activity");
        editor.increment_hours();
        editor.select_activity_type("Mekling");
        let outcome = editor.save(&mut store).unwrap();

        let EditorOutcome::Created(created) = outcome else {
            panic!("expected Created, got {outcome:?}");
        };
        assert_eq!(created.case_id, CaseId::new("B"));
        assert_eq!(created.day, date!(2025 - 03 - 05));
        assert_eq!(created.hours.as_f64(), 0.5);
        assert_eq!(created.activity_type, "Mekling");
        assert!(created.billable);
        assert!(!created.billed);
    }

    #[test]
    fn decrement_clamps_at_quarter() {
        let mut editor = EntryEditor::default();
        editor.open_blank(date!(2025 - 03 - 05), CaseId::new("B"));
        editor.decrement_hours();
        editor.decrement_hours();

        assert_eq!(editor.draft().unwrap().hours, Hours::MIN);
    }

    #[test]
    fn select_activity_type_replaces_previous() {
        let mut editor = EntryEditor::default();
        editor.open_blank(date!(2025 - 03 - 05), CaseId::new("B"));
        editor.select_activity_type("Admin");
        editor.select_activity_type("Reisetid");

        assert_eq!(editor.draft().unwrap().activity_type, "Reisetid");
    }

    #[test]
    fn delete_removes_edited_entry() {
        let (mut store, original) = store_with_one();
        let mut editor = EntryEditor::default();

        editor.open_existing(&original);
        let outcome = editor.delete(&mut store).unwrap();

        assert_eq!(outcome, EditorOutcome::Deleted(original));
        assert!(store.is_empty());
        assert!(!editor.is_open());
    }

    #[test]
    fn delete_while_creating_does_nothing() {
        let (mut store, _) = store_with_one();
        let mut editor = EntryEditor::default();
        editor.open_blank(date!(2025 - 03 - 04), CaseId::new("A"));

        assert_eq!(editor.delete(&mut store).unwrap(), EditorOutcome::Nothing);
        assert_eq!(store.len(), 1);
        assert!(editor.is_open());
    }

    #[test]
    fn saving_vanished_entry_reports_not_found_and_closes() {
        let (mut store, original) = store_with_one();
        let mut editor = EntryEditor::default();

        editor.open_existing(&original);
        store.delete(original.id).unwrap();

        assert_eq!(
            editor.save(&mut store),
            Err(StoreError::NotFound(original.id))
        );
        assert!(store.is_empty());
        assert!(!editor.is_open());
    }

    #[test]
    fn mutators_are_ignored_when_closed() {
        let mut editor = EntryEditor::default();
        editor.increment_hours();
        editor.toggle_billable();
        editor.set_day(date!(2025 - 03 - 07));

        assert_eq!(editor, EntryEditor::Closed);
        assert!(editor.draft().is_none());
    }
}
