use super::*;
use timesheet::{format_iso, EditorOutcome, GridCell};

impl App {
    /// Open the editor sheet on the cell under the cursor: the entry itself,
    /// or a blank template for an empty (case, day) cell.
    pub fn open_editor_at_cursor(&mut self) {
        match self.cursor_cell().cloned() {
            Some(GridCell::Entry(activity)) => self.editor.open_existing(&activity),
            Some(GridCell::Empty { case_id, day }) => self.editor.open_blank(day, case_id),
            Some(GridCell::Blank) | None => return,
        }
        let description = self
            .editor
            .draft()
            .map(|d| d.description.clone())
            .unwrap_or_default();
        self.editor_description = TextInput::from_str(&description);
        self.editor_field = EditorField::Case;
        self.focused_area = FocusedArea::Editor;
        self.clear_status();
    }

    pub fn close_editor(&mut self) {
        self.editor.close();
        self.editor_description.clear();
        self.focused_area = FocusedArea::Grid;
    }

    pub fn editor_next_field(&mut self) {
        self.editor_field = self.editor_field.next();
    }

    pub fn editor_previous_field(&mut self) {
        self.editor_field = self.editor_field.previous();
    }

    /// Left/right on the focused field: step hours, cycle the day, flip a
    /// checkbox.
    pub fn editor_step(&mut self, forward: bool) {
        match self.editor_field {
            EditorField::Hours if forward => self.editor.increment_hours(),
            EditorField::Hours => self.editor.decrement_hours(),
            EditorField::Day => self.editor_cycle_day(forward),
            EditorField::Billable => self.editor.toggle_billable(),
            EditorField::Billed => self.editor.toggle_billed(),
            EditorField::Description => self.editor_description_move_cursor(!forward),
            EditorField::Case | EditorField::ActivityType => {}
        }
    }

    pub fn editor_toggle(&mut self) {
        match self.editor_field {
            EditorField::Billable => self.editor.toggle_billable(),
            EditorField::Billed => self.editor.toggle_billed(),
            _ => {}
        }
    }

    /// Move the staged day within the visible week, wrapping at the ends.
    fn editor_cycle_day(&mut self, forward: bool) {
        let Some(draft) = self.editor.draft() else {
            return;
        };
        let next = match self.week.index_of(draft.day) {
            Some(index) if forward => (index + 1) % Week::DAYS,
            Some(index) => (index + Week::DAYS - 1) % Week::DAYS,
            None => 0,
        };
        if let Some(day) = self.week.date_at(next) {
            self.editor.set_day(day);
        }
    }

    pub fn editor_input_char(&mut self, c: char) {
        self.editor_description.insert(c);
        self.editor
            .set_description(self.editor_description.value.clone());
    }

    pub fn editor_input_backspace(&mut self) {
        self.editor_description.backspace();
        self.editor
            .set_description(self.editor_description.value.clone());
    }

    pub fn editor_input_clear(&mut self) {
        self.editor_description.clear();
        self.editor.set_description(String::new());
    }

    pub fn editor_description_move_cursor(&mut self, left: bool) {
        if left {
            self.editor_description.move_left();
        } else {
            self.editor_description.move_right();
        }
    }

    pub fn save_editor(&mut self) {
        let result = self.editor.save(&mut self.store);
        self.editor_description.clear();
        self.focused_area = FocusedArea::Grid;

        match result {
            Ok(EditorOutcome::Created(activity)) => {
                self.refresh_grid();
                self.focus_entry(&activity);
                self.set_status(format!(
                    "Activity created: {} · {} h",
                    activity.case_id, activity.hours
                ));
            }
            Ok(EditorOutcome::Updated(activity)) => {
                self.refresh_grid();
                self.focus_entry(&activity);
                self.set_status(format!(
                    "Activity updated: {} · {} h",
                    activity.case_id, activity.hours
                ));
            }
            Ok(EditorOutcome::Deleted(_) | EditorOutcome::Nothing) => self.refresh_grid(),
            Err(e) => {
                tracing::warn!("save failed: {e}");
                self.refresh_grid();
                self.set_status(format!("Error: {e}"));
            }
        }
    }

    fn focus_entry(&mut self, activity: &timesheet::Activity) {
        if let Some((row, col)) = self.grid.position_of(activity) {
            self.cursor_row = row;
            self.cursor_col = col;
            self.ensure_cursor_visible();
        }
    }

    /// Ask for confirmation before deleting the entry open in the editor.
    pub fn enter_delete_confirm(&mut self) {
        let Some(id) = self.editor.editing_id() else {
            self.set_status("Nothing to delete: the entry is not saved yet".to_string());
            return;
        };
        let Some(activity) = self.store.get(id) else {
            self.set_status(format!("Error: activity {id} no longer exists"));
            return;
        };
        let ctx = DeleteContext {
            activity_id: id,
            display_label: format!(
                "{} / {}",
                self.reference.case_label(&activity.case_id),
                if activity.activity_type.is_empty() {
                    "-"
                } else {
                    activity.activity_type.as_str()
                }
            ),
            display_date: format_iso(activity.day),
            display_hours: activity.hours.as_f64(),
        };
        self.delete_context = Some(ctx);
        self.navigate_to(View::ConfirmDelete);
    }

    /// Grid shortcut: open the entry under the cursor and ask to delete it.
    pub fn delete_at_cursor(&mut self) {
        if let Some(GridCell::Entry(_)) = self.cursor_cell() {
            self.open_editor_at_cursor();
            self.enter_delete_confirm();
        }
    }

    pub fn confirm_delete(&mut self) {
        let result = self.editor.delete(&mut self.store);
        self.delete_context = None;
        self.editor_description.clear();
        self.navigate_to(View::Grid);
        self.focused_area = FocusedArea::Grid;
        self.refresh_grid();

        match result {
            Ok(EditorOutcome::Deleted(activity)) => self.set_status(format!(
                "Activity deleted: {} · {} h",
                activity.case_id, activity.hours
            )),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("delete failed: {e}");
                self.set_status(format!("Error: {e}"));
            }
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_context = None;
        self.navigate_to(View::Grid);
        self.set_status("Delete cancelled".to_string());
    }
}
