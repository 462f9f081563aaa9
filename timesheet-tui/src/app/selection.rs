use super::*;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use timesheet::CaseId;

impl App {
    /// Open the case list for the editor or the quick-add form.
    pub fn open_case_selection(&mut self, target: SelectionTarget) {
        let current = match target {
            SelectionTarget::Editor => self.editor.draft().map(|d| d.case_id.to_string()),
            SelectionTarget::QuickAdd => self.quick_add.case_id.as_ref().map(CaseId::to_string),
        };
        let items = self
            .reference
            .cases()
            .iter()
            .map(|case| SelectionItem {
                value: case.id.to_string(),
                label: case.label(),
            })
            .collect();
        self.open_selection(View::SelectCase, target, items, current);
    }

    pub fn open_activity_type_selection(&mut self, target: SelectionTarget) {
        let current = match target {
            SelectionTarget::Editor => self.editor.draft().map(|d| d.activity_type.clone()),
            SelectionTarget::QuickAdd => self.quick_add.activity_type.clone(),
        };
        let items = self
            .reference
            .activity_types()
            .iter()
            .map(|label| SelectionItem {
                value: label.clone(),
                label: label.clone(),
            })
            .collect();
        self.open_selection(View::SelectActivityType, target, items, current);
    }

    fn open_selection(
        &mut self,
        view: View,
        target: SelectionTarget,
        items: Vec<SelectionItem>,
        current: Option<String>,
    ) {
        self.selection_target = target;
        self.search_input.clear();
        self.filtered_index = current
            .and_then(|value| items.iter().position(|item| item.value == value))
            .unwrap_or(0);
        self.filtered_items = items.clone();
        self.selection_items = items;
        self.selection_list_focused = false;
        self.navigate_to(view);
    }

    /// Filter the open list based on search input using fuzzy matching
    pub fn filter_selection(&mut self) {
        if self.search_input.value.is_empty() {
            self.filtered_items = self.selection_items.clone();
            self.filtered_index = 0;
            return;
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(SelectionItem, i64)> = self
            .selection_items
            .iter()
            .filter_map(|item| {
                matcher
                    .fuzzy_match(&item.label, &self.search_input.value)
                    .map(|score| (item.clone(), score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        self.filtered_items = scored.into_iter().map(|(item, _)| item).collect();
        self.filtered_index = 0;
    }

    pub fn search_input_char(&mut self, c: char) {
        self.search_input.insert(c);
        self.filter_selection();
    }

    pub fn search_input_backspace(&mut self) {
        self.search_input.backspace();
        self.filter_selection();
    }

    pub fn search_input_clear(&mut self) {
        self.search_input.clear();
        self.filter_selection();
    }

    pub fn search_move_cursor(&mut self, left: bool) {
        if left {
            self.search_input.move_left();
        } else {
            self.search_input.move_right();
        }
    }

    pub fn search_cursor_home_end(&mut self, home: bool) {
        if home {
            self.search_input.home();
        } else {
            self.search_input.end();
        }
    }

    pub fn select_next(&mut self) {
        if !self.filtered_items.is_empty() {
            self.filtered_index = (self.filtered_index + 1) % self.filtered_items.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.filtered_items.is_empty() {
            self.filtered_index = if self.filtered_index == 0 {
                self.filtered_items.len() - 1
            } else {
                self.filtered_index - 1
            };
        }
    }

    /// Write the highlighted item into the form that opened the list.
    pub fn confirm_selection(&mut self) {
        let Some(item) = self.filtered_items.get(self.filtered_index).cloned() else {
            return;
        };
        let view = self.current_view;
        match (view, self.selection_target) {
            (View::SelectCase, SelectionTarget::Editor) => {
                self.editor.select_case(CaseId::new(item.value))
            }
            (View::SelectCase, SelectionTarget::QuickAdd) => {
                self.quick_add.select_case(CaseId::new(item.value))
            }
            (View::SelectActivityType, SelectionTarget::Editor) => {
                self.editor.select_activity_type(item.value)
            }
            (View::SelectActivityType, SelectionTarget::QuickAdd) => {
                self.quick_add.select_activity_type(item.value)
            }
            _ => return,
        }
        self.return_from_selection();
        let kind = if view == View::SelectCase {
            "case"
        } else {
            "activity type"
        };
        self.set_status(format!("Selected {kind}: {}", item.label));
    }

    pub fn cancel_selection(&mut self) {
        self.return_from_selection();
    }

    fn return_from_selection(&mut self) {
        self.navigate_to(View::Grid);
        self.focused_area = match self.selection_target {
            SelectionTarget::Editor if self.editor.is_open() => FocusedArea::Editor,
            SelectionTarget::Editor => FocusedArea::Grid,
            SelectionTarget::QuickAdd => FocusedArea::QuickAdd,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn fuzzy_filter_ranks_matches() {
        let mut app = test_app();
        app.open_activity_type_selection(SelectionTarget::QuickAdd);
        for c in "meklin".chars() {
            app.search_input_char(c);
        }

        assert_eq!(app.filtered_items[0].value, "Mekling");
        app.search_input_clear();
        assert_eq!(app.filtered_items.len(), 8);
    }

    #[test]
    fn list_opens_on_current_value() {
        let mut app = test_app();
        app.cursor_col = 0;
        app.open_editor_at_cursor();
        app.open_activity_type_selection(SelectionTarget::Editor);

        assert_eq!(
            app.filtered_items[app.filtered_index].value,
            "Kontraksgjennomgang"
        );
    }

    #[test]
    fn confirm_writes_case_into_quick_add() {
        let mut app = test_app();
        app.focused_area = FocusedArea::QuickAdd;
        app.open_case_selection(SelectionTarget::QuickAdd);
        app.select_previous();
        app.confirm_selection();

        assert_eq!(app.quick_add.case_id, Some(CaseId::new("SAK 266")));
        assert_eq!(app.current_view, View::Grid);
        assert_eq!(app.focused_area, FocusedArea::QuickAdd);
    }

    #[test]
    fn confirm_writes_case_into_editor() {
        let mut app = test_app();
        app.open_editor_at_cursor();
        app.open_case_selection(SelectionTarget::Editor);
        app.select_next();
        app.confirm_selection();

        assert_eq!(
            app.editor.draft().map(|d| d.case_id.clone()),
            Some(CaseId::new("SAK 9"))
        );
        assert_eq!(app.focused_area, FocusedArea::Editor);
        assert_eq!(app.status_message.as_deref(), Some("Selected case: SAK 9 - Drap"));
    }
}
