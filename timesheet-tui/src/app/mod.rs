use crate::config::TimesheetConfig;
use time::Date;
use timesheet::{
    AcknowledgingSubmitter, ActivityStore, DayNames, EntryEditor, QuickAddForm, ReferenceData,
    Week, WeekGrid, WeekSubmission, WeekSubmitter,
};

mod date_picker;
mod edit;
mod navigation;
mod quick_add;
mod selection;
mod state;
pub use date_picker::month_weeks;
pub use state::{
    DatePickerState, DeleteContext, EditorField, FocusedArea, QuickAddField, ScrollTarget,
    SelectionItem, SelectionTarget, TextInput, View,
};

pub struct App {
    pub running: bool,
    pub status_message: Option<String>,
    pub current_view: View,
    pub focused_area: FocusedArea,

    // Week and data
    pub today: Date,
    pub week: Week,
    pub day_names: DayNames,
    pub expected_hours: f64,
    pub reference: ReferenceData,
    pub store: ActivityStore,
    pub grid: WeekGrid, // Rebuilt after every store mutation or week change

    // Grid cursor and viewport
    pub cursor_row: usize,
    pub cursor_col: usize,
    pub grid_scroll: usize,      // Rows skipped from the top
    pub grid_view_height: usize, // Last-rendered row capacity (updated by renderer each frame)

    // Entry editor sheet
    pub editor: EntryEditor,
    pub editor_field: EditorField,
    pub editor_description: TextInput,

    // Quick-add header form
    pub quick_add: QuickAddForm,
    pub quick_add_field: QuickAddField,
    pub quick_add_description: TextInput,

    // Fuzzy selection lists (cases and activity types)
    pub selection_target: SelectionTarget,
    pub search_input: TextInput,
    pub selection_items: Vec<SelectionItem>,
    pub filtered_items: Vec<SelectionItem>,
    pub filtered_index: usize,
    pub selection_list_focused: bool,

    pub delete_context: Option<DeleteContext>,
    pub date_picker: Option<DatePickerState>,

    submitter: Box<dyn WeekSubmitter + Send>,
}

impl App {
    pub fn new(
        cfg: &TimesheetConfig,
        reference: ReferenceData,
        store: ActivityStore,
        today: Date,
        anchor: Date,
    ) -> Self {
        let week = Week::containing(anchor);
        let grid = WeekGrid::build(
            &week,
            reference.cases(),
            &store,
            cfg.expected_hours_per_day,
        );
        let cursor_col = week.index_of(today).unwrap_or(0);

        Self {
            running: true,
            status_message: None,
            current_view: View::Grid,
            focused_area: FocusedArea::Grid,
            today,
            week,
            day_names: cfg.day_names,
            expected_hours: cfg.expected_hours_per_day,
            reference,
            store,
            grid,
            cursor_row: 0,
            cursor_col,
            grid_scroll: 0,
            grid_view_height: 0,
            editor: EntryEditor::default(),
            editor_field: EditorField::Case,
            editor_description: TextInput::new(),
            quick_add: QuickAddForm::new(today),
            quick_add_field: QuickAddField::Day,
            quick_add_description: TextInput::new(),
            selection_target: SelectionTarget::QuickAdd,
            search_input: TextInput::new(),
            selection_items: Vec::new(),
            filtered_items: Vec::new(),
            filtered_index: 0,
            selection_list_focused: false,
            delete_context: None,
            date_picker: None,
            submitter: Box::new(AcknowledgingSubmitter),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Status line text when no message is pending.
    pub fn get_contextual_status(&self) -> String {
        format!(
            "Week {} · {:.2} h logged · {} entries in total",
            self.week.iso_week(),
            self.grid.week_total(),
            self.store.len()
        )
    }

    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        self.clear_status();
    }

    /// Rebuild the grid from the store and keep the cursor inside it.
    pub fn refresh_grid(&mut self) {
        self.grid = WeekGrid::build(
            &self.week,
            self.reference.cases(),
            &self.store,
            self.expected_hours,
        );
        let last_row = self.grid.rows.len().saturating_sub(1);
        self.cursor_row = self.cursor_row.min(last_row);
        self.ensure_cursor_visible();
    }

    pub fn previous_week(&mut self) {
        self.week.previous();
        self.after_week_change();
    }

    pub fn next_week(&mut self) {
        self.week.next();
        self.after_week_change();
    }

    pub fn jump_to(&mut self, date: Date) {
        self.week.jump_to(date);
        self.after_week_change();
    }

    pub fn jump_to_today(&mut self) {
        self.jump_to(self.today);
        self.cursor_col = self.week.index_of(self.today).unwrap_or(0);
    }

    fn after_week_change(&mut self) {
        self.refresh_grid();
        tracing::debug!(week = self.week.iso_week(), start = %self.week.start(), "week changed");
        self.set_status(format!(
            "Showing week {} ({})",
            self.week.iso_week(),
            self.week.heading(self.day_names)
        ));
    }

    pub fn submit_week(&mut self) {
        let submission = WeekSubmission::from_store(&self.week, &self.store);
        match self.submitter.submit(&submission) {
            Ok(receipt) => self.set_status(receipt.message()),
            Err(e) => {
                tracing::error!("failed to submit week: {e}");
                self.set_status(format!("Error: failed to submit week: {e}"));
            }
        }
    }
}
