use super::*;

impl App {
    pub fn quick_add_next_field(&mut self) {
        self.quick_add_field = self.quick_add_field.next();
    }

    pub fn quick_add_previous_field(&mut self) {
        self.quick_add_field = self.quick_add_field.previous();
    }

    pub fn quick_add_step(&mut self, forward: bool) {
        match self.quick_add_field {
            QuickAddField::Day if forward => self.quick_add.next_day(),
            QuickAddField::Day => self.quick_add.previous_day(),
            QuickAddField::Hours if forward => self.quick_add.increment_hours(),
            QuickAddField::Hours => self.quick_add.decrement_hours(),
            QuickAddField::Billed => self.quick_add.toggle_billed(),
            QuickAddField::Description => {
                if forward {
                    self.quick_add_description.move_right();
                } else {
                    self.quick_add_description.move_left();
                }
            }
            QuickAddField::Case | QuickAddField::ActivityType => {}
        }
    }

    pub fn quick_add_input_char(&mut self, c: char) {
        self.quick_add_description.insert(c);
        self.quick_add
            .set_description(self.quick_add_description.value.clone());
    }

    pub fn quick_add_input_backspace(&mut self) {
        self.quick_add_description.backspace();
        self.quick_add
            .set_description(self.quick_add_description.value.clone());
    }

    pub fn quick_add_input_clear(&mut self) {
        self.quick_add_description.clear();
        self.quick_add.set_description(String::new());
    }

    /// Add the header form as a new entry. Returns where the grid should
    /// scroll once the new row has been drawn.
    pub fn submit_quick_add(&mut self) -> Option<ScrollTarget> {
        match self.quick_add.submit(&self.week, &mut self.store) {
            Ok(activity) => {
                self.quick_add_description.clear();
                self.quick_add_field = QuickAddField::Day;
                self.refresh_grid();
                self.set_status(format!(
                    "Added {} h to {} on {}",
                    activity.hours,
                    activity.case_id,
                    timesheet::format_iso(activity.day)
                ));
                Some(ScrollTarget {
                    case_id: activity.case_id,
                    day: activity.day,
                })
            }
            Err(e) => {
                tracing::debug!("quick-add rejected: {e}");
                self.set_status(format!("Cannot add: {e}"));
                None
            }
        }
    }
}
