use time::Date;
use timesheet::{ActivityId, CaseId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Grid,
    SelectCase,
    SelectActivityType,
    ConfirmDelete,
    DatePicker,
}

/// Which part of the grid view receives keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusedArea {
    QuickAdd,
    Grid,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorField {
    Case,
    Day,
    ActivityType,
    Description,
    Hours,
    Billable,
    Billed,
}

impl EditorField {
    const ORDER: [EditorField; 7] = [
        EditorField::Case,
        EditorField::Day,
        EditorField::ActivityType,
        EditorField::Description,
        EditorField::Hours,
        EditorField::Billable,
        EditorField::Billed,
    ];

    pub fn next(self) -> Self {
        cycle(&Self::ORDER, self, 1)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ORDER, self, Self::ORDER.len() - 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            EditorField::Case => "Case",
            EditorField::Day => "Day",
            EditorField::ActivityType => "Activity type",
            EditorField::Description => "Description",
            EditorField::Hours => "Hours",
            EditorField::Billable => "Billable",
            EditorField::Billed => "Billed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuickAddField {
    Day,
    Case,
    ActivityType,
    Description,
    Hours,
    Billed,
}

impl QuickAddField {
    const ORDER: [QuickAddField; 6] = [
        QuickAddField::Day,
        QuickAddField::Case,
        QuickAddField::ActivityType,
        QuickAddField::Description,
        QuickAddField::Hours,
        QuickAddField::Billed,
    ];

    pub fn next(self) -> Self {
        cycle(&Self::ORDER, self, 1)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ORDER, self, Self::ORDER.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(order: &[T], current: T, step: usize) -> T {
    let index = order.iter().position(|f| *f == current).unwrap_or(0);
    order[(index + step) % order.len()]
}

/// Form that opened a selection list and receives the picked value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionTarget {
    Editor,
    QuickAdd,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionItem {
    /// Value written back to the form: a case id or an activity type label.
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteContext {
    pub activity_id: ActivityId,
    pub display_label: String,
    pub display_date: String,
    pub display_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatePickerState {
    pub cursor: Date,
}

/// Scroll request queued by a quick-add, applied after the next frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTarget {
    pub case_id: CaseId,
    pub day: Date,
}

/// Single-line text input with a byte-offset cursor kept on char boundaries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some((start, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    pub fn move_left(&mut self) {
        if let Some((start, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// (before, after) the cursor.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_handles_multibyte_chars() {
        let mut input = TextInput::from_str("Overprøving");
        input.move_left();
        input.move_left();
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.value, "Overprving");

        input.insert('ø');
        assert_eq!(input.value, "Overprøving");
        assert_eq!(input.split_at_cursor(), ("Overprø", "ving"));
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInput::from_str("abc");
        input.home();
        input.backspace();
        assert_eq!(input.value, "abc");
        input.end();
        input.move_right();
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn editor_fields_wrap() {
        assert_eq!(EditorField::Billed.next(), EditorField::Case);
        assert_eq!(EditorField::Case.previous(), EditorField::Billed);
        assert_eq!(QuickAddField::Day.previous(), QuickAddField::Billed);
    }
}
