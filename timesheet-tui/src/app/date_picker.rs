use super::*;
use time::{Duration, Month};

impl App {
    pub fn open_date_picker(&mut self) {
        let cursor = if self.week.contains(self.today) {
            self.today
        } else {
            self.week.start()
        };
        self.date_picker = Some(DatePickerState { cursor });
        self.navigate_to(View::DatePicker);
    }

    pub fn date_picker_move(&mut self, days: i64) {
        if let Some(picker) = &mut self.date_picker {
            picker.cursor = picker.cursor.saturating_add(Duration::days(days));
        }
    }

    pub fn date_picker_shift_month(&mut self, forward: bool) {
        if let Some(picker) = &mut self.date_picker {
            picker.cursor = shift_month(picker.cursor, forward);
        }
    }

    pub fn date_picker_today(&mut self) {
        if let Some(picker) = &mut self.date_picker {
            picker.cursor = self.today;
        }
    }

    pub fn confirm_date_picker(&mut self) {
        let Some(picker) = self.date_picker.take() else {
            return;
        };
        self.navigate_to(View::Grid);
        self.jump_to(picker.cursor);
    }

    pub fn cancel_date_picker(&mut self) {
        self.date_picker = None;
        self.navigate_to(View::Grid);
    }
}

/// Same day in the neighbouring month, clamped to that month's length.
fn shift_month(date: Date, forward: bool) -> Date {
    let (year, month) = match (date.month(), forward) {
        (Month::December, true) => (date.year() + 1, Month::January),
        (Month::January, false) => (date.year() - 1, Month::December),
        (month, true) => (date.year(), month.next()),
        (month, false) => (date.year(), month.previous()),
    };
    let day = date.day().min(month.length(year));
    Date::from_calendar_date(year, month, day).unwrap_or(date)
}

/// Monday-first calendar rows for the month containing `date`. Cells
/// outside the month are `None`.
pub fn month_weeks(date: Date) -> Vec<[Option<Date>; 7]> {
    let Ok(first) = Date::from_calendar_date(date.year(), date.month(), 1) else {
        return Vec::new();
    };
    let mut weeks = Vec::new();
    let mut week_start = Week::containing(first).start();
    loop {
        let row: [Option<Date>; 7] = std::array::from_fn(|i| {
            let day = week_start.saturating_add(Duration::days(i as i64));
            (day.month() == date.month() && day.year() == date.year()).then_some(day)
        });
        if row.iter().all(Option::is_none) {
            break;
        }
        weeks.push(row);
        week_start = week_start.saturating_add(Duration::days(7));
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use time::macros::date;

    #[test]
    fn month_weeks_start_on_monday() {
        let weeks = month_weeks(date!(2025 - 03 - 17));

        assert_eq!(weeks.len(), 6);
        // March 1st 2025 is a Saturday
        assert_eq!(weeks[0][5], Some(date!(2025 - 03 - 01)));
        assert!(weeks[0][..5].iter().all(Option::is_none));
        assert_eq!(weeks[5][0], Some(date!(2025 - 03 - 31)));
    }

    #[test]
    fn shift_month_clamps_day() {
        assert_eq!(shift_month(date!(2025 - 01 - 31), true), date!(2025 - 02 - 28));
        assert_eq!(shift_month(date!(2024 - 03 - 31), false), date!(2024 - 02 - 29));
        assert_eq!(shift_month(date!(2025 - 01 - 15), false), date!(2024 - 12 - 15));
    }

    #[test]
    fn picking_a_date_jumps_to_its_week() {
        let mut app = test_app();
        app.open_date_picker();
        assert_eq!(app.date_picker.unwrap().cursor, TODAY);

        app.date_picker_move(7);
        app.date_picker_shift_month(true);
        app.confirm_date_picker();

        assert_eq!(app.current_view, View::Grid);
        assert_eq!(app.week.start(), date!(2025 - 04 - 07));
        assert!(app.date_picker.is_none());
    }
}
