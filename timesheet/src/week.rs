use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month, Weekday};

use crate::format_iso;

/// Label set used for weekday and month names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayNames {
    #[default]
    English,
    Norwegian,
}

impl DayNames {
    pub fn long(self, weekday: Weekday) -> &'static str {
        match (self, weekday) {
            (DayNames::English, Weekday::Monday) => "MONDAY",
            (DayNames::English, Weekday::Tuesday) => "TUESDAY",
            (DayNames::English, Weekday::Wednesday) => "WEDNESDAY",
            (DayNames::English, Weekday::Thursday) => "THURSDAY",
            (DayNames::English, Weekday::Friday) => "FRIDAY",
            (DayNames::English, Weekday::Saturday) => "SATURDAY",
            (DayNames::English, Weekday::Sunday) => "SUNDAY",
            (DayNames::Norwegian, Weekday::Monday) => "MANDAG",
            (DayNames::Norwegian, Weekday::Tuesday) => "TIRSDAG",
            (DayNames::Norwegian, Weekday::Wednesday) => "ONSDAG",
            (DayNames::Norwegian, Weekday::Thursday) => "TORSDAG",
            (DayNames::Norwegian, Weekday::Friday) => "FREDAG",
            (DayNames::Norwegian, Weekday::Saturday) => "LØRDAG",
            (DayNames::Norwegian, Weekday::Sunday) => "SØNDAG",
        }
    }

    pub fn short(self, weekday: Weekday) -> &'static str {
        match (self, weekday) {
            (DayNames::English, Weekday::Monday) => "MON",
            (DayNames::English, Weekday::Tuesday) => "TUE",
            (DayNames::English, Weekday::Wednesday) => "WED",
            (DayNames::English, Weekday::Thursday) => "THU",
            (DayNames::English, Weekday::Friday) => "FRI",
            (DayNames::English, Weekday::Saturday) => "SAT",
            (DayNames::English, Weekday::Sunday) => "SUN",
            (DayNames::Norwegian, Weekday::Monday) => "MAN.",
            (DayNames::Norwegian, Weekday::Tuesday) => "TIR.",
            (DayNames::Norwegian, Weekday::Wednesday) => "ONS.",
            (DayNames::Norwegian, Weekday::Thursday) => "TOR.",
            (DayNames::Norwegian, Weekday::Friday) => "FRE.",
            (DayNames::Norwegian, Weekday::Saturday) => "LØR.",
            (DayNames::Norwegian, Weekday::Sunday) => "SØN.",
        }
    }

    pub fn month(self, month: Month) -> &'static str {
        match self {
            DayNames::English => match month {
                Month::January => "JANUARY",
                Month::February => "FEBRUARY",
                Month::March => "MARCH",
                Month::April => "APRIL",
                Month::May => "MAY",
                Month::June => "JUNE",
                Month::July => "JULY",
                Month::August => "AUGUST",
                Month::September => "SEPTEMBER",
                Month::October => "OCTOBER",
                Month::November => "NOVEMBER",
                Month::December => "DECEMBER",
            },
            DayNames::Norwegian => match month {
                Month::January => "JANUAR",
                Month::February => "FEBRUAR",
                Month::March => "MARS",
                Month::April => "APRIL",
                Month::May => "MAI",
                Month::June => "JUNI",
                Month::July => "JULI",
                Month::August => "AUGUST",
                Month::September => "SEPTEMBER",
                Month::October => "OKTOBER",
                Month::November => "NOVEMBER",
                Month::December => "DESEMBER",
            },
        }
    }

    /// Label of the expected-hours row in the week sheet.
    pub fn expected_label(self) -> &'static str {
        match self {
            DayNames::English => "Expected Hours",
            DayNames::Norwegian => "Forventedet Timer",
        }
    }

    /// Label of the logged-hours row in the week sheet.
    pub fn actual_label(self) -> &'static str {
        match self {
            DayNames::English => "Actual Hours",
            DayNames::Norwegian => "Faktiske Timer",
        }
    }
}

/// Display descriptor for one column of the week grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    pub date: Date,
    pub long_name: &'static str,
    pub short_name: &'static str,
    pub day_of_month: u8,
    pub iso: String,
}

impl WeekDay {
    pub fn new(date: Date, names: DayNames) -> Self {
        Self {
            date,
            long_name: names.long(date.weekday()),
            short_name: names.short(date.weekday()),
            day_of_month: date.day(),
            iso: format_iso(date),
        }
    }
}

/// The displayed Monday-to-Sunday week.
///
/// The anchor is always the Monday of the week, whatever date it was built
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Week {
    anchor: Date,
}

impl Week {
    pub const DAYS: usize = 7;

    pub fn containing(date: Date) -> Self {
        Self {
            anchor: monday_on_or_before(date),
        }
    }

    pub fn start(&self) -> Date {
        self.anchor
    }

    pub fn end(&self) -> Date {
        self.anchor.saturating_add(Duration::days(6))
    }

    pub fn dates(&self) -> [Date; Week::DAYS] {
        std::array::from_fn(|i| self.anchor.saturating_add(Duration::days(i as i64)))
    }

    pub fn days(&self, names: DayNames) -> [WeekDay; Week::DAYS] {
        self.dates().map(|date| WeekDay::new(date, names))
    }

    pub fn date_at(&self, index: usize) -> Option<Date> {
        self.dates().get(index).copied()
    }

    pub fn index_of(&self, date: Date) -> Option<usize> {
        self.dates().iter().position(|d| *d == date)
    }

    pub fn contains(&self, date: Date) -> bool {
        date >= self.start() && date <= self.end()
    }

    pub fn iso_week(&self) -> u8 {
        self.anchor.iso_week()
    }

    pub fn previous(&mut self) {
        self.anchor = self.anchor.saturating_sub(Duration::weeks(1));
    }

    pub fn next(&mut self) {
        self.anchor = self.anchor.saturating_add(Duration::weeks(1));
    }

    pub fn jump_to(&mut self, date: Date) {
        self.anchor = monday_on_or_before(date);
    }

    /// "MARCH 3, 2025"
    pub fn heading(&self, names: DayNames) -> String {
        format!(
            "{} {}, {}",
            names.month(self.anchor.month()),
            self.anchor.day(),
            self.anchor.year()
        )
    }
}

fn monday_on_or_before(date: Date) -> Date {
    let offset = date.weekday().number_days_from_monday() as i64;
    date.saturating_sub(Duration::days(offset))
}
