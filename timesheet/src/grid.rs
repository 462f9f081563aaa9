//! Composition of the week sheet: summary rows plus one block of rows per
//! case.
//!
//! Only the first entry (store order) of a (case, day) pair sits in the
//! case's primary row. Every further entry for that pair gets its own row
//! beneath, blank everywhere except in its day column.

use time::Date;

use crate::{Activity, ActivityStore, Case, CaseId, Week};

pub const DEFAULT_EXPECTED_HOURS: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Under,
    Exact,
    Over,
}

impl DayStatus {
    pub fn classify(actual: f64, expected: f64) -> Self {
        if (actual - expected).abs() < 1e-9 {
            DayStatus::Exact
        } else if actual < expected {
            DayStatus::Under
        } else {
            DayStatus::Over
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTotal {
    pub date: Date,
    pub hours: f64,
    pub status: DayStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridCell {
    Entry(Activity),
    /// Unoccupied (case, day) intersection; selecting it starts a new entry.
    Empty { case_id: CaseId, day: Date },
    /// Filler in an extra row.
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Primary,
    Extra,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub case_id: CaseId,
    pub kind: RowKind,
    pub cells: [GridCell; Week::DAYS],
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekGrid {
    pub days: [Date; Week::DAYS],
    pub expected: [f64; Week::DAYS],
    pub actual: [DayTotal; Week::DAYS],
    pub rows: Vec<GridRow>,
}

impl WeekGrid {
    pub fn build(week: &Week, cases: &[Case], store: &ActivityStore, expected: f64) -> Self {
        let days = week.dates();
        let actual = days.map(|date| {
            let hours = store.total_hours(date);
            DayTotal {
                date,
                hours,
                status: DayStatus::classify(hours, expected),
            }
        });

        let mut rows = Vec::new();
        for case in cases {
            let per_day: [Vec<&Activity>; Week::DAYS] =
                std::array::from_fn(|i| store.entries_for_cell(&case.id, days[i]));

            rows.push(GridRow {
                case_id: case.id.clone(),
                kind: RowKind::Primary,
                cells: std::array::from_fn(|i| match per_day[i].first() {
                    Some(activity) => GridCell::Entry((*activity).clone()),
                    None => GridCell::Empty {
                        case_id: case.id.clone(),
                        day: days[i],
                    },
                }),
            });

            for (day_index, entries) in per_day.iter().enumerate() {
                for activity in entries.iter().skip(1) {
                    rows.push(GridRow {
                        case_id: case.id.clone(),
                        kind: RowKind::Extra,
                        cells: std::array::from_fn(|i| {
                            if i == day_index {
                                GridCell::Entry((*activity).clone())
                            } else {
                                GridCell::Blank
                            }
                        }),
                    });
                }
            }
        }

        Self {
            days,
            expected: [expected; Week::DAYS],
            actual,
            rows,
        }
    }

    pub fn row_of_case(&self, case_id: &CaseId) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.kind == RowKind::Primary && &row.case_id == case_id)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&GridCell> {
        self.rows.get(row).and_then(|r| r.cells.get(column))
    }

    pub fn week_total(&self) -> f64 {
        self.actual.iter().map(|t| t.hours).sum()
    }

    /// Position of an entry in the grid, as (row, column).
    pub fn position_of(&self, activity: &Activity) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row_index, row)| {
            row.cells.iter().position(|cell| {
                matches!(cell, GridCell::Entry(a) if a.id == activity.id)
            })
            .map(|column| (row_index, column))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActivityDraft, Hours};
    use time::macros::date;

    fn cases() -> Vec<Case> {
        vec![Case::new("A", "Alpha"), Case::new("B", "Beta")]
    }

    fn draft(case: &str, day: Date, hours: f64, description: &str) -> ActivityDraft {
        ActivityDraft {
            hours: Hours::new(hours).unwrap(),
            description: description.to_string(),
            ..ActivityDraft::blank(CaseId::new(case), day)
        }
    }

    fn week() -> Week {
        Week::containing(date!(2025 - 03 - 03))
    }

    #[test]
    fn empty_store_gives_one_empty_row_per_case() {
        let grid = WeekGrid::build(&week(), &cases(), &ActivityStore::new(), 8.0);

        assert_eq!(grid.rows.len(), 2);
        assert!(grid.rows.iter().all(|r| r.kind == RowKind::Primary));
        assert_eq!(
            grid.cell(1, 2),
            Some(&GridCell::Empty {
                case_id: CaseId::new("B"),
                day: date!(2025 - 03 - 05),
            })
        );
        assert!(grid
            .actual
            .iter()
            .all(|t| t.hours == 0.0 && t.status == DayStatus::Under));
    }

    #[test]
    fn second_same_day_entry_goes_to_extra_row() {
        let store = ActivityStore::with_seed([
            draft("A", date!(2025 - 03 - 03), 2.0, "first"),
            draft("B", date!(2025 - 03 - 04), 1.0, "other case"),
            draft("A", date!(2025 - 03 - 03), 1.5, "second"),
        ]);
        let grid = WeekGrid::build(&week(), &cases(), &store, 8.0);

        assert_eq!(grid.rows.len(), 3);
        assert_eq!(grid.rows[0].kind, RowKind::Primary);
        match &grid.rows[0].cells[0] {
            GridCell::Entry(a) => assert_eq!(a.description, "first"),
            other => panic!("expected entry, got {other:?}"),
        }

        let extra = &grid.rows[1];
        assert_eq!(extra.kind, RowKind::Extra);
        assert_eq!(extra.case_id, CaseId::new("A"));
        match &extra.cells[0] {
            GridCell::Entry(a) => assert_eq!(a.description, "second"),
            other => panic!("expected entry, got {other:?}"),
        }
        assert!(extra.cells[1..].iter().all(|c| *c == GridCell::Blank));

        assert_eq!(grid.row_of_case(&CaseId::new("B")), Some(2));
    }

    #[test]
    fn extra_rows_follow_day_order() {
        let store = ActivityStore::with_seed([
            draft("A", date!(2025 - 03 - 05), 1.0, "wed 1"),
            draft("A", date!(2025 - 03 - 03), 1.0, "mon 1"),
            draft("A", date!(2025 - 03 - 05), 1.0, "wed 2"),
            draft("A", date!(2025 - 03 - 03), 1.0, "mon 2"),
        ]);
        let grid = WeekGrid::build(&week(), &cases()[..1], &store, 8.0);

        let extra_days: Vec<usize> = grid.rows[1..]
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .position(|c| matches!(c, GridCell::Entry(_)))
                    .unwrap()
            })
            .collect();
        assert_eq!(extra_days, vec![0, 2]);
    }

    #[test]
    fn totals_are_classified_against_expected() {
        let store = ActivityStore::with_seed([
            draft("A", date!(2025 - 03 - 03), 8.0, ""),
            draft("A", date!(2025 - 03 - 04), 6.0, ""),
            draft("B", date!(2025 - 03 - 04), 3.0, ""),
            draft("B", date!(2025 - 03 - 05), 2.5, ""),
        ]);
        let grid = WeekGrid::build(&week(), &cases(), &store, 8.0);

        assert_eq!(grid.actual[0].status, DayStatus::Exact);
        assert_eq!(grid.actual[1].status, DayStatus::Over);
        assert_eq!(grid.actual[1].hours, 9.0);
        assert_eq!(grid.actual[2].status, DayStatus::Under);
        assert_eq!(grid.week_total(), 19.5);
    }

    #[test]
    fn unknown_case_counts_in_totals_but_has_no_row() {
        let store =
            ActivityStore::with_seed([draft("Sak 67", date!(2025 - 03 - 03), 2.5, "dangling")]);
        let grid = WeekGrid::build(&week(), &cases(), &store, 8.0);

        assert_eq!(grid.actual[0].hours, 2.5);
        assert!(grid
            .rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .all(|c| !matches!(c, GridCell::Entry(_))));
    }

    #[test]
    fn position_of_finds_extra_row_entries() {
        let mut store = ActivityStore::new();
        store.create(draft("B", date!(2025 - 03 - 06), 1.0, ""));
        let second = store.create(draft("B", date!(2025 - 03 - 06), 1.0, ""));
        let grid = WeekGrid::build(&week(), &cases(), &store, 8.0);

        assert_eq!(grid.position_of(&second), Some((2, 3)));
    }
}
