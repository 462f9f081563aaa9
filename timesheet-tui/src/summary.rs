use crate::config::TimesheetConfig;
use anyhow::{Context, Result};
use time::Date;
use timesheet::{ActivityStore, DayNames, DayStatus, Week, WeekSubmission};

pub fn run_summary(cfg: &TimesheetConfig, today: Date, date: Date, json: bool) -> Result<()> {
    let store = cfg.build_store(&Week::containing(today));
    let week = Week::containing(date);

    if json {
        let payload = WeekSubmission::from_store(&week, &store);
        let text =
            serde_json::to_string_pretty(&payload).context("Failed to serialize week summary")?;
        println!("{text}");
    } else {
        print!(
            "{}",
            format_summary(&week, &store, cfg.day_names, cfg.expected_hours_per_day)
        );
    }
    Ok(())
}

fn status_label(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Under => "under",
        DayStatus::Exact => "ok",
        DayStatus::Over => "over",
    }
}

/// Plain-text daily totals, one line per day plus a total line.
pub fn format_summary(
    week: &Week,
    store: &ActivityStore,
    names: DayNames,
    expected: f64,
) -> String {
    let mut out = format!("Week {} ({})\n", week.iso_week(), week.heading(names));
    for day in week.days(names) {
        let hours = store.total_hours(day.date);
        let status = DayStatus::classify(hours, expected);
        out.push_str(&format!(
            "{:<10} {}  {:>6.2} h  {}\n",
            day.long_name,
            day.iso,
            hours,
            status_label(status)
        ));
    }
    out.push_str(&format!("{:<21}  {:>6.2} h\n", "Total", store.week_total(week)));
    out
}
