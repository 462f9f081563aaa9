use crate::app::App;
use crate::config::TimesheetConfig;
use anyhow::Result;
use time::Date;
use timesheet::Week;

/// Build the app state for the week containing `anchor`.
pub fn initialize_app(cfg: &TimesheetConfig, today: Date, anchor: Date) -> Result<App> {
    let reference = cfg.reference_data()?;
    let store = cfg.build_store(&Week::containing(today));
    tracing::info!(
        entries = store.len(),
        cases = reference.cases().len(),
        "Loaded timesheet"
    );
    Ok(App::new(cfg, reference, store, today, anchor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn anchors_on_requested_week_with_demo_entries_in_current_week() {
        let cfg = TimesheetConfig::default();
        let app = initialize_app(&cfg, date!(2025 - 03 - 05), date!(2025 - 03 - 12)).unwrap();

        assert_eq!(app.week.start(), date!(2025 - 03 - 10));
        assert_eq!(app.store.len(), 4);
        assert_eq!(app.grid.week_total(), 0.0);
    }
}
