use crate::app::App;

use super::action_queue::{Action, ActionTx};

pub(super) fn run_action(action: Action, app: &mut App, action_tx: &ActionTx) {
    tracing::debug!(?action, "running action");
    match action {
        Action::SaveEditor => app.save_editor(),
        Action::ConfirmDelete => app.confirm_delete(),
        Action::AddQuickEntry => {
            if let Some(target) = app.submit_quick_add() {
                let _ = action_tx.send(Action::ScrollToCase(target));
            }
        }
        Action::SubmitWeek => app.submit_week(),
        Action::ScrollToCase(target) => app.scroll_to(&target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use timesheet::CaseId;

    use super::super::action_queue::channel;

    #[test]
    fn quick_add_queues_scroll() {
        let mut app = test_app();
        app.quick_add.select_case(CaseId::new("SAK 266"));
        app.quick_add.select_activity_type("Admin");
        let (tx, mut rx) = channel();

        run_action(Action::AddQuickEntry, &mut app, &tx);

        match rx.try_recv() {
            Ok(Action::ScrollToCase(target)) => {
                assert_eq!(target.case_id, CaseId::new("SAK 266"))
            }
            other => panic!("expected scroll action, got {other:?}"),
        }
        assert_eq!(app.store.len(), 5);
    }

    #[test]
    fn rejected_quick_add_queues_nothing() {
        let mut app = test_app();
        let (tx, mut rx) = channel();

        run_action(Action::AddQuickEntry, &mut app, &tx);

        assert!(rx.try_recv().is_err());
        assert_eq!(app.store.len(), 4);
    }
}
