use crate::app::ScrollTarget;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    SaveEditor,
    ConfirmDelete,
    AddQuickEntry,
    SubmitWeek,
    /// Deferred scroll after a quick-add; runs after the next frame.
    ScrollToCase(ScrollTarget),
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
