pub mod fixtures;

use folio::{ClipboardOutcome, EmailAction, EmailCopyPlan, Scheduled};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Routes `log` output from the crates under test to the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An action together with the absolute time it fires at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired {
    pub at_ms: u32,
    pub action: EmailAction,
}

/// Replays one mailto click on a virtual clock.
///
/// The click happens at `0`, the clipboard write settles at `settle_at_ms`.
/// Returns every action in firing order.
pub fn replay_email_click(
    plan: &EmailCopyPlan,
    settle_at_ms: u32,
    outcome: ClipboardOutcome,
) -> Vec<Fired> {
    let at = |base: u32| move |s: Scheduled| Fired {
        at_ms: base + s.delay_ms,
        action: s.action,
    };

    let mut fired: Vec<Fired> = plan.on_click().into_iter().map(at(0)).collect();
    fired.extend(
        plan.on_clipboard_settled(outcome)
            .into_iter()
            .map(at(settle_at_ms)),
    );
    fired.sort_by_key(|f| f.at_ms);
    fired
}

/// Time of the first navigation, if any.
pub fn navigation_time(fired: &[Fired]) -> Option<u32> {
    fired
        .iter()
        .find(|f| matches!(f.action, EmailAction::Navigate { .. }))
        .map(|f| f.at_ms)
}
