//! Copy-email-to-clipboard interaction.
//!
//! Clicking the mailto link copies the bare address, confirms with a toast
//! and still opens the mail client. [`EmailCopyPlan`] decides which of those
//! effects happen and when; the host only executes the scheduled actions.

use crate::config::{EmailConfig, NavigationPolicy};

pub const MAILTO_SCHEME: &str = "mailto:";

/// Strips the first `mailto:` from `href`.
///
/// Query parameters such as `?subject=` are kept as written.
pub fn mailto_address(href: &str) -> String {
    href.replacen(MAILTO_SCHEME, "", 1)
}

/// Result of the asynchronous clipboard write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Written,
    /// Permission denied, no clipboard API, or any other failure.
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailAction {
    ShowToast,
    Navigate { href: String },
}

/// An action to run `delay_ms` after the event that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled {
    pub delay_ms: u32,
    pub action: EmailAction,
}

impl Scheduled {
    pub fn now(action: EmailAction) -> Self {
        Self {
            delay_ms: 0,
            action,
        }
    }
}

/// The effects of one mailto click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCopyPlan {
    href: String,
    address: String,
    policy: NavigationPolicy,
    navigation_delay_ms: u32,
}

impl EmailCopyPlan {
    pub fn new(href: &str, config: &EmailConfig) -> Self {
        Self {
            href: href.to_string(),
            address: mailto_address(href),
            policy: config.navigation,
            navigation_delay_ms: config.navigation_delay_ms,
        }
    }

    /// The text to write to the clipboard.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    fn navigate(&self) -> Scheduled {
        Scheduled {
            delay_ms: self.navigation_delay_ms,
            action: EmailAction::Navigate {
                href: self.href.clone(),
            },
        }
    }

    /// Actions scheduled from the click itself, before the clipboard answers.
    pub fn on_click(&self) -> Vec<Scheduled> {
        match self.policy {
            NavigationPolicy::Unconditional => vec![self.navigate()],
            NavigationPolicy::AfterClipboard => Vec::new(),
        }
    }

    /// Actions scheduled once the clipboard write has settled.
    ///
    /// A rejected write shows nothing.
    pub fn on_clipboard_settled(&self, outcome: ClipboardOutcome) -> Vec<Scheduled> {
        let mut actions = Vec::new();
        if outcome == ClipboardOutcome::Written {
            actions.push(Scheduled::now(EmailAction::ShowToast));
        }
        if self.policy == NavigationPolicy::AfterClipboard {
            actions.push(self.navigate());
        }
        actions
    }
}
