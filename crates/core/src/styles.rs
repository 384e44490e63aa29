//! CSS injected into the page at mount time.
//!
//! The page stylesheet is not required to know about the highlight class or
//! the toast keyframes, so both are supplied here.

use crate::config::ToastConfig;

pub const ACTIVE_LINK_STYLE_ID: &str = "folio-active-link-style";
pub const TOAST_STYLE_ID: &str = "folio-toast-style";

/// Highlight rule for the active nav link.
///
/// Each part of a comma-separated selector list gets the class.
pub fn active_link_css(nav_link_selector: &str, active_class: &str) -> String {
    let selector = nav_link_selector
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| format!("{part}.{active_class}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"
    {selector} {{
        color: var(--color-accent);
        background: var(--color-surface-elevated);
    }}
"#
    )
}

pub const TOAST_KEYFRAMES_CSS: &str = r#"
    @keyframes slideUp {
        from {
            opacity: 0;
            transform: translate(-50%, 20px);
        }
        to {
            opacity: 1;
            transform: translate(-50%, 0);
        }
    }

    @keyframes slideDown {
        from {
            opacity: 1;
            transform: translate(-50%, 0);
        }
        to {
            opacity: 0;
            transform: translate(-50%, 20px);
        }
    }
"#;

fn seconds(ms: u32) -> String {
    format!("{}s", f64::from(ms) / 1000.0)
}

pub fn toast_enter_animation(config: &ToastConfig) -> String {
    format!("slideUp {} ease-out", seconds(config.exit_ms))
}

pub fn toast_exit_animation(config: &ToastConfig) -> String {
    format!("slideDown {} ease-out", seconds(config.exit_ms))
}

/// Inline `style` attribute for a freshly created toast.
pub fn toast_inline_css(config: &ToastConfig) -> String {
    format!(
        "position: fixed; \
         bottom: 30px; \
         left: 50%; \
         transform: translateX(-50%); \
         background: var(--color-accent); \
         color: var(--color-bg); \
         padding: 1rem 2rem; \
         border-radius: 8px; \
         font-weight: 500; \
         z-index: 1000; \
         animation: {};",
        toast_enter_animation(config)
    )
}
