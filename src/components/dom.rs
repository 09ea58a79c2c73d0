//! Adapters between the header controller and the webview page.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::document::{self, Eval};
use msi_core::{ScrollHost, Subscription};

/// Prefix of the window properties holding header scroll listeners.
const SCROLL_LISTENER_PREFIX: &str = "__msiHeaderScroll";

static NEXT_LISTENER_ID: AtomicUsize = AtomicUsize::new(0);

/// Window property for one subscription, unique per mounted header.
pub fn scroll_listener_key() -> String {
    format!(
        "{}_{}",
        SCROLL_LISTENER_PREFIX,
        NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed)
    )
}

/// Body overflow on the live page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DomScrollHost;

impl ScrollHost for DomScrollHost {
    fn suspend_scroll(&self) {
        let _ = document::eval("document.body.style.overflow = 'hidden';");
    }

    fn restore_scroll(&self) {
        let _ = document::eval("document.body.style.overflow = 'unset';");
    }
}

/// Registers a window scroll listener that reports `scrollY`, starting with
/// the current offset.
pub fn scroll_listener_script(key: &str) -> String {
    format!(
        r#"
if (window.{key}) {{
  window.removeEventListener('scroll', window.{key});
}}
window.{key} = () => dioxus.send(window.scrollY);
window.addEventListener('scroll', window.{key}, {{ passive: true }});
window.{key}();
"#
    )
}

/// Removes the listener installed by [`scroll_listener_script`].
pub fn scroll_release_script(key: &str) -> String {
    format!(
        r#"
if (window.{key}) {{
  window.removeEventListener('scroll', window.{key});
  delete window.{key};
}}
"#
    )
}

/// Start listening to window scrolling.
///
/// Offsets arrive on the returned channel until the subscription is
/// released or dropped.
pub fn subscribe_window_scroll() -> (Eval, Subscription) {
    let key = scroll_listener_key();
    let offsets = document::eval(&scroll_listener_script(&key));
    let subscription = Subscription::new(move || {
        let _ = document::eval(&scroll_release_script(&key));
        tracing::debug!(key = %key, "window scroll listener removed");
    });
    (offsets, subscription)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_script_registers_and_reports_initial_offset() {
        let script = scroll_listener_script("__msiHeaderScroll_0");
        assert!(script.contains("window.addEventListener('scroll', window.__msiHeaderScroll_0"));
        assert!(script.contains("dioxus.send(window.scrollY)"));
        assert!(script.trim_end().ends_with("window.__msiHeaderScroll_0();"));
    }

    #[test]
    fn release_script_removes_same_listener() {
        let script = scroll_release_script("__msiHeaderScroll_0");
        assert!(script.contains("window.removeEventListener('scroll', window.__msiHeaderScroll_0)"));
        assert!(script.contains("delete window.__msiHeaderScroll_0"));
    }

    #[test]
    fn overlapping_headers_get_separate_slots() {
        let first = scroll_listener_key();
        let second = scroll_listener_key();
        assert_ne!(first, second);
        assert!(first.starts_with("__msiHeaderScroll_"));

        // Tearing down the first header leaves the second one's listener alone.
        let release_first = scroll_release_script(&first);
        assert!(!release_first.contains(&format!("window.{};", second)));
        assert!(!release_first.contains(&format!("window.{})", second)));
    }
}
