//! Scroll-reveal wrapper.
//!
//! Watches an element with an `IntersectionObserver` in the webview and feeds
//! the reported ratios through [`RevealTrigger`].

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::document;
use dioxus::prelude::*;
use msi_core::reveal::{RevealTrigger, DEFAULT_THRESHOLD};

static NEXT_REVEAL_ID: AtomicUsize = AtomicUsize::new(0);

/// Fresh DOM id for an observed element.
pub fn next_reveal_id() -> String {
    format!("reveal-{}", NEXT_REVEAL_ID.fetch_add(1, Ordering::Relaxed))
}

/// Script that observes `element_id` and sends intersection ratios back.
///
/// With `once` the observer disconnects itself after the first reveal.
pub fn observer_script(element_id: &str, threshold: f64, once: bool) -> String {
    format!(
        r#"
const el = document.getElementById({element_id:?});
if (el) {{
  const observer = new IntersectionObserver((entries) => {{
    for (const entry of entries) {{
      dioxus.send(entry.intersectionRatio);
      if ({once} && entry.intersectionRatio > 0 && entry.intersectionRatio >= {threshold}) {{
        observer.disconnect();
      }}
    }}
  }}, {{ threshold: [0, {threshold}] }});
  observer.observe(el);
}}
"#
    )
}

/// Hook: whether the element with `element_id` has been revealed.
pub fn use_reveal(element_id: String, threshold: f64, once: bool) -> Signal<bool> {
    let mut revealed = use_signal(|| false);
    let trigger = use_hook(|| RevealTrigger::new(threshold, once));

    use_effect(move || {
        let element_id = element_id.clone();
        let script = observer_script(&element_id, trigger.threshold(), trigger.trigger_once());
        spawn(async move {
            let mut trigger = trigger;
            let mut eval = document::eval(&script);
            while let Ok(ratio) = eval.recv::<f64>().await {
                let visible = trigger.observe(ratio);
                if visible != *revealed.peek() {
                    revealed.set(visible);
                }
                if visible && trigger.trigger_once() {
                    tracing::trace!(element = %element_id, "revealed");
                    break;
                }
            }
        });
    });

    revealed
}

#[derive(Clone, PartialEq, Props)]
pub struct FadeInProps {
    pub children: Element,
    /// Stagger delay, see [`msi_core::reveal::stagger_delay_ms`]
    #[props(default)]
    pub delay_ms: u32,
    #[props(default = DEFAULT_THRESHOLD)]
    pub threshold: f64,
    /// Stay visible after the first reveal
    #[props(default = true)]
    pub once: bool,
    /// DOM id, for in-page anchors such as `#about`
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Fades and slides its children up when they scroll into view.
#[component]
pub fn FadeIn(props: FadeInProps) -> Element {
    let element_id = use_hook(|| props.id.clone().unwrap_or_else(next_reveal_id));
    let revealed = use_reveal(element_id.clone(), props.threshold, props.once);

    let extra = props.class.as_deref().unwrap_or("");
    let class = if revealed() {
        format!("fade-in visible {}", extra)
    } else {
        format!("fade-in {}", extra)
    };

    rsx! {
        div {
            id: "{element_id}",
            class: "{class}",
            style: "transition-delay: {props.delay_ms}ms;",
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_ids_are_unique() {
        let a = next_reveal_id();
        let b = next_reveal_id();
        assert_ne!(a, b);
        assert!(a.starts_with("reveal-"));
    }

    #[test]
    fn script_targets_element_and_threshold() {
        let script = observer_script("about", 0.1, true);
        assert!(script.contains(r#"document.getElementById("about")"#));
        assert!(script.contains("threshold: [0, 0.1]"));
        assert!(script.contains("if (true &&"));
    }

    #[test]
    fn repeating_script_keeps_observing() {
        let script = observer_script("reveal-3", 0.5, false);
        assert!(script.contains("if (false &&"));
    }
}
