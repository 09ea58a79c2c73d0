//! Impact figure that counts up when first seen.

use std::time::Duration;

use dioxus::prelude::*;
use msi_core::content::ImpactStat;

use super::fade_in::{next_reveal_id, use_reveal};

/// Number of display updates during one count-up.
pub const COUNT_UP_FRAMES: u32 = 40;

/// Progress after `frame` of `frames` updates.
pub fn count_up_progress(frame: u32, frames: u32) -> f64 {
    if frames == 0 {
        return 1.0;
    }
    (f64::from(frame) / f64::from(frames)).min(1.0)
}

#[derive(Clone, PartialEq, Props)]
pub struct StatCounterProps {
    pub stat: ImpactStat,
    /// Total count-up time
    #[props(default = 1500)]
    pub duration_ms: u64,
    #[props(default)]
    pub delay_ms: u32,
}

#[component]
pub fn StatCounter(props: StatCounterProps) -> Element {
    let element_id = use_hook(next_reveal_id);
    let revealed = use_reveal(element_id.clone(), 0.1, true);
    let mut progress = use_signal(|| 0.0f64);

    let duration_ms = props.duration_ms;
    use_effect(move || {
        if !revealed() {
            return;
        }
        spawn(async move {
            let step = Duration::from_millis(duration_ms / u64::from(COUNT_UP_FRAMES));
            for frame in 1..=COUNT_UP_FRAMES {
                tokio::time::sleep(step).await;
                progress.set(count_up_progress(frame, COUNT_UP_FRAMES));
            }
        });
    });

    let class = if revealed() { "stat visible" } else { "stat" };
    let value = props.stat.display_at(progress());

    rsx! {
        div {
            id: "{element_id}",
            class: "{class}",
            style: "transition-delay: {props.delay_ms}ms;",
            div { class: "stat-number", "{value}" }
            div { class: "stat-label", "{props.stat.label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_runs_zero_to_one() {
        assert_eq!(count_up_progress(0, COUNT_UP_FRAMES), 0.0);
        assert_eq!(count_up_progress(COUNT_UP_FRAMES / 2, COUNT_UP_FRAMES), 0.5);
        assert_eq!(count_up_progress(COUNT_UP_FRAMES, COUNT_UP_FRAMES), 1.0);
        assert_eq!(count_up_progress(COUNT_UP_FRAMES + 5, COUNT_UP_FRAMES), 1.0);
    }

    #[test]
    fn zero_frames_finishes_immediately() {
        assert_eq!(count_up_progress(0, 0), 1.0);
    }
}
