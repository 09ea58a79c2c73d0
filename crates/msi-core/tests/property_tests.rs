//! Property-based tests for the navigation controller
//!
//! Uses proptest to check the header invariants over arbitrary event
//! sequences.

use std::cell::Cell;
use std::rc::Rc;

use msi_core::{NavController, ScrollHost};
use proptest::prelude::*;

// ============================================================================
// Test Host
// ============================================================================

#[derive(Default)]
struct DepthHost {
    /// Outstanding suspends minus restores
    depth: Cell<i32>,
}

impl ScrollHost for DepthHost {
    fn suspend_scroll(&self) {
        self.depth.set(self.depth.get() + 1);
    }

    fn restore_scroll(&self) {
        self.depth.set(self.depth.get() - 1);
    }
}

// ============================================================================
// Strategy Generators
// ============================================================================

/// Events the header receives from the page
#[derive(Debug, Clone)]
enum NavEvent {
    Scroll(f64),
    Toggle,
    Close,
    Route(String),
}

fn route_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/".to_string()),
        Just("/about".to_string()),
        Just("/services".to_string()),
        prop::string::string_regex("/[a-zA-Z]{0,8}").expect("valid regex"),
    ]
}

fn event_strategy() -> impl Strategy<Value = NavEvent> {
    prop_oneof![
        3 => (-100.0f64..5000.0).prop_map(NavEvent::Scroll),
        2 => Just(NavEvent::Toggle),
        1 => Just(NavEvent::Close),
        1 => route_strategy().prop_map(NavEvent::Route),
    ]
}

fn apply(nav: &mut NavController<Rc<DepthHost>>, event: &NavEvent) {
    match event {
        NavEvent::Scroll(offset) => nav.on_scroll(*offset),
        NavEvent::Toggle => nav.toggle_menu(),
        NavEvent::Close => nav.close_menu(),
        NavEvent::Route(route) => nav.set_route(route.clone()),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// scrolled always reflects the sign of the last offset
    #[test]
    fn scrolled_tracks_offset_sign(offsets in prop::collection::vec(-1000.0f64..1000.0, 1..50)) {
        let mut nav = NavController::new(Rc::new(DepthHost::default()), "/");
        for offset in &offsets {
            nav.on_scroll(*offset);
            prop_assert_eq!(nav.is_scrolled(), *offset > 0.0);
        }
    }

    /// Repeating an offset of the same sign changes nothing
    #[test]
    fn scroll_is_idempotent_per_sign(first in -1000.0f64..1000.0, second in -1000.0f64..1000.0) {
        prop_assume!((first > 0.0) == (second > 0.0));
        let mut nav = NavController::new(Rc::new(DepthHost::default()), "/");
        nav.on_scroll(first);
        let before = nav.state();
        nav.on_scroll(second);
        prop_assert_eq!(nav.state(), before);
    }

    /// Toggle is an involution: toggle(toggle(x)) == x
    #[test]
    fn toggle_is_involution(events in prop::collection::vec(event_strategy(), 0..30)) {
        let mut nav = NavController::new(Rc::new(DepthHost::default()), "/");
        for event in &events {
            apply(&mut nav, event);
        }

        let before = nav.state();
        nav.toggle_menu();
        prop_assert_ne!(nav.is_menu_open(), before.menu_open);
        nav.toggle_menu();
        prop_assert_eq!(nav.state(), before);
    }

    /// The page is suspended exactly while the menu is open
    #[test]
    fn lock_held_iff_open(events in prop::collection::vec(event_strategy(), 0..60)) {
        let host = Rc::new(DepthHost::default());
        let mut nav = NavController::new(Rc::clone(&host), "/");

        for event in &events {
            apply(&mut nav, event);
            let expected = if nav.is_menu_open() { 1 } else { 0 };
            prop_assert_eq!(host.depth.get(), expected);
        }

        drop(nav);
        prop_assert_eq!(host.depth.get(), 0);
    }

    /// is_active is plain string equality with the current route
    #[test]
    fn is_active_iff_equal(route in route_strategy(), candidate in route_strategy()) {
        let nav = NavController::new(Rc::new(DepthHost::default()), route.clone());
        prop_assert_eq!(nav.is_active(&candidate), candidate == route);
    }

    /// Presentation is a pure function of state
    #[test]
    fn presentation_follows_state(events in prop::collection::vec(event_strategy(), 0..30)) {
        let mut nav = NavController::new(Rc::new(DepthHost::default()), "/");
        for event in &events {
            apply(&mut nav, event);
        }
        let state = nav.state();
        let p = nav.presentation();
        prop_assert_eq!(p, msi_core::HeaderPresentation::derive(state.scrolled, state.menu_open));
        prop_assert_eq!(p.backdrop_visible, state.menu_open);
    }
}
