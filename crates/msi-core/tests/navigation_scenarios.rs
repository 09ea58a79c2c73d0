//! End-to-end header scenarios
//!
//! Drives the controller the way the mounted header does: mount, scroll
//! events, menu taps, link clicks and unmount, against a host that records
//! what was done to the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use msi_core::nav::{Background, MenuIcon, TextScheme};
use msi_core::{NavController, NavItem, ScrollHost, Subscription};

/// Stand-in for the browser page: body overflow plus one scroll listener.
#[derive(Default)]
struct FakePage {
    overflow_hidden: Cell<bool>,
    suspend_calls: Cell<u32>,
    restore_calls: Cell<u32>,
    listener: RefCell<Option<Box<dyn Fn(f64)>>>,
}

impl FakePage {
    fn scroll_to(&self, offset: f64) {
        if let Some(listener) = self.listener.borrow().as_ref() {
            listener(offset);
        }
    }

    fn has_listener(&self) -> bool {
        self.listener.borrow().is_some()
    }
}

impl ScrollHost for FakePage {
    fn suspend_scroll(&self) {
        self.overflow_hidden.set(true);
        self.suspend_calls.set(self.suspend_calls.get() + 1);
    }

    fn restore_scroll(&self) {
        self.overflow_hidden.set(false);
        self.restore_calls.set(self.restore_calls.get() + 1);
    }
}

/// A mounted header: the controller plus its scroll subscription.
struct MountedHeader {
    nav: Rc<RefCell<NavController<Rc<FakePage>>>>,
    _scroll: Subscription,
}

fn mount(page: &Rc<FakePage>, route: &str) -> MountedHeader {
    let nav = Rc::new(RefCell::new(NavController::new(Rc::clone(page), route)));

    let listener_nav = Rc::clone(&nav);
    *page.listener.borrow_mut() = Some(Box::new(move |offset| {
        listener_nav.borrow_mut().on_scroll(offset);
    }));

    let release_page = Rc::clone(page);
    let teardown_nav = Rc::clone(&nav);
    let scroll = Subscription::new(move || {
        release_page.listener.borrow_mut().take();
        teardown_nav.borrow_mut().teardown();
    });

    MountedHeader {
        nav,
        _scroll: scroll,
    }
}

#[test]
fn mount_at_home_highlights_only_home() {
    let page = Rc::new(FakePage::default());
    let header = mount(&page, "/");
    page.scroll_to(0.0);

    let nav = header.nav.borrow();
    assert!(!nav.state().scrolled);

    let links = nav.links(&NavItem::defaults());
    for link in &links {
        assert_eq!(link.active, link.item.label == "Home", "{}", link.item.label);
    }

    let presentation = nav.presentation();
    assert_eq!(presentation.background, Background::Transparent);
    assert_eq!(presentation.text_scheme, TextScheme::Light);
}

#[test]
fn scroll_down_then_back_to_top() {
    let page = Rc::new(FakePage::default());
    let header = mount(&page, "/");

    page.scroll_to(40.0);
    assert!(header.nav.borrow().is_scrolled());
    assert_eq!(header.nav.borrow().presentation().background, Background::Opaque);

    page.scroll_to(0.0);
    assert!(!header.nav.borrow().is_scrolled());
    assert_eq!(
        header.nav.borrow().presentation().background,
        Background::Transparent
    );
}

#[test]
fn link_click_closes_menu_and_restores_scroll() {
    let page = Rc::new(FakePage::default());
    let header = mount(&page, "/");

    header.nav.borrow_mut().toggle_menu();
    assert!(header.nav.borrow().is_menu_open());
    assert!(page.overflow_hidden.get());
    assert_eq!(header.nav.borrow().presentation().menu_icon, MenuIcon::Close);

    // Clicking "About" in the panel: close, then the router navigates.
    header.nav.borrow_mut().close_menu();
    header.nav.borrow_mut().set_route("/about");

    assert!(!header.nav.borrow().is_menu_open());
    assert!(!page.overflow_hidden.get());
    assert!(header.nav.borrow().is_active("/about"));
}

#[test]
fn backdrop_tap_closes_menu() {
    let page = Rc::new(FakePage::default());
    let header = mount(&page, "/services");

    header.nav.borrow_mut().toggle_menu();
    header.nav.borrow_mut().close_menu();
    header.nav.borrow_mut().close_menu();

    assert!(!header.nav.borrow().is_menu_open());
    assert_eq!(page.suspend_calls.get(), 1);
    assert_eq!(page.restore_calls.get(), 1);
}

#[test]
fn unmount_while_open_restores_scroll_and_detaches_listener() {
    let page = Rc::new(FakePage::default());
    let header = mount(&page, "/");

    header.nav.borrow_mut().toggle_menu();
    assert!(page.overflow_hidden.get());
    assert!(page.has_listener());

    let nav = Rc::clone(&header.nav);
    drop(header);

    assert!(!page.overflow_hidden.get());
    assert!(!page.has_listener());
    assert_eq!(page.restore_calls.get(), 1);

    // Scroll events after unmount reach nobody.
    page.scroll_to(120.0);
    assert!(!nav.borrow().is_scrolled());
}

#[test]
fn unmount_while_closed_does_not_touch_overflow() {
    let page = Rc::new(FakePage::default());
    let header = mount(&page, "/");
    drop(header);

    assert_eq!(page.suspend_calls.get(), 0);
    assert_eq!(page.restore_calls.get(), 0);
    assert!(!page.has_listener());
}

#[test]
fn is_active_is_exact() {
    let page = Rc::new(FakePage::default());
    let header = mount(&page, "/about");
    let nav = header.nav.borrow();

    assert!(nav.is_active("/about"));
    assert!(!nav.is_active("/About"));
    assert!(!nav.is_active("/"));
    assert!(!nav.is_active("/about/"));
}
