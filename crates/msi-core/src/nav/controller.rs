//! The navigation header controller.

use std::fmt;

use super::item::NavItem;
use super::presentation::HeaderPresentation;
use super::scroll::{ScrollHost, ScrollLock};

/// Snapshot of the header's observable state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    /// Page scroll offset is above zero
    pub scrolled: bool,
    /// Mobile slide-out panel is open
    pub menu_open: bool,
    /// Path reported by the router
    pub current_route: String,
}

/// Whether a viewport offset counts as scrolled.
///
/// Anything not strictly positive, NaN and overscroll bounce included, is the
/// top of the page.
pub fn is_scrolled_offset(offset: f64) -> bool {
    offset > 0.0
}

/// Mobile menu state. An open menu owns the scroll lock.
pub enum MenuState<H: ScrollHost> {
    Closed,
    Open(ScrollLock<H>),
}

impl<H: ScrollHost> MenuState<H> {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open(_))
    }
}

impl<H: ScrollHost> fmt::Debug for MenuState<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuState::Closed => f.write_str("Closed"),
            MenuState::Open(_) => f.write_str("Open"),
        }
    }
}

/// A nav item paired with whether it matches the current route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub item: NavItem,
    pub active: bool,
}

/// Owns the header state for one mounted header.
///
/// Created closed and unscrolled. Dropping the controller while the menu is
/// open restores host scrolling.
pub struct NavController<H: ScrollHost + Clone> {
    host: H,
    scrolled: bool,
    menu: MenuState<H>,
    current_route: String,
}

impl<H: ScrollHost + Clone> NavController<H> {
    pub fn new(host: H, current_route: impl Into<String>) -> Self {
        Self {
            host,
            scrolled: false,
            menu: MenuState::Closed,
            current_route: current_route.into(),
        }
    }

    /// Record a new viewport scroll offset.
    pub fn on_scroll(&mut self, offset: f64) {
        let scrolled = is_scrolled_offset(offset);
        if scrolled != self.scrolled {
            tracing::debug!(offset, scrolled, "header scroll state changed");
            self.scrolled = scrolled;
        }
    }

    /// Open the menu if closed, close it if open.
    pub fn toggle_menu(&mut self) {
        self.menu = match std::mem::replace(&mut self.menu, MenuState::Closed) {
            MenuState::Closed => {
                tracing::debug!(route = %self.current_route, "menu opened");
                MenuState::Open(ScrollLock::acquire(self.host.clone()))
            }
            MenuState::Open(lock) => {
                drop(lock);
                tracing::debug!(route = %self.current_route, "menu closed");
                MenuState::Closed
            }
        };
    }

    /// Close the menu. Does nothing when it is already closed.
    pub fn close_menu(&mut self) {
        if self.menu.is_open() {
            self.menu = MenuState::Closed;
            tracing::debug!(route = %self.current_route, "menu dismissed");
        }
    }

    /// Route-change notification from the router.
    pub fn set_route(&mut self, route: impl Into<String>) {
        let route = route.into();
        if route != self.current_route {
            tracing::debug!(from = %self.current_route, to = %route, "route changed");
            self.current_route = route;
        }
    }

    /// Exact, case-sensitive match against the current route.
    pub fn is_active(&self, path: &str) -> bool {
        self.current_route == path
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn state(&self) -> NavigationState {
        NavigationState {
            scrolled: self.scrolled,
            menu_open: self.menu.is_open(),
            current_route: self.current_route.clone(),
        }
    }

    pub fn presentation(&self) -> HeaderPresentation {
        HeaderPresentation::derive(self.scrolled, self.menu.is_open())
    }

    /// Pair each item with its active flag, keeping order.
    pub fn links(&self, items: &[NavItem]) -> Vec<NavLink> {
        items
            .iter()
            .map(|item| NavLink {
                item: item.clone(),
                active: self.is_active(&item.path),
            })
            .collect()
    }

    /// Release anything held on the host. Called on unmount.
    pub fn teardown(&mut self) {
        if self.menu.is_open() {
            tracing::debug!("header torn down with menu open");
        }
        self.menu = MenuState::Closed;
    }
}

impl<H: ScrollHost + Clone> fmt::Debug for NavController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavController")
            .field("scrolled", &self.scrolled)
            .field("menu", &self.menu)
            .field("current_route", &self.current_route)
            .finish()
    }
}
