//! Navigation header state.
//!
//! The header tracks three things: whether the page has scrolled, whether the
//! mobile menu is open, and which route is showing. Everything the header
//! renders is derived from those.
//!
//! ## Menu state machine
//!
//! ```text
//!            toggle_menu
//!   Closed ───────────────▶ Open(ScrollLock)
//!     ▲                       │
//!     └───────────────────────┘
//!       toggle_menu / close_menu / teardown
//! ```
//!
//! The scroll lock lives inside the `Open` variant, so the host page is
//! suspended exactly while the menu is open.

mod controller;
mod item;
pub mod presentation;
mod scroll;

pub use controller::{is_scrolled_offset, MenuState, NavController, NavLink, NavigationState};
pub use item::NavItem;
pub use presentation::{Background, HeaderPresentation, MenuIcon, PanelVisibility, TextScheme};
pub use scroll::{NoopScrollHost, ScrollHost, ScrollLock, Subscription};
