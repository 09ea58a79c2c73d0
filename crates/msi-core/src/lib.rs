//! Maths and Science Infinity site core library
//!
//! Framework-free logic behind the MSI brochure site.
//!
//! ## Overview
//!
//! The site itself is mostly presentation. The pieces that carry behavior live
//! here so they can be tested without a renderer:
//!
//! - **Navigation**: the header's scroll/menu/route state machine, the scroll
//!   lock held while the mobile menu is open, and the presentation derived
//!   from that state.
//! - **Reveal**: the intersection-driven fade-in trigger used by page sections.
//! - **Config**: organization details and the nav item list, loadable from JSON.
//! - **Content**: the static tables the pages render (services, impact stats,
//!   testimonials, gallery).
//!
//! ## Quick Start
//!
//! ```
//! use msi_core::nav::{NavController, NoopScrollHost};
//!
//! let mut nav = NavController::new(NoopScrollHost, "/");
//! nav.on_scroll(40.0);
//! nav.toggle_menu();
//!
//! let state = nav.state();
//! assert!(state.scrolled);
//! assert!(state.menu_open);
//! assert!(nav.is_active("/"));
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod nav;
pub mod reveal;

// Re-exports
pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};
pub use nav::{
    HeaderPresentation, NavController, NavItem, NavLink, NavigationState, ScrollHost, ScrollLock,
    Subscription,
};
pub use reveal::RevealTrigger;
