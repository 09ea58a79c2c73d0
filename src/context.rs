//! Site context provider.
//!
//! Provides the loaded [`SiteConfig`] to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(get_site_config()));
//!
//! // In child components
//! let site = use_site_config();
//! let phone = site.read().phone.clone();
//! ```

use dioxus::prelude::*;
use msi_core::SiteConfig;

/// Get the site config set from the command line.
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Hook to access the site config from context.
pub fn use_site_config() -> Signal<SiteConfig> {
    use_context::<Signal<SiteConfig>>()
}
