//! Site configuration.
//!
//! Organization details and the header navigation. The built-in defaults are
//! the live site's values; a JSON file can override any of them.
//!
//! ```json
//! {
//!   "organization": "Maths and Science Infinity",
//!   "phone": "+27 43 726 2171",
//!   "nav_items": [{ "label": "Home", "path": "/" }]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::nav::NavItem;

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "site.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Full organization name, used in headings and the footer
    pub organization: String,
    /// Short name shown as the header logo text
    pub short_name: String,
    /// Hero subtitle
    pub tagline: String,
    /// Display form of the contact number
    pub phone: String,
    pub email: String,
    /// Where the "Donate Now" buttons go
    pub donate_path: String,
    pub nav_items: Vec<NavItem>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            organization: "Maths and Science Infinity".to_string(),
            short_name: "MSI".to_string(),
            tagline: "Black Founded & Youth Managed Non-Profit Organization".to_string(),
            phone: "+27 43 726 2171".to_string(),
            email: "info@mathsandscienceinfinity.org.za".to_string(),
            donate_path: "/donate".to_string(),
            nav_items: NavItem::defaults(),
        }
    }
}

impl SiteConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), items = config.nav_items.len(), "Loaded site config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> SiteResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check nav items: non-empty labels, route or anchor paths, no duplicates.
    pub fn validate(&self) -> SiteResult<()> {
        if self.nav_items.is_empty() {
            return Err(SiteError::InvalidConfig("nav_items is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for item in &self.nav_items {
            if item.label.trim().is_empty() {
                return Err(SiteError::InvalidConfig(format!(
                    "nav item for {} has an empty label",
                    item.path
                )));
            }
            if !(item.path.starts_with('/') || item.path.starts_with('#')) {
                return Err(SiteError::InvalidConfig(format!(
                    "nav path must start with '/' or '#': {}",
                    item.path
                )));
            }
            if !seen.insert(item.path.as_str()) {
                return Err(SiteError::InvalidConfig(format!(
                    "duplicate nav path: {}",
                    item.path
                )));
            }
        }

        if !self.donate_path.starts_with('/') {
            return Err(SiteError::InvalidConfig(format!(
                "donate_path must start with '/': {}",
                self.donate_path
            )));
        }

        Ok(())
    }

    /// `tel:` link for the phone number, digits and leading `+` only.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
