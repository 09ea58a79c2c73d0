use serde::{Deserialize, Serialize};

/// A single entry in the header navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Text shown in the header and the mobile panel
    pub label: String,
    /// Route path (`/about`) or in-page anchor (`#contact`)
    pub path: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// In-page anchor (`#contact`) rather than a routed page.
    ///
    /// Anchors are plain links; the router only handles `/` paths.
    pub fn is_anchor(&self) -> bool {
        self.path.starts_with('#')
    }

    /// The fixed header navigation, in display order.
    pub fn defaults() -> Vec<NavItem> {
        vec![
            NavItem::new("Home", "/"),
            NavItem::new("About", "/about"),
            NavItem::new("Services", "/services"),
            NavItem::new("Gallery", "/gallery"),
            NavItem::new("Contact", "/contact"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_ordered() {
        let labels: Vec<_> = NavItem::defaults().into_iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Home", "About", "Services", "Gallery", "Contact"]);
    }

    #[test]
    fn anchors_are_told_apart_from_routes() {
        assert!(NavItem::new("About", "#about").is_anchor());
        assert!(!NavItem::new("About", "/about").is_anchor());
        assert!(!NavItem::defaults().iter().any(NavItem::is_anchor));
    }

    #[test]
    fn defaults_map_to_fixed_paths() {
        let items = NavItem::defaults();
        assert_eq!(items[0].path, "/");
        assert_eq!(items[1].path, "/about");
        assert_eq!(items[2].path, "/services");
        assert_eq!(items[3].path, "/gallery");
        assert_eq!(items[4].path, "/contact");
    }
}
