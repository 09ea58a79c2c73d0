//! Presentation derived from [`NavigationState`](super::NavigationState).
//!
//! Nothing here is stored. The header recomputes these on every render, so
//! the style can never drift from the state it reflects.

/// Header background treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
    /// Over the hero image, before any scrolling
    Transparent,
    /// Solid white with a shadow once the page has scrolled
    Opaque,
}

impl Background {
    pub fn for_scroll(scrolled: bool) -> Self {
        if scrolled {
            Background::Opaque
        } else {
            Background::Transparent
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Background::Transparent => "header-transparent",
            Background::Opaque => "header-opaque",
        }
    }
}

/// Text color scheme for header links and the menu button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextScheme {
    /// White text on the transparent header
    Light,
    /// Dark grey text on the opaque header
    Dark,
}

impl TextScheme {
    pub fn for_scroll(scrolled: bool) -> Self {
        if scrolled {
            TextScheme::Dark
        } else {
            TextScheme::Light
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            TextScheme::Light => "text-light",
            TextScheme::Dark => "text-dark",
        }
    }
}

/// Icon shown on the mobile menu button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    /// Hamburger, colored to match the header text
    Bars(TextScheme),
    /// Close cross, always dark since it sits over the white panel
    Close,
}

impl MenuIcon {
    pub fn class(&self) -> &'static str {
        match self {
            MenuIcon::Bars(TextScheme::Light) => "menu-icon bars text-light",
            MenuIcon::Bars(TextScheme::Dark) => "menu-icon bars text-dark",
            MenuIcon::Close => "menu-icon close",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            MenuIcon::Bars(_) => "Open menu",
            MenuIcon::Close => "Close menu",
        }
    }
}

/// Slide-out panel position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelVisibility {
    /// Translated fully off the right edge
    Hidden,
    Visible,
}

impl PanelVisibility {
    pub fn class(&self) -> &'static str {
        match self {
            PanelVisibility::Hidden => "mobile-panel",
            PanelVisibility::Visible => "mobile-panel open",
        }
    }
}

/// Everything the header needs to style itself for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderPresentation {
    pub background: Background,
    pub text_scheme: TextScheme,
    pub menu_icon: MenuIcon,
    pub panel: PanelVisibility,
    pub backdrop_visible: bool,
}

impl HeaderPresentation {
    pub fn derive(scrolled: bool, menu_open: bool) -> Self {
        let text_scheme = TextScheme::for_scroll(scrolled);
        Self {
            background: Background::for_scroll(scrolled),
            text_scheme,
            menu_icon: if menu_open {
                MenuIcon::Close
            } else {
                MenuIcon::Bars(text_scheme)
            },
            panel: if menu_open {
                PanelVisibility::Visible
            } else {
                PanelVisibility::Hidden
            },
            backdrop_visible: menu_open,
        }
    }

    /// Class list for the `<header>` element.
    pub fn header_class(&self) -> String {
        format!("site-header {}", self.background.class())
    }

    /// Class list for a desktop nav link.
    pub fn link_class(&self, active: bool) -> String {
        if active {
            format!("nav-link {} active", self.text_scheme.class())
        } else {
            format!("nav-link {}", self.text_scheme.class())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_is_transparent_and_light() {
        let p = HeaderPresentation::derive(false, false);
        assert_eq!(p.background, Background::Transparent);
        assert_eq!(p.text_scheme, TextScheme::Light);
        assert_eq!(p.menu_icon, MenuIcon::Bars(TextScheme::Light));
        assert_eq!(p.panel, PanelVisibility::Hidden);
        assert!(!p.backdrop_visible);
    }

    #[test]
    fn scrolled_is_opaque_and_dark() {
        let p = HeaderPresentation::derive(true, false);
        assert_eq!(p.background, Background::Opaque);
        assert_eq!(p.text_scheme, TextScheme::Dark);
        assert_eq!(p.menu_icon, MenuIcon::Bars(TextScheme::Dark));
    }

    #[test]
    fn open_menu_shows_close_icon_panel_and_backdrop() {
        for scrolled in [false, true] {
            let p = HeaderPresentation::derive(scrolled, true);
            assert_eq!(p.menu_icon, MenuIcon::Close);
            assert_eq!(p.panel, PanelVisibility::Visible);
            assert!(p.backdrop_visible);
        }
    }

    #[test]
    fn class_strings() {
        let p = HeaderPresentation::derive(true, false);
        assert_eq!(p.header_class(), "site-header header-opaque");
        assert_eq!(p.link_class(true), "nav-link text-dark active");
        assert_eq!(p.link_class(false), "nav-link text-dark");
        assert_eq!(PanelVisibility::Visible.class(), "mobile-panel open");
        assert_eq!(MenuIcon::Close.aria_label(), "Close menu");
    }
}
