//! Mobile Navigation Component
//!
//! Slide-out panel from the right edge with a dimmed backdrop, for screens
//! narrower than 768px. Any link or the backdrop closes it.

use dioxus::prelude::*;
use msi_core::nav::PanelVisibility;
use msi_core::NavLink;
use msi_ui::{button_class, ButtonSize, ButtonVariant};

use crate::components::icons::PhoneIcon;

#[derive(Props, Clone, PartialEq)]
pub struct MobileNavProps {
    /// Nav items with their active flags
    pub links: Vec<NavLink>,
    pub panel: PanelVisibility,
    pub backdrop_visible: bool,
    pub phone: String,
    pub phone_href: String,
    pub donate_path: String,
    /// Called for link selection and backdrop taps
    pub on_close: EventHandler<()>,
}

/// Mobile slide-out menu
///
/// Always rendered so the panel can slide; hidden on desktop via CSS.
#[component]
pub fn MobileNav(props: MobileNavProps) -> Element {
    let on_close = props.on_close;
    let hidden = props.panel == PanelVisibility::Hidden;
    let donate_class = button_class(ButtonVariant::Primary, ButtonSize::Block, None);

    rsx! {
        if props.backdrop_visible {
            div {
                class: "mobile-backdrop",
                onclick: move |_| on_close.call(()),
            }
        }

        aside {
            class: "{props.panel.class()}",
            "aria-hidden": "{hidden}",

            div { class: "mobile-panel-links",
                for link in props.links.iter() {
                    if link.item.is_anchor() {
                        a {
                            key: "{link.item.path}",
                            href: "{link.item.path}",
                            class: "mobile-link",
                            onclick: move |_| on_close.call(()),
                            "{link.item.label}"
                        }
                    } else {
                        Link {
                            key: "{link.item.path}",
                            to: link.item.path.clone(),
                            class: if link.active { "mobile-link active" } else { "mobile-link" },
                            onclick: move |_| on_close.call(()),
                            "{link.item.label}"
                        }
                    }
                }
            }

            div { class: "mobile-panel-footer",
                a {
                    class: "mobile-phone",
                    href: "{props.phone_href}",
                    onclick: move |_| on_close.call(()),
                    PhoneIcon { class: "icon" }
                    span { "{props.phone}" }
                }
                Link {
                    to: props.donate_path.clone(),
                    class: donate_class,
                    onclick: move |_| on_close.call(()),
                    "Donate Now"
                }
            }
        }
    }
}
