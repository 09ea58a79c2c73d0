//! Navigation Header Component
//!
//! Desktop: fixed header with logo, nav links, phone number and donate button.
//! Transparent over the hero, opaque once the page scrolls.
//! Mobile: menu button opening the slide-out [`MobileNav`] panel.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use msi_core::nav::{is_scrolled_offset, MenuIcon};
use msi_core::{NavController, Subscription};
use msi_ui::{button_class, ButtonSize, ButtonVariant, IconButton};

use crate::app::Route;
use crate::components::dom::{subscribe_window_scroll, DomScrollHost};
use crate::components::icons::{BarsIcon, CloseIcon, PhoneIcon};
use crate::components::mobile_nav::MobileNav;
use crate::context::use_site_config;

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Path of the page being shown, from the router
    pub current_route: String,
}

/// Navigation Header component
///
/// Owns the [`NavController`] for as long as the header is mounted. The
/// window scroll listener and any scroll lock are released on unmount.
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let site = use_site_config();

    let initial_route = props.current_route.clone();
    let mut nav = use_signal(move || NavController::new(DomScrollHost, initial_route));
    let scroll_subscription: Rc<RefCell<Option<Subscription>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    // Route changes
    use_effect(use_reactive((&props.current_route,), move |(route,)| {
        nav.write().set_route(route);
    }));

    // Window scroll listener, registered once on mount
    let mount_slot = scroll_subscription.clone();
    use_effect(move || {
        if mount_slot.borrow().is_some() {
            return;
        }
        let (mut offsets, subscription) = subscribe_window_scroll();
        *mount_slot.borrow_mut() = Some(subscription);

        spawn(async move {
            while let Ok(offset) = offsets.recv::<f64>().await {
                // Only wake the header when the scrolled flag flips
                if is_scrolled_offset(offset) != nav.peek().is_scrolled() {
                    nav.write().on_scroll(offset);
                }
            }
        });
    });

    let drop_slot = scroll_subscription.clone();
    use_drop(move || {
        if let Some(subscription) = drop_slot.borrow_mut().take() {
            subscription.release();
        }
        if let Ok(mut nav) = nav.try_write() {
            nav.teardown();
        }
    });

    let config = site.read();
    let (presentation, links, menu_open) = {
        let controller = nav.read();
        (
            controller.presentation(),
            controller.links(&config.nav_items),
            controller.is_menu_open(),
        )
    };

    let donate_class = button_class(ButtonVariant::Primary, ButtonSize::Default, None);

    rsx! {
        header { class: "{presentation.header_class()}",
            div { class: "container header-inner",
                // Left: logo
                Link {
                    to: Route::Home {},
                    class: "logo",
                    span { class: "logo-mark", "{config.short_name}" }
                }

                // Center: navigation links
                nav { class: "desktop-nav",
                    for link in links.iter() {
                        if link.item.is_anchor() {
                            a {
                                key: "{link.item.path}",
                                href: "{link.item.path}",
                                class: presentation.link_class(false),
                                "{link.item.label}"
                            }
                        } else {
                            Link {
                                key: "{link.item.path}",
                                to: link.item.path.clone(),
                                class: presentation.link_class(link.active),
                                "{link.item.label}"
                                if link.active {
                                    span { class: "active-indicator" }
                                }
                            }
                        }
                    }
                }

                // Right: phone and donate
                div { class: "header-actions",
                    a {
                        class: "phone-link {presentation.text_scheme.class()}",
                        href: "{config.phone_href()}",
                        PhoneIcon { class: "icon inline" }
                        "{config.phone}"
                    }
                    Link {
                        to: config.donate_path.clone(),
                        class: donate_class,
                        "Donate Now"
                    }
                }

                // Mobile menu button
                IconButton {
                    class: presentation.menu_icon.class().to_string(),
                    aria_label: presentation.menu_icon.aria_label().to_string(),
                    expanded: menu_open,
                    onclick: move |_| nav.write().toggle_menu(),
                    if presentation.menu_icon == MenuIcon::Close {
                        CloseIcon {}
                    } else {
                        BarsIcon {}
                    }
                }
            }
        }

        MobileNav {
            links: links.clone(),
            panel: presentation.panel,
            backdrop_visible: presentation.backdrop_visible,
            phone: config.phone.clone(),
            phone_href: config.phone_href(),
            donate_path: config.donate_path.clone(),
            on_close: move |_| nav.write().close_menu(),
        }
    }
}
