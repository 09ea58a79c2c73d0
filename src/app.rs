use dioxus::prelude::*;
use msi_core::SiteConfig;

use crate::components::{Footer, NavHeader};
use crate::context::get_site_config;
use crate::pages::{About, Contact, Donate, Gallery, Home, Services};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// Every page shares [`SiteLayout`]: the navigation header on top, the footer
/// below.
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/services")]
        Services {},
        #[route("/gallery")]
        Gallery {},
        #[route("/contact")]
        Contact {},
        #[route("/donate")]
        Donate {},
}

/// Root application component.
///
/// Provides global styles, site config context, and routing.
#[component]
pub fn App() -> Element {
    let site: Signal<SiteConfig> = use_signal(get_site_config);
    use_context_provider(|| site);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Header, routed page, footer.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();

    rsx! {
        div { class: "site",
            NavHeader { current_route: route.to_string() }
            Outlet::<Route> {}
            Footer {}
        }
    }
}
