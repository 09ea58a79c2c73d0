use dioxus::prelude::*;

use crate::components::icons::{MailIcon, PhoneIcon};
use crate::context::use_site_config;

/// Site footer: contact details and a second copy of the nav links.
#[component]
pub fn Footer() -> Element {
    let site = use_site_config();
    let config = site.read();

    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-grid",
                div { class: "footer-about",
                    h3 { class: "footer-title", "{config.organization}" }
                    p { "{config.tagline}" }
                }

                nav { class: "footer-links",
                    h4 { "Quick Links" }
                    for item in config.nav_items.iter() {
                        if item.is_anchor() {
                            a { key: "{item.path}", href: "{item.path}", "{item.label}" }
                        } else {
                            Link { key: "{item.path}", to: item.path.clone(), "{item.label}" }
                        }
                    }
                }

                div { class: "footer-contact",
                    h4 { "Contact" }
                    a { href: "{config.phone_href()}",
                        PhoneIcon { class: "icon inline" }
                        "{config.phone}"
                    }
                    a { href: "{config.email_href()}",
                        MailIcon { class: "icon inline" }
                        "{config.email}"
                    }
                }
            }
            p { class: "footer-copy", "© {config.organization}. All rights reserved." }
        }
    }
}
