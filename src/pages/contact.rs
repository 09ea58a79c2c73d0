//! Contact page - phone and email, no form.

use dioxus::prelude::*;
use msi_ui::FadeIn;

use super::sections::PageBanner;
use crate::components::{MailIcon, PhoneIcon};
use crate::context::use_site_config;

#[component]
pub fn Contact() -> Element {
    let site = use_site_config();
    let config = site.read();

    rsx! {
        main { class: "page",
            PageBanner {
                title: "Contact Us",
                subtitle: "Questions, partnerships or volunteering - we would love to hear from you.",
            }
            section { class: "section section-white",
                FadeIn { id: "contact", class: "container card-grid two",
                    a { class: "card contact-card", href: "{config.phone_href()}",
                        PhoneIcon { class: "icon-xl" }
                        h3 { class: "card-title", "Call" }
                        p { "{config.phone}" }
                    }
                    a { class: "card contact-card", href: "{config.email_href()}",
                        MailIcon { class: "icon-xl" }
                        h3 { class: "card-title", "Email" }
                        p { "{config.email}" }
                    }
                }
            }
        }
    }
}
