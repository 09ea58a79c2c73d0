use dioxus::prelude::*;
use msi_core::content::IMPACT_STATS;
use msi_ui::{button_class, ButtonSize, ButtonVariant, FadeIn};

use super::sections::{ImpactSection, PageBanner};
use crate::context::use_site_config;

#[component]
pub fn Donate() -> Element {
    let site = use_site_config();
    let config = site.read();
    let reached = IMPACT_STATS
        .first()
        .map(|stat| stat.display())
        .unwrap_or_default();
    let email_class = button_class(ButtonVariant::Primary, ButtonSize::Large, None);
    let phone_class = button_class(ButtonVariant::Outline, ButtonSize::Large, Some("dark"));

    rsx! {
        main { class: "page",
            PageBanner {
                title: "Donate",
                subtitle: "Every contribution puts Maths and Science within reach of another learner.",
            }
            section { class: "section section-white",
                FadeIn { class: "container narrow centered",
                    p { class: "lead",
                        "{config.organization} has reached {reached} students. "
                        "To support the next workshop, camp or tutoring group, get in touch and we will share our banking details."
                    }
                    div { class: "cta-actions",
                        a { class: "{email_class}", href: "{config.email_href()}", "Email Us" }
                        a { class: "{phone_class}", href: "{config.phone_href()}", "{config.phone}" }
                    }
                }
            }
            ImpactSection {}
        }
    }
}
