use dioxus::prelude::*;

use super::sections::{CallToAction, PageBanner, ServicesSection, TestimonialsSection};

#[component]
pub fn Services() -> Element {
    rsx! {
        main { class: "page",
            PageBanner {
                title: "Our Services",
                subtitle: "Tutoring, workshops and camps for learners across the Eastern Cape.",
            }
            ServicesSection {}
            TestimonialsSection {}
            CallToAction {}
        }
    }
}
