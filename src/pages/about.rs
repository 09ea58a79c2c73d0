use dioxus::prelude::*;

use super::sections::{AboutSection, CallToAction, ImpactSection, PageBanner};

#[component]
pub fn About() -> Element {
    rsx! {
        main { class: "page",
            PageBanner {
                title: "About Us",
                subtitle: "Bridging the classroom and real life through Maths and Science.",
            }
            AboutSection {}
            ImpactSection {}
            CallToAction {}
        }
    }
}
