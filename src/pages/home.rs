//! Home page - every section in order.

use dioxus::prelude::*;

use super::sections::{
    AboutSection, CallToAction, GallerySection, Hero, ImpactSection, ServicesSection,
    TestimonialsSection,
};

#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "page home",
            Hero {}
            AboutSection {}
            ServicesSection {}
            ImpactSection {}
            TestimonialsSection {}
            GallerySection {}
            CallToAction {}
        }
    }
}
