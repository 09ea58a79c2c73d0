use dioxus::prelude::*;

use super::sections::{GallerySection, PageBanner};

#[component]
pub fn Gallery() -> Element {
    rsx! {
        main { class: "page",
            PageBanner {
                title: "Gallery",
                subtitle: "Moments from our workshops, camps and outreach days.",
            }
            GallerySection {}
        }
    }
}
