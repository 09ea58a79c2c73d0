//! Home page sections, also reused by the single-topic pages.

use dioxus::prelude::*;
use msi_core::content::{
    ABOUT_HIGHLIGHTS, ABOUT_TEXT, GALLERY, IMPACT_STATS, SERVICES, TESTIMONIALS,
};
use msi_core::reveal::stagger_delay_ms;
use msi_ui::{button_class, Button, ButtonSize, ButtonVariant, FadeIn, StatCounter};

use crate::context::use_site_config;

/// Full-height hero over the header image.
#[component]
pub fn Hero() -> Element {
    let site = use_site_config();
    let config = site.read();
    let learn_more_class = button_class(ButtonVariant::Primary, ButtonSize::Large, None);

    rsx! {
        section { class: "hero",
            div { class: "hero-image",
                img { src: "/images/msi-hero.jpg", alt: "Students learning" }
                div { class: "hero-overlay" }
            }
            div { class: "container hero-content",
                h1 { class: "hero-title rise", "Empowering Through Education" }
                p { class: "hero-subtitle rise", style: "animation-delay: 200ms;", "{config.tagline}" }
                div { class: "rise", style: "animation-delay: 400ms;",
                    a { class: "{learn_more_class}", href: "#about", "Learn More" }
                }
            }
        }
    }
}

/// Banner used at the top of the single-topic pages.
#[component]
pub fn PageBanner(title: String, subtitle: String) -> Element {
    rsx! {
        section { class: "page-banner",
            div { class: "container",
                h1 { class: "rise", "{title}" }
                p { class: "rise", style: "animation-delay: 150ms;", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn AboutSection() -> Element {
    let site = use_site_config();
    let organization = site.read().organization.clone();

    rsx! {
        section { class: "section section-white",
            FadeIn { id: "about", class: "container about-grid",
                div { class: "about-image",
                    img { src: "/images/Outdoor.jpg", alt: "Students learning" }
                }
                div { class: "about-text",
                    h2 { class: "section-title", "About {organization}" }
                    p { "{ABOUT_TEXT}" }
                    ul { class: "about-list",
                        for highlight in ABOUT_HIGHLIGHTS.iter() {
                            li { key: "{highlight}", "{highlight}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ServicesSection() -> Element {
    rsx! {
        section { class: "section section-grey",
            div { class: "container",
                h2 { class: "section-title centered", "Our Services" }
                div { class: "card-grid three",
                    for (index, service) in SERVICES.iter().enumerate() {
                        FadeIn {
                            key: "{service.title}",
                            delay_ms: stagger_delay_ms(index),
                            class: "card",
                            div { class: "card-icon", "{service.icon}" }
                            h3 { class: "card-title", "{service.title}" }
                            p { "{service.description}" }
                        }
                    }
                }
            }
        }
    }
}

/// Red band with counting impact figures.
#[component]
pub fn ImpactSection() -> Element {
    rsx! {
        section { class: "section section-red",
            div { class: "container centered",
                h2 { class: "section-title", "Our Impact" }
                div { class: "stats-row",
                    for (index, stat) in IMPACT_STATS.iter().enumerate() {
                        StatCounter {
                            key: "{stat.label}",
                            stat: *stat,
                            delay_ms: stagger_delay_ms(index),
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TestimonialsSection() -> Element {
    rsx! {
        section { class: "section section-white",
            div { class: "container",
                h2 { class: "section-title centered", "What People Say" }
                div { class: "card-grid three",
                    for (index, testimonial) in TESTIMONIALS.iter().enumerate() {
                        FadeIn {
                            key: "{testimonial.author}",
                            delay_ms: stagger_delay_ms(index),
                            class: "card testimonial",
                            blockquote { "“{testimonial.quote}”" }
                            p { class: "testimonial-author", "{testimonial.author}" }
                            p { class: "testimonial-role", "{testimonial.role}" }
                        }
                    }
                }
            }
        }
    }
}

/// Photo grid; clicking a photo opens it full size.
#[component]
pub fn GallerySection() -> Element {
    let mut selected: Signal<Option<usize>> = use_signal(|| None);

    rsx! {
        section { class: "section section-grey",
            div { class: "container",
                h2 { class: "section-title centered", "Gallery" }
                div { class: "gallery-grid",
                    for (index, image) in GALLERY.iter().enumerate() {
                        FadeIn {
                            key: "{image.src}",
                            delay_ms: stagger_delay_ms(index % 3),
                            class: "gallery-item",
                            button {
                                r#type: "button",
                                class: "gallery-thumb",
                                "aria-label": "View {image.alt}",
                                onclick: move |_| selected.set(Some(index)),
                                img { src: "{image.src}", alt: "{image.alt}" }
                            }
                        }
                    }
                }
            }

            if let Some(image) = selected().and_then(|i| GALLERY.get(i)) {
                div {
                    class: "lightbox",
                    onclick: move |_| selected.set(None),
                    img { src: "{image.src}", alt: "{image.alt}" }
                    p { class: "lightbox-caption", "{image.alt}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "lightbox-close",
                        onclick: move |_| selected.set(None),
                        "Close"
                    }
                }
            }
        }
    }
}

#[component]
pub fn CallToAction() -> Element {
    let site = use_site_config();
    let donate_path = site.read().donate_path.clone();
    let involved_class = button_class(ButtonVariant::Primary, ButtonSize::Large, Some("pop"));
    let donate_class = button_class(ButtonVariant::Outline, ButtonSize::Large, None);

    rsx! {
        section { class: "section section-grey centered",
            div { class: "container",
                h2 { class: "section-title", "Ready to Make a Difference?" }
                p { class: "lead",
                    "Join us in our mission to empower the youth through Maths and Science education."
                }
                div { class: "cta-actions",
                    Link { to: "/contact", class: involved_class, "Get Involved" }
                    Link { to: donate_path, class: donate_class, "Donate" }
                }
            }
        }
    }
}
