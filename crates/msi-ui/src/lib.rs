//! Maths and Science Infinity UI Components
//!
//! Dioxus components shared by the MSI site pages.
//!
//! ## Design
//!
//! The site uses a red-on-white palette:
//! - **Red (#dc2626)**: primary actions, active nav links, the impact band
//! - **Grey (#1f2937 / #4b5563)**: body text once the header turns opaque
//! - **White**: header text over the hero image, card backgrounds
//!
//! Sections fade in as they scroll into view ([`FadeIn`]), and the impact
//! figures count up the first time they are seen ([`StatCounter`]).

pub mod components;

pub use components::*;
