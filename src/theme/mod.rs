//! Site theme: the global stylesheet.
//!
//! The palette lives as CSS custom properties at the top of `styles.rs`.

mod styles;

pub use styles::GLOBAL_STYLES;
