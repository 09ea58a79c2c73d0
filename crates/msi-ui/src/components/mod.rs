//! Reusable UI components.
//!
//! Class names match the site stylesheet in the app crate.

mod button;
mod fade_in;
mod stat_counter;

pub use button::*;
pub use fade_in::*;
pub use stat_counter::*;
