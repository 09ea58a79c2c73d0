//! Page components for the MSI site.

mod about;
mod contact;
mod donate;
mod gallery;
mod home;
mod sections;
mod services;

pub use about::About;
pub use contact::Contact;
pub use donate::Donate;
pub use gallery::Gallery;
pub use home::Home;
pub use services::Services;
