//! Site chrome: header, mobile menu, footer and their page adapters.

mod dom;
mod footer;
mod icons;
mod mobile_nav;
mod nav_header;

pub use footer::Footer;
pub use icons::{MailIcon, PhoneIcon};
pub use nav_header::NavHeader;
