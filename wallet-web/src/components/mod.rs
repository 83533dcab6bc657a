//! UI Components

pub mod footer;
pub mod navbar;

pub use footer::Footer;
pub use navbar::Navbar;
