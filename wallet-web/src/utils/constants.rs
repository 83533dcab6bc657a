//! Page copy and asset paths

pub const BRAND: &str = "Crypto Devs";
pub const PAGE_TITLE: &str = "Welcome to Crypto Devs ICO!";
pub const PAGE_SUBTITLE: &str = "You can claim or mint Crypto Dev tokens here";
pub const FOOTER_TEXT: &str = "Made with \u{2764} by Crypto Devs";

pub const HERO_IMAGE: &str = "./cryptodevs/0.svg";
pub const AMOUNT_PLACEHOLDER: &str = "Amount of Tokens";
