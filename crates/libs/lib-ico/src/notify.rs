//! User-visible notices.

/// Shown after a mint confirms.
pub const MINT_SUCCESS_MESSAGE: &str = "You have successfully minted Crypto Dev Tokens";

/// Blocking notice shown to the user (a browser `alert` on the page).
pub trait Notifier {
    fn alert(&self, message: &str);
}
