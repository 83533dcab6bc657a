//! # Shared Utility Functions
//!
//! Common utility functions used by the dashboard core and the web page.
//!
//! ## Address Formatting
//!
//! Functions for formatting hex wallet addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `0x` plus four hex digits on each side
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x5FbD...0aa3");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// The prefix length counts the `0x` marker. If the address is shorter than
/// `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
/// assert_eq!(format_address(addr, 6, 4), "0x5FbD...0aa3");
/// assert_eq!(format_address(addr, 10, 8), "0x5FbDB231...64180aa3");
/// assert_eq!(format_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a hex address as `0x` plus the first and last four digits.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
/// assert_eq!(truncate_address(addr), "0x5FbD...0aa3");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
