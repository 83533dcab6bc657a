//! # Shared Display Helpers
//!
//! Formatting helpers used by every front end of the ICO dashboard.
//!
//! ## Structure
//!
//! - **[`utils`]**: Address formatting
//!   - **[`utils::format_address`]**: Format hex addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//! - **[`units`]**: Fixed-point conversion between smallest units and decimal strings
//!   - **[`units::format_units`]** / **[`units::format_ether`]**
//!   - **[`units::parse_units`]** / **[`units::parse_ether`]**
//!
//! All conversions are exact integer arithmetic on [`alloy_primitives::U256`];
//! nothing here goes through floating point.
//!
//! ## Usage
//!
//! ```rust
//! use alloy_primitives::U256;
//! use shared::{format_ether, truncate_address};
//!
//! let minted = U256::from(25u64) * U256::from(10u64).pow(U256::from(17u64));
//! assert_eq!(format_ether(minted), "2.5");
//! assert_eq!(
//!     truncate_address("0x5FbDB2315678afecb367f032d93F642f64180aa3"),
//!     "0x5FbD...0aa3"
//! );
//! ```

pub mod units;
pub mod utils;

pub use units::*;
pub use utils::*;
