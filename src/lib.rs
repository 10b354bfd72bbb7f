//! Resolve color names and hex codes against a small fixed palette.
//!
//! ```
//! let r = colorname::resolve("  RED ");
//! assert_eq!(r.hex, "#ff0000");
//! assert_eq!(r.name, "red");
//!
//! assert_eq!(colorname::normalize("#0F0"), "#00ff00");
//! assert_eq!(colorname::resolve("#123456").name, colorname::UNKNOWN);
//! ```

pub mod hex;
pub mod log;
pub mod palette;
pub mod resolve;
pub mod types;

pub use hex::normalize;
pub use palette::PALETTE;
pub use resolve::{resolve, resolve_query};
pub use types::{ColorQuery, Resolution, UNKNOWN};
