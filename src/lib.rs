//! gridsq: Maidenhead Grid Square Encoder
//!
//! A library and CLI tool for converting geographic coordinates into the
//! six character Maidenhead grid locators used in amateur radio.
//!
//! ## Features
//!
//! - Pure `encode` function: (longitude, latitude) to field/square/subsquare
//! - Permissive by default; a checked variant rejects out-of-range input
//! - Locator parsing and validation via `FromStr`
//! - Text and JSON output formats for the CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use gridsq::{encode, Coordinates};
//!
//! // Munich
//! let coords = Coordinates::new(48.147, 11.608);
//! let grid = encode(coords);
//! assert_eq!(grid.as_str(), "JN58td");
//!
//! // Pairs are ordered longitude then latitude
//! assert_eq!(grid.field(), "JN");
//! assert_eq!(grid.square(), "58");
//! assert_eq!(grid.subsquare(), "td");
//! ```

pub mod cli;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod locator;

// Re-export commonly used types
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use locator::{encode, encode_checked, GridLocator};
