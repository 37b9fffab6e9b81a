//! Key-label parsing for hosts and scripted input.
//!
//! Scripts are validated with Stillwater's `Validation` so that every bad
//! key is reported in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use calcstate::input::parse_keys;
//! use calcstate::machine::Calculator;
//! use stillwater::validation::Validation;
//!
//! let Validation::Success(events) = parse_keys("6 + 3 =") else {
//!     panic!("script should parse");
//! };
//!
//! let mut calc = Calculator::new();
//! for event in events {
//!     calc.send(event);
//! }
//! assert_eq!(calc.display(), "9");
//! ```

pub mod error;
pub mod keys;

pub use error::KeyError;
pub use keys::{parse_key, parse_keys};
