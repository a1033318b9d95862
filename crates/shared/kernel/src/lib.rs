//! Kernel utilities shared across the feature crates.
//! Keep this crate lightweight: service lookup, id coercion, and config loading.
//!
//! ## Service lookup
//! ```rust
//! use japi_kernel::locator::{ServiceLocatorExt, SimpleServiceLocator};
//!
//! #[derive(Debug)]
//! struct Clock(u64);
//!
//! let locator = SimpleServiceLocator::new().with(Clock(42));
//! assert_eq!(locator.get::<Clock>().map(|c| c.0), Some(42));
//! ```
//!
//! ## Id coercion
//! ```rust
//! use japi_kernel::domain::resource::IdKind;
//! use japi_kernel::parser::TypeParser;
//!
//! let id = TypeParser::new().parse("17", IdKind::Integer).unwrap();
//! assert_eq!(id, serde_json::json!(17));
//! ```
pub mod config;
pub mod location;
pub mod locator;
pub mod parser;

pub use japi_domain as domain;
