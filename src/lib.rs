//! # Named Entity
//!
//! A minimal named value holder: every [`NamedEntity`] is born with the name
//! [`DEFAULT_NAME`] and exposes it through a single read accessor.
//!
//! ## Features
//!
//! - `serde` - `Serialize` support for [`NamedEntity`]
//!
//! ## Example
//!
//! ```rust
//! use named_entity::NamedEntity;
//!
//! let human = NamedEntity::new();
//! assert_eq!(human.name(), "Tom");
//!
//! // Typed verification instead of a panicking assertion
//! assert!(human.verify_name("Tom").is_ok());
//! assert!(human.verify_name("Jerry").is_err());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod entity;
pub mod error;

// Re-export commonly used types
pub use entity::named_entity::{NamedEntity, DEFAULT_NAME};
pub use error::{EntityError, Result};
