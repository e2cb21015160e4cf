// -----------------------------------------------------------------------------
// src/entity/named_entity.rs
// -----------------------------------------------------------------------------

#[cfg(feature = "serde")]
use serde::Serialize;
use std::fmt;

/// Name given to every default-constructed [`NamedEntity`].
pub const DEFAULT_NAME: &str = "Tom";

/// A named thing with a retrievable identifier.
///
/// The name is fixed at construction and there is no mutator, so every call
/// to [`NamedEntity::name`] on the same instance returns the same value.
///
/// ### Serialization
/// With the `serde` feature the entity serializes as `{"name":"Tom"}`. It is
/// intentionally not `Deserialize`: default construction is the only way to
/// obtain one.
///
/// ### Examples
/// ```rust
/// use named_entity::{NamedEntity, DEFAULT_NAME};
///
/// let entity = NamedEntity::new();
/// assert_eq!(entity.name(), DEFAULT_NAME);
/// assert_eq!(entity.to_string(), "Tom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NamedEntity {
    name: String,
}

impl NamedEntity {
    /// Creates an entity named [`DEFAULT_NAME`].
    #[inline]
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
        }
    }

    /// Returns the entity's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for NamedEntity {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NamedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for NamedEntity {
    fn as_ref(&self) -> &str {
        self.name()
    }
}
