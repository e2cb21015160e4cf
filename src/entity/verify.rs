//! Name verification for [`NamedEntity`].

use super::named_entity::NamedEntity;
use crate::error::{EntityError, Result};

impl NamedEntity {
    /// Checks that the entity's name is exactly `expected`.
    ///
    /// Comparison is byte-wise: no trimming and no case folding.
    ///
    /// # Errors
    /// Returns [`EntityError::NameMismatch`] carrying both names when they
    /// differ.
    ///
    /// # Example
    /// ```rust
    /// use named_entity::{EntityError, NamedEntity};
    ///
    /// let entity = NamedEntity::new();
    /// assert!(entity.verify_name("Tom").is_ok());
    ///
    /// let err = entity.verify_name("Jerry").unwrap_err();
    /// assert!(matches!(err, EntityError::NameMismatch { .. }));
    /// ```
    pub fn verify_name(&self, expected: &str) -> Result<()> {
        if self.name() == expected {
            log::trace!("Name verified: {:?}", expected);
            return Ok(());
        }

        log::debug!(
            "Name mismatch (expected: {:?}, actual: {:?})",
            expected,
            self.name()
        );
        Err(EntityError::NameMismatch {
            expected: expected.to_string(),
            actual: self.name().to_string(),
        })
    }
}
