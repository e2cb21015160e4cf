//! Named entity and its verification

/// The entity type and its default name.
pub mod named_entity;
/// Checks an entity's name against an expected value.
pub mod verify;
