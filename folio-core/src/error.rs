//! Error types for section set construction

use thiserror::Error;

/// Errors raised while building a [`crate::SectionSet`].
///
/// Routing itself never errors: activating an unknown identifier is a
/// silent no-op by design.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("Section set contains no sections")]
    EmptySet,

    #[error("Duplicate section id '{0}'")]
    DuplicateId(String),

    #[error("Default section '{0}' is not in the set")]
    UnknownDefault(String),
}
