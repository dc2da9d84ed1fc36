//! Layout error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// The wrap provider's lines do not list every visible child exactly once, in order.
    #[error("wrap result does not preserve child order: expected {expected:?}, found {found:?}")]
    WrapInvariant {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("wrap result references unknown child index {0}")]
    UnknownChild(usize),
}
