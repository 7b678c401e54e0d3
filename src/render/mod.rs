//! Retained render state: frames flattened into keyed properties and diffed between commits.

/// Commit-to-commit property diffs.
pub mod retained;
/// Flattening of [`PageFrame`](crate::PageFrame) into keyed properties.
pub mod state;
