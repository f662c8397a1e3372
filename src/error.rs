//! Error types for expanse construction and mutation.
//!
//! The source of truth for every invariant lives here: degenerate intervals
//! and margins are rejected eagerly instead of leaking `NaN` into downstream
//! positions, and category lookups that used to fail with a numeric sentinel
//! now fail through `Option` (see the `_opt` methods) or one of these
//! variants.

use thiserror::Error;

use crate::expanse::ExpanseKind;

/// Errors produced when constructing or mutating an expanse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpanseError {
    /// Domain bounds coincide, which would make normalization divide by zero.
    #[error("degenerate interval: bounds {lo} and {hi} must differ")]
    DegenerateInterval { lo: f64, hi: f64 },

    /// The `zero`/`one` margin pair coincides.
    #[error("degenerate margins: zero {zero} and one {one} must differ")]
    DegenerateMargins { zero: f64, one: f64 },

    /// A categorical expanse was given no labels.
    #[error("categorical expanse requires at least one label")]
    EmptyLabels,

    /// A categorical expanse was given the same label twice; index-based
    /// lookup would only ever find the first occurrence.
    #[error("duplicate label {0:?}")]
    DuplicateLabel(String),

    /// `reorder` was given an index set that is not a permutation of
    /// `0..len`.
    #[error("invalid permutation of {len} labels")]
    InvalidPermutation { len: usize },

    /// An operation was dispatched to an expanse kind that does not
    /// support it.
    #[error("operation `{op}` is not supported by {kind} expanses")]
    KindMismatch { op: &'static str, kind: ExpanseKind },

    /// Zoom factors must be strictly positive.
    #[error("zoom factor must be positive, got {0}")]
    NonPositiveZoom(f64),
}
