//! Error types for contraction planning and the equation surface.

use thiserror::Error;

use crate::tensor::Label;

/// Errors that can occur when validating or planning a contraction.
///
/// All schema errors are fully determined by label/shape metadata and are
/// reported before any element is read; a failed validation leaves the
/// output buffer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EinsumError {
    /// A label appears more than once within a single tensor's axis list.
    /// Implicit traces/diagonals are unsupported.
    #[error("repeated label {label} within tensor {tensor}: traces are not supported")]
    RepeatedAxis { tensor: usize, label: Label },

    /// A label's global occurrence count across output and all inputs is
    /// neither 0 nor 2.
    #[error("label {label} occurs {count} times across inputs and output, expected exactly 2")]
    LabelArity { label: Label, count: usize },

    /// A count-2 label is not split between exactly one input plus the
    /// output (free) or exactly two inputs (contracted).
    #[error("label {label} must be carried by exactly {expected} input tensor(s), found {found}")]
    LabelPlacement {
        label: Label,
        expected: usize,
        found: usize,
    },

    /// Two tensors carrying the same label declare different extents for it.
    #[error("extent mismatch for label {label}: {expected} vs {found}")]
    ExtentMismatch {
        label: Label,
        expected: usize,
        found: usize,
    },

    /// Input tensors disagree on element type.
    #[error("element type mismatch: {expected} vs {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A tensor declares a zero-length axis. Zero extents are rejected
    /// outright rather than treated as "extent unknown here".
    #[error("zero-length axis (label {label}) in tensor {tensor}")]
    ZeroExtent { tensor: usize, label: Label },

    /// An einsum equation string could not be parsed.
    #[error("invalid einsum equation: {0}")]
    BadEquation(String),

    /// The number of operands does not match the equation's input terms.
    #[error("equation expects {expected} operand(s), got {found}")]
    OperandCount { expected: usize, found: usize },

    /// An operand's rank does not match its equation term.
    #[error("operand {operand} has {dims} dimension(s) but its equation term names {labels} label(s)")]
    OperandRank {
        operand: usize,
        labels: usize,
        dims: usize,
    },
}

/// Convenience alias for `Result<T, EinsumError>`.
pub type Result<T> = std::result::Result<T, EinsumError>;
