//! # eincontract
//!
//! Label-driven tensor contraction (einsum) over caller-owned flat buffers.
//!
//! ## Features
//!
//! - **Non-owning views**: inputs and output borrow caller buffers; the
//!   engine allocates nothing and keeps no state between calls
//! - **Arbitrary arity**: one generalized sum-of-products contraction over
//!   any number of input tensors, driven by shared axis labels
//! - **Fail-fast validation**: the label algebra is checked before any
//!   element is read; a bad signature never touches the output buffer
//! - **Schema memoization**: [`Contractor`] caches plans (and invalid
//!   verdicts) per tensor signature, so repeated shapes validate once
//! - **Deterministic**: fixed row-major iteration and an ascending-label
//!   summation order make repeated calls bit-identical
//!
//! ## Quick Start
//!
//! ```
//! use eincontract::{contract_into, TensorView};
//!
//! // C[i,k] = Σ_j A[i,j] · B[j,k]   (labels: i = 0, j = 1, k = 2)
//! let a = [1.0f64, 2.0, 3.0, 4.0];
//! let b = [5.0f64, 6.0, 7.0, 8.0];
//! let views = [
//!     TensorView::new(&a, &[0, 1], &[2, 2]),
//!     TensorView::new(&b, &[1, 2], &[2, 2]),
//! ];
//!
//! let mut c = [0.0f64; 4];
//! contract_into(&[0, 2], &mut c, &views)?;
//! assert_eq!(c, [19.0, 22.0, 43.0, 50.0]);
//! # Ok::<(), eincontract::EinsumError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         User API                            │
//! │   contract_into(output, out, views)                         │
//! │   Contractor::contract_into (memoized planning)             │
//! │   einsum_into("ij,jk->ik", operands, out)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Label Algebra + Planner                        │
//! │   classify labels (free / contracted), resolve extents,     │
//! │   derive ContractionSchema (shape, strides, sum order)      │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Executor                              │
//! │   outer odometer: output index space (row-major)            │
//! │   inner odometer: contracted labels (ascending id)          │
//! │   out[off] = Σ Π inputs[offset(assignment)]                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod einsum;
pub mod element;
pub mod error;
pub mod tensor;

// Re-exports
pub use einsum::{
    contract, contract_into, einsum_into, ContractionSchema, Contractor, Equation, SchemaCache,
};
pub use element::{Complex32, Complex64, ElemType, Element};
pub use error::{EinsumError, Result};
pub use tensor::{compute_row_major_strides, Label, TensorMeta, TensorView, TensorViewMut};
