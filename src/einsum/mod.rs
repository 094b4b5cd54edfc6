//! Contraction engine: label validation, planning, and execution.
//!
//! The one-shot entry points [`contract_into`] and [`contract`] plan every
//! call from scratch; [`Contractor`] memoizes plans per tensor signature
//! so repeated calls with the same shapes pay the validation and planning
//! cost only once.

mod cache;
mod executor;
mod notation;
mod schema;

pub use cache::SchemaCache;
pub use notation::{einsum_into, Equation};
pub use schema::ContractionSchema;

use crate::element::Element;
use crate::error::Result;
use crate::tensor::{Label, TensorView};

/// Contract the input views and write the result into `out`.
///
/// `output` names the output tensor's axes in order; its order determines
/// the output's row-major layout. Validation and planning run before any
/// element is read, and a validation error leaves `out` untouched.
///
/// The caller guarantees `out` holds at least the product of the output
/// shape's extents (at least 1 for a scalar output) and does not alias any
/// input buffer.
///
/// # Example
///
/// ```
/// use eincontract::{contract_into, TensorView};
///
/// // C[i,k] = Σ_j A[i,j] · B[j,k]
/// let a = [1.0f64, 2.0, 3.0, 4.0];
/// let b = [5.0f64, 6.0, 7.0, 8.0];
/// let views = [
///     TensorView::new(&a, &[0, 1], &[2, 2]),
///     TensorView::new(&b, &[1, 2], &[2, 2]),
/// ];
///
/// let mut c = [0.0f64; 4];
/// contract_into(&[0, 2], &mut c, &views)?;
/// assert_eq!(c, [19.0, 22.0, 43.0, 50.0]);
/// # Ok::<(), eincontract::EinsumError>(())
/// ```
///
/// # Panics
///
/// Panics if `inputs` is empty or `out` is too small for the derived
/// output shape.
pub fn contract_into<T: Element>(
    output: &[Label],
    out: &mut [T],
    inputs: &[TensorView<'_, T>],
) -> Result<()> {
    assert!(!inputs.is_empty(), "at least one input tensor is required");
    executor::plan_and_execute(output, out, inputs)
}

/// Contract the input views into a freshly allocated buffer.
///
/// Convenience wrapper over [`contract_into`]; the engine still retains
/// nothing, the returned buffer is the caller's.
pub fn contract<T: Element>(output: &[Label], inputs: &[TensorView<'_, T>]) -> Result<Vec<T>> {
    assert!(!inputs.is_empty(), "at least one input tensor is required");
    let metas: Vec<_> = inputs.iter().map(|view| view.meta()).collect();
    let schema = ContractionSchema::plan(&metas, output)?;
    let mut out = vec![T::zero(); schema.output_size()];
    executor::execute(&schema, inputs, &mut out);
    Ok(out)
}

/// A contraction engine with a schema cache.
///
/// Validation and planning are pure functions of the tensors' label/shape
/// metadata, so a `Contractor` memoizes them per signature: the first call
/// with a given combination of labels, extents, element type, and output
/// order plans it, every later call reuses the stored schema — or the
/// stored error, for signatures that failed validation.
///
/// # Example
///
/// ```
/// use eincontract::{Contractor, TensorView};
///
/// let engine = Contractor::new();
/// let a = [1.0f32, 2.0, 3.0, 4.0];
/// let v = [1.0f32, 1.0];
/// let mut out = [0.0f32; 2];
///
/// for _ in 0..3 {
///     let views = [
///         TensorView::new(&a, &[0, 1], &[2, 2]),
///         TensorView::new(&v, &[1], &[2]),
///     ];
///     engine.contract_into(&[0], &mut out, &views)?;
/// }
/// assert_eq!(out, [3.0, 7.0]);
/// assert_eq!(engine.cached_schemas(), 1);
/// # Ok::<(), eincontract::EinsumError>(())
/// ```
#[derive(Debug, Default)]
pub struct Contractor {
    cache: SchemaCache,
}

impl Contractor {
    /// Create an engine with an empty schema cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Contract with memoized planning; same contract as [`contract_into`].
    pub fn contract_into<T: Element>(
        &self,
        output: &[Label],
        out: &mut [T],
        inputs: &[TensorView<'_, T>],
    ) -> Result<()> {
        assert!(!inputs.is_empty(), "at least one input tensor is required");
        let metas: Vec<_> = inputs.iter().map(|view| view.meta()).collect();
        match self.cache.get_or_plan(&metas, output).as_ref() {
            Ok(schema) => {
                executor::execute(schema, inputs, out);
                Ok(())
            }
            Err(err) => Err(err.clone()),
        }
    }

    /// Number of signatures cached so far (valid and invalid).
    pub fn cached_schemas(&self) -> usize {
        self.cache.len()
    }

    /// Drop all cached schemas and verdicts.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
