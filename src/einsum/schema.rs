//! Label algebra validation and contraction planning.
//!
//! Both run purely on shape/label metadata ([`TensorMeta`]), never on
//! buffer contents: a given combination of descriptors and output labels
//! always yields the same verdict and the same schema.

use crate::element::ElemType;
use crate::error::{EinsumError, Result};
use crate::tensor::{compute_row_major_strides, Label, TensorMeta};

/// Per-tensor label and stride table, precomputed by the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AxisTable {
    pub(crate) labels: Vec<Label>,
    pub(crate) strides: Vec<usize>,
}

/// The derived, immutable plan for one combination of tensor shapes and
/// labels.
///
/// Holds everything the executor needs: the output shape and row-major
/// strides in declared label order, the contracted labels in ascending
/// label-id order (fixing the floating-point summation order), the
/// resolved extent per label, and a stride table per input tensor.
///
/// Schemas are produced by [`ContractionSchema::plan`] and never modified
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractionSchema {
    pub(crate) output_labels: Vec<Label>,
    pub(crate) output_shape: Vec<usize>,
    pub(crate) output_strides: Vec<usize>,
    pub(crate) contracted: Vec<Label>,
    /// Resolved extent per label id; 0 marks a label that occurs nowhere.
    pub(crate) extents: Vec<usize>,
    pub(crate) inputs: Vec<AxisTable>,
    pub(crate) elem: ElemType,
}

impl ContractionSchema {
    /// Validate the label algebra and derive the contraction plan.
    ///
    /// For every label id present anywhere, the validator enforces:
    ///
    /// 1. labels within one tensor are pairwise distinct (no implicit
    ///    trace) and every axis has a non-zero extent;
    /// 2. the label's occurrence count across the output and all inputs is
    ///    exactly 2 (a count of 0 means the label is simply unused);
    /// 3. a label in the output is carried by exactly one input (free); a
    ///    label absent from the output is carried by exactly two inputs
    ///    (contracted);
    /// 4. every input carrying the label agrees on its extent;
    /// 5. all inputs share one element type.
    ///
    /// # Panics
    ///
    /// Panics if `metas` is empty; a contraction needs at least one input.
    pub fn plan(metas: &[TensorMeta], output: &[Label]) -> Result<Self> {
        assert!(!metas.is_empty(), "at least one input tensor is required");

        // Per-tensor structural checks: no self-trace, no zero-length axes.
        for (tensor, meta) in metas.iter().enumerate() {
            let labels = meta.labels();
            for (axis, &label) in labels.iter().enumerate() {
                if labels[axis + 1..].contains(&label) {
                    return Err(EinsumError::RepeatedAxis { tensor, label });
                }
                if meta.extents()[axis] == 0 {
                    return Err(EinsumError::ZeroExtent { tensor, label });
                }
            }
        }

        let num_labels = label_arena_size(metas, output);

        // Occurrence counts, arena-indexed by label id. Carrier counts
        // equal input occurrence counts because self-traces are gone.
        let mut out_count = vec![0usize; num_labels];
        for &label in output {
            out_count[label] += 1;
        }
        let mut carriers = vec![0usize; num_labels];
        for meta in metas {
            for &label in meta.labels() {
                carriers[label] += 1;
            }
        }

        let mut extents = vec![0usize; num_labels];
        let mut contracted = Vec::new();

        for label in 0..num_labels {
            let count = out_count[label] + carriers[label];
            if count == 0 {
                continue;
            }
            if count != 2 {
                return Err(EinsumError::LabelArity { label, count });
            }

            // Free labels pair the output with one input; contracted
            // labels pair two inputs and are summed over.
            let expected = if out_count[label] > 0 { 1 } else { 2 };
            if carriers[label] != expected {
                return Err(EinsumError::LabelPlacement {
                    label,
                    expected,
                    found: carriers[label],
                });
            }
            if out_count[label] == 0 {
                contracted.push(label);
            }

            // Extent resolution: the first carrier supplies the extent,
            // every other carrier must agree. Zero extents were rejected
            // above, so each carrier's extent is concrete.
            for meta in metas {
                if let Some(axis) = meta.labels().iter().position(|&l| l == label) {
                    let extent = meta.extents()[axis];
                    if extents[label] == 0 {
                        extents[label] = extent;
                    } else if extents[label] != extent {
                        return Err(EinsumError::ExtentMismatch {
                            label,
                            expected: extents[label],
                            found: extent,
                        });
                    }
                }
            }
        }

        // Uniform element type across all inputs.
        let elem = metas[0].elem();
        for meta in metas {
            if meta.elem() != elem {
                return Err(EinsumError::TypeMismatch {
                    expected: elem.name(),
                    found: meta.elem().name(),
                });
            }
        }

        let output_shape: Vec<usize> = output.iter().map(|&label| extents[label]).collect();
        let output_strides = compute_row_major_strides(&output_shape);
        let inputs = metas
            .iter()
            .map(|meta| AxisTable {
                labels: meta.labels().to_vec(),
                strides: compute_row_major_strides(meta.extents()),
            })
            .collect();

        Ok(Self {
            output_labels: output.to_vec(),
            output_shape,
            output_strides,
            contracted,
            extents,
            inputs,
            elem,
        })
    }

    /// Output labels in declared order.
    #[inline]
    pub fn output_labels(&self) -> &[Label] {
        &self.output_labels
    }

    /// Output shape, one extent per output label in declared order.
    #[inline]
    pub fn output_shape(&self) -> &[usize] {
        &self.output_shape
    }

    /// Row-major strides of the output.
    #[inline]
    pub fn output_strides(&self) -> &[usize] {
        &self.output_strides
    }

    /// Contracted labels in ascending label-id order.
    #[inline]
    pub fn contracted_labels(&self) -> &[Label] {
        &self.contracted
    }

    /// Resolved extent for a label, or `None` if the label occurs nowhere.
    pub fn extent_of(&self, label: Label) -> Option<usize> {
        match self.extents.get(label) {
            Some(&0) | None => None,
            Some(&extent) => Some(extent),
        }
    }

    /// Number of elements in the output (1 for a scalar output).
    pub fn output_size(&self) -> usize {
        self.output_shape.iter().product()
    }

    /// Size of the label-id index arena (`max label + 1`).
    #[inline]
    pub(crate) fn label_count(&self) -> usize {
        self.extents.len()
    }

    /// Number of input tensors the schema was planned for.
    #[inline]
    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Element type the contraction accumulates in.
    #[inline]
    pub fn elem(&self) -> ElemType {
        self.elem
    }
}

/// Arena size covering every label in the output and all inputs.
fn label_arena_size(metas: &[TensorMeta], output: &[Label]) -> usize {
    let mut max: Option<Label> = output.iter().copied().max();
    for meta in metas {
        max = max.max(meta.labels().iter().copied().max());
    }
    max.map_or(0, |m| m + 1)
}
