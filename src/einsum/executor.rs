//! Contraction execution over a planned schema.
//!
//! Two iterative odometer loops drive a single flat index arena indexed by
//! label id: the outer loop walks the output index space in row-major
//! order (last output label fastest), the inner loop walks the contracted
//! index space in the planner's ascending-label order (highest label id
//! fastest). No recursion; both loops are bounded by the schema's shapes.

use super::schema::ContractionSchema;
use crate::element::Element;
use crate::error::Result;
use crate::tensor::{offset_for, Label, TensorView, TensorViewMut};

/// Run the contraction described by `schema`, writing into `out`.
///
/// Writes each output position exactly once and never reads the output
/// buffer, so `out` needs no initialization. Inputs are read-only; the
/// output goes through a read-write view over the caller's buffer.
///
/// # Panics
///
/// Panics if `out` is smaller than the schema's output size or the number
/// of views differs from the number the schema was planned for.
pub(crate) fn execute<T: Element>(
    schema: &ContractionSchema,
    inputs: &[TensorView<'_, T>],
    out: &mut [T],
) {
    assert_eq!(
        inputs.len(),
        schema.num_inputs(),
        "schema was planned for {} input(s), got {}",
        schema.num_inputs(),
        inputs.len()
    );

    let output_labels = schema.output_labels();
    let output_shape = schema.output_shape();
    let output_strides = schema.output_strides();
    let mut out_view = TensorViewMut::new(out, output_labels, output_shape);

    // One index slot per label id; output labels are set by the outer
    // loop, contracted labels by the inner loop.
    let mut assignment = vec![0usize; schema.label_count()];

    loop {
        let off = offset_for(output_labels, output_strides, &assignment);
        out_view.data_mut()[off] = contracted_sum(schema, inputs, &mut assignment);

        // Row-major odometer over the output labels. Output labels are
        // pairwise distinct after validation, so the arena slots double as
        // the loop counters.
        let mut d = output_labels.len();
        loop {
            if d == 0 {
                return;
            }
            d -= 1;
            let label = output_labels[d];
            assignment[label] += 1;
            if assignment[label] < output_shape[d] {
                break;
            }
            assignment[label] = 0;
        }
    }
}

/// Sum of input-element products over the contracted index space, with the
/// output labels held fixed by the caller.
fn contracted_sum<T: Element>(
    schema: &ContractionSchema,
    inputs: &[TensorView<'_, T>],
    assignment: &mut [usize],
) -> T {
    let contracted = schema.contracted_labels();
    for &label in contracted {
        assignment[label] = 0;
    }

    let mut sum = T::zero();
    loop {
        sum = sum + product_at(schema, inputs, assignment);

        // Odometer over the contracted labels, highest label id fastest.
        // With no contracted labels this exits after the single product.
        let mut d = contracted.len();
        loop {
            if d == 0 {
                return sum;
            }
            d -= 1;
            let label = contracted[d];
            assignment[label] += 1;
            if assignment[label] < schema.extents[label] {
                break;
            }
            assignment[label] = 0;
        }
    }
}

/// Product of one element from every input at the current assignment.
#[inline]
fn product_at<T: Element>(
    schema: &ContractionSchema,
    inputs: &[TensorView<'_, T>],
    assignment: &[usize],
) -> T {
    let mut product = T::one();
    for (table, view) in schema.inputs.iter().zip(inputs) {
        let off = offset_for(&table.labels, &table.strides, assignment);
        product = product * view.data()[off];
    }
    product
}

/// Plan-and-execute helper shared by the public entry points.
pub(crate) fn plan_and_execute<T: Element>(
    output: &[Label],
    out: &mut [T],
    inputs: &[TensorView<'_, T>],
) -> Result<()> {
    let metas: Vec<_> = inputs.iter().map(|view| view.meta()).collect();
    let schema = ContractionSchema::plan(&metas, output)?;
    execute(&schema, inputs, out);
    Ok(())
}
