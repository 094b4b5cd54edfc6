//! Non-owning, label-annotated tensor views.
//!
//! A view borrows a caller-owned flat buffer and annotates it with an
//! ordered label sequence and an ordered extent sequence of equal length
//! (the rank). Row-major strides are derived once at construction. The
//! engine never takes ownership of tensor data.

mod view;

pub use view::{TensorView, TensorViewMut};

use crate::element::ElemType;

/// Integer identifier for a logical tensor axis.
///
/// Labels are shared by name across tensors and the output: the same label
/// on two different tensors means "these axes are the same index variable".
pub type Label = usize;

/// Shape and label metadata describing one tensor view.
///
/// Descriptors are what validation and planning operate on; they carry no
/// reference to the underlying buffer, so a given combination of
/// descriptors always plans to the same schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TensorMeta {
    labels: Vec<Label>,
    extents: Vec<usize>,
    elem: ElemType,
}

impl TensorMeta {
    /// Create a descriptor from label and extent sequences.
    ///
    /// # Panics
    ///
    /// Panics if the sequences differ in length.
    pub fn new(labels: &[Label], extents: &[usize], elem: ElemType) -> Self {
        assert_eq!(
            labels.len(),
            extents.len(),
            "label count {} doesn't match extent count {}",
            labels.len(),
            extents.len()
        );
        Self {
            labels: labels.to_vec(),
            extents: extents.to_vec(),
            elem,
        }
    }

    /// Number of axes.
    #[inline]
    pub fn rank(&self) -> usize {
        self.labels.len()
    }

    /// Ordered axis labels.
    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Ordered axis extents.
    #[inline]
    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    /// Element type tag.
    #[inline]
    pub fn elem(&self) -> ElemType {
        self.elem
    }
}

/// Compute row-major strides for the given extents.
///
/// The last axis varies fastest: its stride is 1, and
/// `stride[d] = extent[d + 1] * stride[d + 1]`.
pub fn compute_row_major_strides(extents: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; extents.len()];
    for d in (0..extents.len().saturating_sub(1)).rev() {
        strides[d] = extents[d + 1] * strides[d + 1];
    }
    strides
}

/// Flat offset for an index assignment, over one tensor's own axes only.
///
/// `assignment` is indexed by label id and must cover every label in
/// `labels`.
#[inline]
pub(crate) fn offset_for(labels: &[Label], strides: &[usize], assignment: &[usize]) -> usize {
    labels
        .iter()
        .zip(strides.iter())
        .map(|(&label, &stride)| assignment[label] * stride)
        .sum()
}
