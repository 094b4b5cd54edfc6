//! Read-only and read-write view types over caller-owned buffers.

use super::{compute_row_major_strides, offset_for, Label, TensorMeta};
use crate::element::Element;

/// A read-only, label-annotated view over a flat buffer.
///
/// The buffer stays owned by the caller; the view only derives row-major
/// strides from the extents and exposes offset arithmetic. All contraction
/// inputs are read-only views.
///
/// # Example
///
/// ```
/// use eincontract::TensorView;
///
/// // A 2x3 matrix with axis labels (i, j) = (0, 1).
/// let data = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let view = TensorView::new(&data, &[0, 1], &[2, 3]);
///
/// assert_eq!(view.rank(), 2);
/// assert_eq!(view.strides(), &[3, 1]);
/// ```
pub struct TensorView<'a, T: Element> {
    data: &'a [T],
    labels: Vec<Label>,
    extents: Vec<usize>,
    strides: Vec<usize>,
}

impl<'a, T: Element> TensorView<'a, T> {
    /// Create a view from a buffer, a label sequence, and an extent
    /// sequence of equal length.
    ///
    /// # Panics
    ///
    /// Panics if the sequences differ in length or the buffer holds fewer
    /// elements than the extents address.
    pub fn new(data: &'a [T], labels: &[Label], extents: &[usize]) -> Self {
        assert_eq!(
            labels.len(),
            extents.len(),
            "label count {} doesn't match extent count {}",
            labels.len(),
            extents.len()
        );
        let numel: usize = extents.iter().product();
        assert!(
            data.len() >= numel,
            "buffer holds {} element(s) but extents {:?} address {}",
            data.len(),
            extents,
            numel
        );

        Self {
            data,
            labels: labels.to_vec(),
            extents: extents.to_vec(),
            strides: compute_row_major_strides(extents),
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

    /// Row-major strides, derived once at construction.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// The borrowed buffer.
    #[inline]
    pub fn data(&self) -> &[T] {
        self.data
    }

    /// Shape/label descriptor for validation, planning, and cache keys.
    pub fn meta(&self) -> TensorMeta {
        TensorMeta::new(&self.labels, &self.extents, T::elem_type())
    }

    /// Flat buffer offset for an index assignment.
    ///
    /// `assignment` maps label id → index value and must cover every label
    /// this view carries; only the view's own axes contribute.
    #[inline]
    pub fn offset(&self, assignment: &[usize]) -> usize {
        offset_for(&self.labels, &self.strides, assignment)
    }
}

/// A read-write, label-annotated view over a flat buffer.
///
/// Same metadata and offset arithmetic as [`TensorView`]; used only for
/// the contraction output.
pub struct TensorViewMut<'a, T: Element> {
    data: &'a mut [T],
    labels: Vec<Label>,
    extents: Vec<usize>,
    strides: Vec<usize>,
}

impl<'a, T: Element> TensorViewMut<'a, T> {
    /// Create a mutable view; same contract as [`TensorView::new`].
    pub fn new(data: &'a mut [T], labels: &[Label], extents: &[usize]) -> Self {
        assert_eq!(
            labels.len(),
            extents.len(),
            "label count {} doesn't match extent count {}",
            labels.len(),
            extents.len()
        );
        let numel: usize = extents.iter().product();
        assert!(
            data.len() >= numel,
            "buffer holds {} element(s) but extents {:?} address {}",
            data.len(),
            extents,
            numel
        );

        Self {
            data,
            labels: labels.to_vec(),
            extents: extents.to_vec(),
            strides: compute_row_major_strides(extents),
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

    /// Row-major strides, derived once at construction.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// The borrowed buffer.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.data
    }

    /// Shape/label descriptor.
    pub fn meta(&self) -> TensorMeta {
        TensorMeta::new(&self.labels, &self.extents, T::elem_type())
    }

    /// Flat buffer offset for an index assignment; see
    /// [`TensorView::offset`].
    #[inline]
    pub fn offset(&self, assignment: &[usize]) -> usize {
        offset_for(&self.labels, &self.strides, assignment)
    }
}
