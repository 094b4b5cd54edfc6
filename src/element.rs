//! Scalar element types for contraction.
//!
//! The executor accumulates sums starting from [`Zero::zero`] and element
//! products starting from [`One::one`], so any type with well-behaved
//! `(+, ×)` identities can be contracted.

use std::any::TypeId;

use num_traits::{One, Zero};

/// Single-precision complex element.
pub type Complex32 = num_complex::Complex<f32>;

/// Double-precision complex element.
pub type Complex64 = num_complex::Complex<f64>;

/// Marker trait for scalar types that can be used as tensor elements.
pub trait Element:
    Copy + Clone + Send + Sync + PartialEq + std::fmt::Debug + Zero + One + 'static
{
    /// Runtime tag identifying this element type.
    fn elem_type() -> ElemType {
        ElemType::of::<Self>()
    }
}

impl Element for f32 {}
impl Element for f64 {}
impl Element for i32 {}
impl Element for i64 {}
impl Element for u32 {}
impl Element for u64 {}
impl Element for Complex32 {}
impl Element for Complex64 {}

/// Runtime identity of an element type.
///
/// Carried by tensor descriptors so that validation can reject mixed-type
/// contractions at the metadata level. Two tags compare equal exactly when
/// they name the same Rust type.
#[derive(Clone, Copy, Debug)]
pub struct ElemType {
    id: TypeId,
    name: &'static str,
}

impl ElemType {
    /// Tag for the type `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Human-readable type name (diagnostics only; equality uses the id).
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ElemType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ElemType {}

impl std::hash::Hash for ElemType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for ElemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elem_type_equality() {
        assert_eq!(ElemType::of::<f32>(), ElemType::of::<f32>());
        assert_ne!(ElemType::of::<f32>(), ElemType::of::<f64>());
        assert_ne!(ElemType::of::<Complex32>(), ElemType::of::<Complex64>());
    }

    #[test]
    fn test_elem_type_via_trait() {
        assert_eq!(<f64 as Element>::elem_type(), ElemType::of::<f64>());
    }

    #[test]
    fn test_elem_type_name() {
        assert_eq!(ElemType::of::<f32>().name(), "f32");
    }
}
