//! Einsum equation notation.
//!
//! Maps equation strings to label sequences:
//!
//! - `"ij,jk->ik"`: matrix multiplication
//! - `"ij,j->i"`: matrix-vector product
//! - `"i,i->"`: dot product
//! - `"i,j->ij"`: outer product
//!
//! Letters become label ids (`a..=z` → 0..26, `A..=Z` → 26..52), so the
//! alphabetical order of contracted letters is also their summation order.

use super::contract_into;
use crate::element::Element;
use crate::error::{EinsumError, Result};
use crate::tensor::{Label, TensorView};

/// A parsed einsum equation: one label sequence per input operand plus the
/// output label sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    inputs: Vec<Vec<Label>>,
    output: Vec<Label>,
}

impl Equation {
    /// Parse an equation of the form `"ij,jk->ik"`.
    ///
    /// Whitespace is ignored. The `->` and the output term are required;
    /// there is no output inference.
    pub fn parse(equation: &str) -> Result<Self> {
        let compact: String = equation.chars().filter(|c| !c.is_whitespace()).collect();
        let (lhs, rhs) = compact
            .split_once("->")
            .ok_or_else(|| EinsumError::BadEquation("missing \"->\"".into()))?;
        if rhs.contains("->") {
            return Err(EinsumError::BadEquation("more than one \"->\"".into()));
        }

        let inputs = lhs
            .split(',')
            .map(parse_term)
            .collect::<Result<Vec<_>>>()?;
        let output = parse_term(rhs)?;

        Ok(Self { inputs, output })
    }

    /// Label sequences of the input operands, in operand order.
    #[inline]
    pub fn inputs(&self) -> &[Vec<Label>] {
        &self.inputs
    }

    /// Output label sequence.
    #[inline]
    pub fn output(&self) -> &[Label] {
        &self.output
    }
}

fn parse_term(term: &str) -> Result<Vec<Label>> {
    term.chars().map(label_of).collect()
}

fn label_of(c: char) -> Result<Label> {
    match c {
        'a'..='z' => Ok(c as Label - 'a' as Label),
        'A'..='Z' => Ok(26 + c as Label - 'A' as Label),
        _ => Err(EinsumError::BadEquation(format!(
            "unexpected character {c:?}"
        ))),
    }
}

/// Contract positional `(data, shape)` operands according to an equation,
/// writing the result into `out`.
///
/// # Example
///
/// ```
/// use eincontract::einsum_into;
///
/// let a = [1.0f64, 2.0, 3.0, 4.0];
/// let v = [1.0f64, 1.0];
/// let mut out = [0.0f64; 2];
///
/// einsum_into("ij,j->i", &[(&a, &[2, 2]), (&v, &[2])], &mut out)?;
/// assert_eq!(out, [3.0, 7.0]);
/// # Ok::<(), eincontract::EinsumError>(())
/// ```
pub fn einsum_into<T: Element>(
    equation: &str,
    operands: &[(&[T], &[usize])],
    out: &mut [T],
) -> Result<()> {
    let parsed = Equation::parse(equation)?;
    if operands.len() != parsed.inputs.len() {
        return Err(EinsumError::OperandCount {
            expected: parsed.inputs.len(),
            found: operands.len(),
        });
    }
    for (operand, ((_, shape), labels)) in operands.iter().zip(&parsed.inputs).enumerate() {
        if shape.len() != labels.len() {
            return Err(EinsumError::OperandRank {
                operand,
                labels: labels.len(),
                dims: shape.len(),
            });
        }
    }

    let views: Vec<TensorView<'_, T>> = operands
        .iter()
        .zip(&parsed.inputs)
        .map(|(&(data, shape), labels)| TensorView::new(data, labels, shape))
        .collect();

    contract_into(&parsed.output, out, &views)
}
