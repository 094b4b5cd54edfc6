//! Validation failure tests.
//!
//! Every schema error must be reported before any element is read: the
//! output buffer keeps its sentinel contents on failure, and cached
//! verdicts are returned unchanged on repeat use of a bad signature.

use eincontract::{
    contract_into, ContractionSchema, Contractor, EinsumError, ElemType, TensorMeta, TensorView,
};

const SENTINEL: f64 = 99.0;

#[test]
fn test_label_arity_leaves_output_untouched() {
    // Label 0 occurs in both inputs and the output: three occurrences.
    let v = [1.0f64, 2.0];
    let w = [3.0f64, 4.0];
    let views = [TensorView::new(&v, &[0], &[2]), TensorView::new(&w, &[0], &[2])];

    let mut out = [SENTINEL; 2];
    let err = contract_into(&[0], &mut out, &views).unwrap_err();

    assert_eq!(err, EinsumError::LabelArity { label: 0, count: 3 });
    assert_eq!(out, [SENTINEL; 2]);
}

#[test]
fn test_extent_mismatch_leaves_output_untouched() {
    // Label 1 is extent 2 in one tensor and 3 in the other.
    let a = [1.0f64, 2.0, 3.0, 4.0];
    let w = [1.0f64, 2.0, 3.0];
    let views = [
        TensorView::new(&a, &[0, 1], &[2, 2]),
        TensorView::new(&w, &[1], &[3]),
    ];

    let mut out = [SENTINEL; 2];
    let err = contract_into(&[0], &mut out, &views).unwrap_err();

    assert_eq!(
        err,
        EinsumError::ExtentMismatch {
            label: 1,
            expected: 2,
            found: 3
        }
    );
    assert_eq!(out, [SENTINEL; 2]);
}

#[test]
fn test_repeated_axis_leaves_output_untouched() {
    // A single tensor listing the same label twice (implicit trace).
    let a = [1.0f64, 2.0, 3.0, 4.0];
    let views = [TensorView::new(&a, &[0, 0], &[2, 2])];

    let mut out = [SENTINEL; 1];
    let err = contract_into(&[], &mut out, &views).unwrap_err();

    assert_eq!(err, EinsumError::RepeatedAxis { tensor: 0, label: 0 });
    assert_eq!(out, [SENTINEL; 1]);
}

#[test]
fn test_label_placement_repeated_output_label() {
    // Output (i, i): count 2 for label 0, but no input carries it once.
    let a = [1.0f64, 2.0];
    let views = [TensorView::new(&a, &[1], &[2])];

    let mut out = [SENTINEL; 4];
    let err = contract_into(&[0, 0], &mut out, &views).unwrap_err();

    assert_eq!(
        err,
        EinsumError::LabelPlacement {
            label: 0,
            expected: 1,
            found: 0
        }
    );
    assert_eq!(out, [SENTINEL; 4]);
}

#[test]
fn test_zero_extent_rejected() {
    let a: [f64; 0] = [];
    let views = [TensorView::new(&a, &[0], &[0])];

    let mut out = [SENTINEL; 1];
    let err = contract_into(&[], &mut out, &views).unwrap_err();

    assert_eq!(err, EinsumError::ZeroExtent { tensor: 0, label: 0 });
    assert_eq!(out, [SENTINEL; 1]);
}

#[test]
fn test_unused_label_id_gap_is_fine() {
    // Label ids need not be dense; 7 and 40 work like 0 and 1.
    let a = [1.0f64, 2.0, 3.0, 4.0];
    let x = [1.0f64, 1.0];
    let views = [
        TensorView::new(&a, &[40, 7], &[2, 2]),
        TensorView::new(&x, &[7], &[2]),
    ];

    let mut out = [0.0f64; 2];
    contract_into(&[40], &mut out, &views).unwrap();
    assert_eq!(out, [3.0, 7.0]);
}

#[test]
fn test_type_mismatch_at_descriptor_level() {
    // The typed view API fixes one element type per call, so mixed types
    // can only be expressed (and must be rejected) at descriptor level.
    let metas = [
        TensorMeta::new(&[0], &[2], ElemType::of::<f32>()),
        TensorMeta::new(&[0], &[2], ElemType::of::<f64>()),
    ];

    let err = ContractionSchema::plan(&metas, &[]).unwrap_err();
    assert_eq!(
        err,
        EinsumError::TypeMismatch {
            expected: "f32",
            found: "f64"
        }
    );
}

#[test]
fn test_contractor_caches_invalid_verdict() {
    let engine = Contractor::new();
    let a = [1.0f64, 2.0, 3.0, 4.0];
    let w = [1.0f64, 2.0, 3.0];

    let mut out = [SENTINEL; 2];
    for _ in 0..3 {
        let views = [
            TensorView::new(&a, &[0, 1], &[2, 2]),
            TensorView::new(&w, &[1], &[3]),
        ];
        let err = engine.contract_into(&[0], &mut out, &views).unwrap_err();
        assert_eq!(
            err,
            EinsumError::ExtentMismatch {
                label: 1,
                expected: 2,
                found: 3
            }
        );
        assert_eq!(out, [SENTINEL; 2]);
    }

    // One cached verdict, not three.
    assert_eq!(engine.cached_schemas(), 1);
}

#[test]
fn test_error_messages() {
    let err = EinsumError::LabelArity { label: 3, count: 5 };
    assert_eq!(
        err.to_string(),
        "label 3 occurs 5 times across inputs and output, expected exactly 2"
    );

    let err = EinsumError::ExtentMismatch {
        label: 1,
        expected: 2,
        found: 3,
    };
    assert_eq!(err.to_string(), "extent mismatch for label 1: 2 vs 3");
}
