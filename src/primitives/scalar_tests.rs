pub(crate) use super::*;
use crate::primitives::Matrix;

#[test]
fn test_new_and_value() {
    let s = Scalar::new(2.5);
    assert!((s.value() - 2.5).abs() < 1e-12);
}

#[test]
fn test_from_f64() {
    let s: Scalar = 3.0.into();
    assert_eq!(s, Scalar::new(3.0));
}

#[test]
fn test_is_integer() {
    assert!(Scalar::new(2.0).is_integer());
    assert!(Scalar::new(-3.0).is_integer());
    assert!(Scalar::new(0.0).is_integer());
    assert!(!Scalar::new(0.5).is_integer());
    assert!(!Scalar::new(f64::NAN).is_integer());
    assert!(!Scalar::new(f64::INFINITY).is_integer());
    assert!(!Scalar::new(f64::NEG_INFINITY).is_integer());
}

#[test]
fn test_mul_matrix_commutes() {
    let m = Matrix::from_rows(vec![vec![1.0, -2.0], vec![0.5, 4.0]])
        .expect("test rows are rectangular: 2 rows of 2");
    let s = Scalar::new(-3.0);
    assert_eq!(s.mul_matrix(&m), m.mul_scalar(s));
    assert!((s.mul_matrix(&m).get(0, 1) - 6.0).abs() < 1e-12);
}

#[test]
fn test_serde_round_trip() {
    let s = Scalar::new(1.25);
    let json = serde_json::to_string(&s).expect("scalar serializes");
    let back: Scalar = serde_json::from_str(&json).expect("scalar deserializes");
    assert_eq!(back, s);
}
