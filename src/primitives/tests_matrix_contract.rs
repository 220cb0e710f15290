// =========================================================================
// Algebraic contracts for the Matrix primitives.
//
// Each test enforces one identity from basic linear algebra; the proptest
// blocks re-check the same identities over deterministic pseudo-random
// matrices (sin ramps, diagonally dominant where an inverse is needed).
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

fn assert_matrix_close(actual: &Matrix, expected: &Matrix, tol: f64, law: &str) {
    assert_eq!(actual.shape(), expected.shape(), "{law}: shape mismatch");
    let (rows, cols) = expected.shape();
    for i in 0..rows {
        for j in 0..cols {
            assert!(
                (actual.get(i, j) - expected.get(i, j)).abs() < tol,
                "{law}: cell ({i},{j}) is {}, expected {}",
                actual.get(i, j),
                expected.get(i, j)
            );
        }
    }
}

/// Transpose involution: (A^T)^T = A
#[test]
fn contract_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a.transpose().transpose();
    assert_matrix_close(&att, &a, 1e-12, "(A^T)^T = A");
}

/// Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn contract_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1.0; 12]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");
    assert_eq!(c.shape(), (2, 4), "(2x3)*(3x4) must be (2,4)");
}

/// Identity is a two-sided multiplicative identity: A * I = I * A = A
#[test]
fn contract_identity_matmul_two_sided() {
    let a =
        Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).expect("valid");
    let eye = Matrix::identity(3);

    let right = a.matmul(&eye).expect("compatible dims");
    assert_matrix_close(&right, &a, 1e-12, "A * I = A");

    let left = eye.matmul(&a).expect("compatible dims");
    assert_matrix_close(&left, &a, 1e-12, "I * A = A");
}

/// Additive round trip: (A + B) - B = A
#[test]
fn contract_add_sub_round_trip() {
    let a = Matrix::from_vec(2, 2, vec![1.0, -2.0, 3.5, 0.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![10.0, 0.25, -7.0, 2.0]).expect("valid");
    let round = a
        .add(&b)
        .expect("same shape")
        .sub(&b)
        .expect("same shape");
    assert_matrix_close(&round, &a, 1e-12, "(A + B) - B = A");
}

/// det(I_n) = 1 for every size
#[test]
fn contract_identity_determinant() {
    for n in 1..=5 {
        let det = Matrix::identity(n).determinant().expect("square");
        assert!((det - 1.0).abs() < 1e-12, "det(I_{n}) = 1, got {det}");
    }
}

/// Inverse round trip: A * A^-1 = A^-1 * A = I
#[test]
fn contract_inverse_round_trip() {
    let a = Matrix::from_vec(
        3,
        3,
        vec![2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0],
    )
    .expect("valid");
    let inv = a.inverse().expect("non-singular");
    let eye = Matrix::identity(3);

    assert_matrix_close(&a.matmul(&inv).expect("square"), &eye, 1e-9, "A * A^-1 = I");
    assert_matrix_close(&inv.matmul(&a).expect("square"), &eye, 1e-9, "A^-1 * A = I");
}

/// Power laws: A^0 = I, A^1 = A, A^2 = A*A, A^-1 = inverse(A)
#[test]
fn contract_power_laws() {
    let a = Matrix::from_vec(2, 2, vec![2.0, 1.0, 1.0, 1.0]).expect("valid");

    let p0 = a.power(Scalar::new(0.0)).expect("square");
    assert_matrix_close(&p0, &Matrix::identity(2), 1e-12, "A^0 = I");

    let p1 = a.power(Scalar::new(1.0)).expect("any power");
    assert_matrix_close(&p1, &a, 1e-12, "A^1 = A");

    let p2 = a.power(Scalar::new(2.0)).expect("square");
    let aa = a.matmul(&a).expect("square");
    assert_matrix_close(&p2, &aa, 1e-12, "A^2 = A*A");

    let pm1 = a.power(Scalar::new(-1.0)).expect("non-singular");
    let inv = a.inverse().expect("non-singular");
    assert_matrix_close(&pm1, &inv, 1e-12, "A^-1 = inverse(A)");
}

mod matrix_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    fn ramp_data(len: usize, seed: u32) -> Vec<f64> {
        (0..len)
            .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
            .collect()
    }

    // Diagonally dominant, so always invertible.
    fn well_conditioned(n: usize, seed: u32) -> Matrix {
        let mut data = ramp_data(n * n, seed);
        for i in 0..n {
            data[i * n + i] += 10.0 * n as f64;
        }
        Matrix::from_vec(n, n, data).expect("valid")
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn contract_prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(rows, cols, ramp_data(rows * cols, seed)).expect("valid");
            let att = a.transpose().transpose();

            prop_assert_eq!(att.shape(), a.shape());
            for i in 0..rows {
                for j in 0..cols {
                    prop_assert!(
                        (att.get(i, j) - a.get(i, j)).abs() < 1e-12,
                        "(A^T)^T[{},{}] != A[{},{}]",
                        i, j, i, j
                    );
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn contract_prop_add_sub_round_trip(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(rows, cols, ramp_data(rows * cols, seed)).expect("valid");
            let b = Matrix::from_vec(rows, cols, ramp_data(rows * cols, seed + 1)).expect("valid");
            let round = a.add(&b).expect("same shape").sub(&b).expect("same shape");

            for i in 0..rows {
                for j in 0..cols {
                    prop_assert!(
                        (round.get(i, j) - a.get(i, j)).abs() < 1e-9,
                        "((A+B)-B)[{},{}] != A[{},{}]",
                        i, j, i, j
                    );
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn contract_prop_scalar_mul_commutes(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
            factor in -100.0..100.0f64,
        ) {
            let m = Matrix::from_vec(rows, cols, ramp_data(rows * cols, seed)).expect("valid");
            let s = Scalar::new(factor);
            prop_assert_eq!(m.mul_scalar(s), s.mul_matrix(&m));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn contract_prop_inverse_round_trip(
            n in 1..=4usize,
            seed in 0..500u32,
        ) {
            let a = well_conditioned(n, seed);
            let inv = a.inverse().expect("diagonally dominant matrices are invertible");
            let product = a.matmul(&inv).expect("square");
            let eye = Matrix::identity(n);

            for i in 0..n {
                for j in 0..n {
                    prop_assert!(
                        (product.get(i, j) - eye.get(i, j)).abs() < 1e-6,
                        "(A * A^-1)[{},{}] = {}, expected {}",
                        i, j, product.get(i, j), eye.get(i, j)
                    );
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn contract_prop_power_matches_repeated_matmul(
            n in 1..=3usize,
            exp in 2..=4i32,
            seed in 0..500u32,
        ) {
            let a = well_conditioned(n, seed);
            let powered = a.power(Scalar::new(f64::from(exp))).expect("square");

            let mut expected = a.clone();
            for _ in 1..exp {
                expected = expected.matmul(&a).expect("square");
            }

            for i in 0..n {
                for j in 0..n {
                    prop_assert!(
                        (powered.get(i, j) - expected.get(i, j)).abs() < 1e-6,
                        "A^{}[{},{}] diverges from repeated matmul",
                        exp, i, j
                    );
                }
            }
        }
    }
}
