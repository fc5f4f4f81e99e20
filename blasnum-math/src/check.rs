//! Comparison of computed results against reference ("gold") results.
//!
//! Matrices are column major, `m` rows by `n` columns with leading dimension `lda`.
//! Values are compared through [`Scalar::decompose`], so every representation
//! (including the compact ones) is checked component by component in double precision.

use blasnum_sys::{BFloat16, Complex32, Complex64, Half};
use log::error;
use thiserror::Error;

use crate::scalar::Scalar;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CheckError {
    #[error("batch {batch}, element ({row}, {col}): expected {expected}, got {actual}")]
    Mismatch {
        batch: usize,
        row: usize,
        col: usize,
        expected: String,
        actual: String,
    },
    #[error(
        "batch {batch}, element ({row}, {col}): expected {expected}, got {actual} \
         (tolerance {tolerance})"
    )]
    OutOfTolerance {
        batch: usize,
        row: usize,
        col: usize,
        expected: String,
        actual: String,
        tolerance: f64,
    },
    #[error("expected {expected} batches, got {actual}")]
    BatchCount { expected: usize, actual: usize },
    #[error("leading dimension {lda} is smaller than the row count {m}")]
    LeadingDimension { lda: usize, m: usize },
    #[error("buffer of {len} elements is too short for a {m}x{n} matrix with lda {lda}")]
    ShortBuffer {
        len: usize,
        m: usize,
        n: usize,
        lda: usize,
    },
    #[error("unknown norm type '{0}'")]
    UnknownNorm(char),
}

/// Accumulated rounding error allowed per summed term, by representation
pub trait Tolerance: Scalar {
    const SUM_ERROR_TOLERANCE: f64;
}

impl Tolerance for Half {
    const SUM_ERROR_TOLERANCE: f64 = 1.0 / 900.0;
}

impl Tolerance for BFloat16 {
    const SUM_ERROR_TOLERANCE: f64 = 1.0 / 100.0;
}

impl Tolerance for f32 {
    const SUM_ERROR_TOLERANCE: f64 = 1.0 / 10_000.0;
}

impl Tolerance for Complex32 {
    const SUM_ERROR_TOLERANCE: f64 = 1.0 / 10_000.0;
}

impl Tolerance for f64 {
    const SUM_ERROR_TOLERANCE: f64 = 1.0 / 1_000_000.0;
}

impl Tolerance for Complex64 {
    const SUM_ERROR_TOLERANCE: f64 = 1.0 / 1_000_000.0;
}

/// Matrix norms supported by [`norm_check`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Norm {
    /// Maximum absolute column sum
    One,
    /// Maximum absolute row sum
    Infinity,
    Frobenius,
}

impl TryFrom<char> for Norm {
    type Error = CheckError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'O' | 'o' | '1' => Ok(Self::One),
            'I' | 'i' => Ok(Self::Infinity),
            'F' | 'f' | 'E' | 'e' => Ok(Self::Frobenius),
            _ => Err(CheckError::UnknownNorm(c)),
        }
    }
}

#[derive(Clone, Copy)]
enum Policy {
    Exact,
    Near(f64),
}

impl Policy {
    fn accepts(self, gold: f64, actual: f64) -> bool {
        // NaN only ever matches NaN
        if gold.is_nan() || actual.is_nan() {
            return gold.is_nan() && actual.is_nan();
        }
        match self {
            Policy::Exact => gold == actual,
            Policy::Near(tol) => gold == actual || (gold - actual).abs() <= tol,
        }
    }
}

fn required_len(m: usize, n: usize, lda: usize) -> usize {
    if m == 0 || n == 0 {
        0
    } else {
        (n - 1) * lda + m
    }
}

fn check_shape<T>(m: usize, n: usize, lda: usize, buffers: &[&[T]]) -> Result<(), CheckError> {
    if lda < m {
        return Err(CheckError::LeadingDimension { lda, m });
    }
    let required = required_len(m, n, lda);
    for b in buffers {
        if b.len() < required {
            return Err(CheckError::ShortBuffer {
                len: b.len(),
                m,
                n,
                lda,
            });
        }
    }
    Ok(())
}

fn check_batch_count(gold: usize, actual: usize) -> Result<(), CheckError> {
    if gold == actual {
        Ok(())
    } else {
        Err(CheckError::BatchCount {
            expected: gold,
            actual,
        })
    }
}

fn compare<T: Scalar>(
    batch: usize,
    m: usize,
    n: usize,
    lda: usize,
    gold: &[T],
    actual: &[T],
    policy: Policy,
) -> Result<(), CheckError> {
    check_shape(m, n, lda, &[gold, actual])?;

    for col in 0..n {
        for row in 0..m {
            let idx = row + col * lda;
            let (g, a) = (gold[idx], actual[idx]);
            let (g_re, g_im) = g.decompose();
            let (a_re, a_im) = a.decompose();

            if policy.accepts(g_re, a_re) && policy.accepts(g_im, a_im) {
                continue;
            }

            let err = match policy {
                Policy::Exact => CheckError::Mismatch {
                    batch,
                    row,
                    col,
                    expected: g.to_display_string(),
                    actual: a.to_display_string(),
                },
                Policy::Near(tolerance) => CheckError::OutOfTolerance {
                    batch,
                    row,
                    col,
                    expected: g.to_display_string(),
                    actual: a.to_display_string(),
                    tolerance,
                },
            };
            error!("{err}");
            return Err(err);
        }
    }
    Ok(())
}

fn compare_batched<T, G, A>(
    m: usize,
    n: usize,
    lda: usize,
    gold: &[G],
    actual: &[A],
    policy: Policy,
) -> Result<(), CheckError>
where
    T: Scalar,
    G: AsRef<[T]>,
    A: AsRef<[T]>,
{
    check_batch_count(gold.len(), actual.len())?;
    for (batch, (g, a)) in gold.iter().zip(actual).enumerate() {
        compare(batch, m, n, lda, g.as_ref(), a.as_ref(), policy)?;
    }
    Ok(())
}

/// Require every element to match exactly. Two NaNs count as a match.
///
/// # Errors
/// The first mismatching element, or a shape error when a buffer cannot hold the matrix.
pub fn unit_check<T: Scalar>(
    m: usize,
    n: usize,
    lda: usize,
    gold: &[T],
    actual: &[T],
) -> Result<(), CheckError> {
    compare(0, m, n, lda, gold, actual, Policy::Exact)
}

/// [`unit_check`] over every batch.
///
/// # Errors
/// As [`unit_check`], plus [`CheckError::BatchCount`] when the batch counts differ.
pub fn unit_check_batched<T, G, A>(
    m: usize,
    n: usize,
    lda: usize,
    gold: &[G],
    actual: &[A],
) -> Result<(), CheckError>
where
    T: Scalar,
    G: AsRef<[T]>,
    A: AsRef<[T]>,
{
    compare_batched(m, n, lda, gold, actual, Policy::Exact)
}

/// Require every component to lie within `tolerance` of the gold value.
///
/// # Errors
/// The first element out of tolerance, or a shape error.
pub fn near_check<T: Scalar>(
    m: usize,
    n: usize,
    lda: usize,
    gold: &[T],
    actual: &[T],
    tolerance: f64,
) -> Result<(), CheckError> {
    compare(0, m, n, lda, gold, actual, Policy::Near(tolerance))
}

/// [`near_check`] over every batch.
///
/// # Errors
/// As [`near_check`], plus [`CheckError::BatchCount`] when the batch counts differ.
pub fn near_check_batched<T, G, A>(
    m: usize,
    n: usize,
    lda: usize,
    gold: &[G],
    actual: &[A],
    tolerance: f64,
) -> Result<(), CheckError>
where
    T: Scalar,
    G: AsRef<[T]>,
    A: AsRef<[T]>,
{
    compare_batched(m, n, lda, gold, actual, Policy::Near(tolerance))
}

fn magnitude<T: Scalar>(value: T) -> f64 {
    let (re, im) = value.decompose();
    re.hypot(im)
}

fn matrix_norm(norm: Norm, m: usize, n: usize, lda: usize, at: impl Fn(usize) -> f64) -> f64 {
    match norm {
        Norm::One => (0..n)
            .map(|col| (0..m).map(|row| at(row + col * lda)).sum::<f64>())
            .fold(0.0, f64::max),
        Norm::Infinity => (0..m)
            .map(|row| (0..n).map(|col| at(row + col * lda)).sum::<f64>())
            .fold(0.0, f64::max),
        Norm::Frobenius => (0..n)
            .flat_map(|col| (0..m).map(move |row| row + col * lda))
            .map(|idx| at(idx).powi(2))
            .sum::<f64>()
            .sqrt(),
    }
}

/// Relative error `||gold - actual|| / ||gold||` in the given norm.
/// When the gold matrix is zero the absolute error is returned.
///
/// # Errors
/// A shape error when a buffer cannot hold the matrix.
pub fn norm_check<T: Scalar>(
    norm: Norm,
    m: usize,
    n: usize,
    lda: usize,
    gold: &[T],
    actual: &[T],
) -> Result<f64, CheckError> {
    check_shape(m, n, lda, &[gold, actual])?;

    let diff = |idx: usize| {
        let (g_re, g_im) = gold[idx].decompose();
        let (a_re, a_im) = actual[idx].decompose();
        (g_re - a_re).hypot(g_im - a_im)
    };

    let error = matrix_norm(norm, m, n, lda, diff);
    let scale = matrix_norm(norm, m, n, lda, |idx| magnitude(gold[idx]));

    Ok(if scale == 0.0 { error } else { error / scale })
}

/// The largest [`norm_check`] error over every batch.
///
/// # Errors
/// As [`norm_check`], plus [`CheckError::BatchCount`] when the batch counts differ.
pub fn norm_check_batched<T, G, A>(
    norm: Norm,
    m: usize,
    n: usize,
    lda: usize,
    gold: &[G],
    actual: &[A],
) -> Result<f64, CheckError>
where
    T: Scalar,
    G: AsRef<[T]>,
    A: AsRef<[T]>,
{
    check_batch_count(gold.len(), actual.len())?;
    gold.iter()
        .zip(actual)
        .map(|(g, a)| norm_check(norm, m, n, lda, g.as_ref(), a.as_ref()))
        .try_fold(0.0, |max, batch| Ok(f64::max(max, batch?)))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use blasnum_sys::{Complex64, Half};

    use super::{
        near_check, near_check_batched, norm_check, norm_check_batched, unit_check,
        unit_check_batched, CheckError, Norm, Tolerance,
    };
    use crate::scalar::{compose, negate};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn unit_check_exact() {
        init_logger();
        let gold = [1.0f64, 2.0, 3.0, 4.0];
        assert_eq!(unit_check(2, 2, 2, &gold, &gold), Ok(()));

        let actual = [1.0f64, 2.0, 3.0, 4.5];
        assert_eq!(
            unit_check(2, 2, 2, &gold, &actual),
            Err(CheckError::Mismatch {
                batch: 0,
                row: 1,
                col: 1,
                expected: "4".to_owned(),
                actual: "4.5".to_owned(),
            })
        );
    }

    #[test]
    fn unit_check_skips_padding() {
        // lda 3 with 2 rows, the third entry of each column is never read
        let gold = [1.0f32, 2.0, 99.0, 3.0, 4.0];
        let actual = [1.0f32, 2.0, -7.0, 3.0, 4.0];
        assert_eq!(unit_check(2, 2, 3, &gold, &actual), Ok(()));
    }

    #[test]
    fn nan_matches_only_nan() {
        init_logger();
        let gold = [f64::NAN, 1.0];
        assert_eq!(unit_check(1, 2, 1, &gold, &[f64::NAN, 1.0]), Ok(()));
        assert!(unit_check(1, 2, 1, &gold, &[0.0, 1.0]).is_err());
        assert!(near_check(1, 2, 1, &[0.0, 1.0], &gold, 10.0).is_err());

        let h = [Half::from_bits(0x7C01)];
        assert_eq!(unit_check(1, 1, 1, &h, &[Half::NAN]), Ok(()));
    }

    #[test]
    fn near_check_complex() {
        init_logger();
        let gold = [Complex64::new(1.0, 2.0), Complex64::new(-3.0, 0.5)];
        let actual = [Complex64::new(1.0 + 1e-9, 2.0), Complex64::new(-3.0, 0.5 - 1e-9)];
        let tol = 2.0 * Complex64::SUM_ERROR_TOLERANCE;
        assert_eq!(near_check(1, 2, 1, &gold, &actual, tol), Ok(()));

        let far = [Complex64::new(1.0, 2.0), Complex64::new(-3.0, 0.6)];
        match near_check(1, 2, 1, &gold, &far, tol) {
            Err(CheckError::OutOfTolerance {
                col, expected, actual, ..
            }) => {
                assert_eq!(col, 1);
                assert_eq!(expected, "-3+0.5i");
                assert_eq!(actual, "-3+0.6i");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn batched() {
        init_logger();
        let gold = vec![vec![1.0f32, 2.0], vec![3.0, 4.0]];
        let mut actual = gold.clone();
        assert_eq!(unit_check_batched(1, 2, 1, &gold, &actual), Ok(()));

        actual[1][0] = negate(3.0);
        match unit_check_batched(1, 2, 1, &gold, &actual) {
            Err(CheckError::Mismatch { batch, col, .. }) => assert_eq!((batch, col), (1, 0)),
            other => panic!("unexpected result {other:?}"),
        }

        assert_eq!(
            near_check_batched(1, 2, 1, &gold, &actual[..1], 0.1),
            Err(CheckError::BatchCount {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn shape_errors() {
        let a = [0.0f64; 3];
        assert_eq!(
            unit_check(2, 2, 1, &a, &a),
            Err(CheckError::LeadingDimension { lda: 1, m: 2 })
        );
        assert_eq!(
            unit_check(2, 2, 2, &a, &a),
            Err(CheckError::ShortBuffer {
                len: 3,
                m: 2,
                n: 2,
                lda: 2
            })
        );
        assert_eq!(unit_check::<f64>(0, 5, 0, &[], &[]), Ok(()));
    }

    #[test]
    fn norms() {
        // gold = 1 3    actual = 1 3
        //        2 4             2 5
        let gold = [1.0f64, 2.0, 3.0, 4.0];
        let actual = [1.0f64, 2.0, 3.0, 5.0];

        assert_relative_eq!(
            norm_check(Norm::Frobenius, 2, 2, 2, &gold, &actual).unwrap(),
            1.0 / 30f64.sqrt()
        );
        assert_relative_eq!(
            norm_check(Norm::One, 2, 2, 2, &gold, &actual).unwrap(),
            1.0 / 7.0
        );
        assert_relative_eq!(
            norm_check(Norm::Infinity, 2, 2, 2, &gold, &actual).unwrap(),
            1.0 / 6.0
        );
        assert_eq!(norm_check(Norm::One, 2, 2, 2, &gold, &gold), Ok(0.0));

        // zero gold falls back to the absolute error
        let zero = [0.0f64; 2];
        assert_relative_eq!(
            norm_check(Norm::Frobenius, 1, 2, 1, &zero, &[3.0, 4.0]).unwrap(),
            5.0
        );
    }

    #[test]
    fn norm_batched_takes_the_max() {
        let gold = [[compose::<Complex64>(3.0, 4.0)], [compose::<Complex64>(1.0, 0.0)]];
        let actual = [[Complex64::new(3.0, 4.0)], [Complex64::new(1.5, 0.0)]];
        assert_relative_eq!(
            norm_check_batched(Norm::Frobenius, 1, 1, 1, &gold, &actual).unwrap(),
            0.5
        );
    }

    #[test]
    fn norm_from_char() {
        assert_eq!(Norm::try_from('F'), Ok(Norm::Frobenius));
        assert_eq!(Norm::try_from('1'), Ok(Norm::One));
        assert_eq!(Norm::try_from('i'), Ok(Norm::Infinity));
        assert_eq!(Norm::try_from('Z'), Err(CheckError::UnknownNorm('Z')));
    }
}
