use log::{debug, trace};
use num_complex::Complex;
use thiserror::Error;

pub mod cpu;

/// Which triangle of a symmetric matrix is stored
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    Upper = b'U',
    Lower = b'L',
    Full = b'F',
}

impl TryFrom<char> for Fill {
    type Error = BlasError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'U' | 'u' => Ok(Self::Upper),
            'L' | 'l' => Ok(Self::Lower),
            'F' | 'f' => Ok(Self::Full),
            _ => Err(BlasError::InvalidValue),
        }
    }
}

/// Argument errors reported by the checked BLAS entry points
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BlasError {
    #[error("invalid size argument")]
    InvalidSize,
    #[error("invalid value argument")]
    InvalidValue,
}

/// A context needed for running BLAS operations
pub trait BLASContext: Clone {}

/// A type that can be used in a packed symmetric rank-1 update
pub trait SPR<C: BLASContext>: Sized + Copy {
    /// `A := alpha * x * x^T + A`, with `A` a packed triangle in column major order.
    ///
    /// # Safety
    /// `x` must be valid for `n` reads at stride `incx`, `ap` for `n * (n + 1) / 2`
    /// reads and writes. `uplo` must not be [`Fill::Full`]. This may be a call across
    /// an FFI barrier.
    #[allow(clippy::too_many_arguments)]
    unsafe fn spr(
        ctx: C,
        uplo: Fill,
        n: i32,
        alpha: Self,
        x: *const Self,
        incx: i32,
        ap: *mut Self,
    );
}

/// Number of elements in a packed `n x n` triangle
#[allow(clippy::cast_sign_loss)]
pub fn packed_len(n: i32) -> usize {
    let n = n.max(0) as usize;
    n * (n + 1) / 2
}

/// Number of elements `x` must hold for `n` entries at stride `incx`
#[allow(clippy::cast_sign_loss)]
fn strided_len(n: i32, incx: i32) -> usize {
    if n <= 0 {
        return 0;
    }
    1 + (n as usize - 1) * incx.unsigned_abs() as usize
}

fn check_args(uplo: Fill, n: i32, incx: i32) -> Result<bool, BlasError> {
    if uplo == Fill::Full {
        return Err(BlasError::InvalidValue);
    }
    if n < 0 || incx == 0 {
        return Err(BlasError::InvalidSize);
    }
    Ok(n == 0)
}

fn check_buffers<T>(n: i32, x: &[T], incx: i32, ap: &[T]) -> Result<(), BlasError> {
    if x.len() < strided_len(n, incx) || ap.len() < packed_len(n) {
        return Err(BlasError::InvalidSize);
    }
    Ok(())
}

/// Checked packed symmetric rank-1 update, `A := alpha * x * x^T + A`.
///
/// ```
/// use blasnum_math::blas::{cpu::Reference, spr, Fill};
///
/// // upper triangle of the 2x2 zero matrix
/// let mut ap = [0.0f64; 3];
/// spr(Reference, Fill::Upper, 2, 2.0, &[1.0, 3.0], 1, &mut ap).unwrap();
/// assert_eq!(ap, [2.0, 6.0, 18.0]);
/// ```
///
/// # Errors
/// [`BlasError::InvalidValue`] for [`Fill::Full`], [`BlasError::InvalidSize`] for a
/// negative `n`, a zero `incx` or buffers too short for `n`.
pub fn spr<C: BLASContext, T: SPR<C>>(
    ctx: C,
    uplo: Fill,
    n: i32,
    alpha: T,
    x: &[T],
    incx: i32,
    ap: &mut [T],
) -> Result<(), BlasError> {
    if check_args(uplo, n, incx)? {
        debug!("spr: quick return for n = 0");
        return Ok(());
    }
    check_buffers(n, x, incx, ap)?;

    unsafe { T::spr(ctx, uplo, n, alpha, x.as_ptr(), incx, ap.as_mut_ptr()) };
    Ok(())
}

/// [`spr`] applied to every `(x[i], ap[i])` pair of a batch.
///
/// # Errors
/// As [`spr`], plus [`BlasError::InvalidSize`] when `x` and `ap` hold a different
/// number of batches. Nothing is written unless every batch passes validation.
pub fn spr_batched<C, T, X, A>(
    ctx: C,
    uplo: Fill,
    n: i32,
    alpha: T,
    x: &[X],
    incx: i32,
    ap: &mut [A],
) -> Result<(), BlasError>
where
    C: BLASContext,
    T: SPR<C>,
    X: AsRef<[T]>,
    A: AsMut<[T]>,
{
    if check_args(uplo, n, incx)? || (x.is_empty() && ap.is_empty()) {
        debug!("spr_batched: quick return (n = {n}, batch_count = {})", x.len());
        return Ok(());
    }
    if x.len() != ap.len() {
        return Err(BlasError::InvalidSize);
    }
    for (x, ap) in x.iter().zip(ap.iter_mut()) {
        check_buffers(n, x.as_ref(), incx, ap.as_mut())?;
    }

    for (i, (x, ap)) in x.iter().zip(ap.iter_mut()).enumerate() {
        trace!("spr_batched: batch {i}");
        let x = x.as_ref();
        let ap = ap.as_mut();
        unsafe { T::spr(ctx.clone(), uplo, n, alpha, x.as_ptr(), incx, ap.as_mut_ptr()) };
    }
    Ok(())
}

/// Floating point operation costs of a representation
pub trait Flops {
    const MUL: f64;
    const ADD: f64;
}

impl Flops for f32 {
    const MUL: f64 = 1.0;
    const ADD: f64 = 1.0;
}

impl Flops for f64 {
    const MUL: f64 = 1.0;
    const ADD: f64 = 1.0;
}

impl<T: Flops> Flops for Complex<T> {
    const MUL: f64 = 6.0;
    const ADD: f64 = 2.0;
}

/// Giga floating point operations in one `spr` of order `n`:
/// a scaling of `x[j]` per column and a multiply-add per stored element
#[allow(clippy::cast_precision_loss)]
pub fn spr_gflop_count<T: Flops>(n: i32) -> f64 {
    let n = f64::from(n.max(0));
    (T::MUL * n + (T::MUL + T::ADD) * n * (n + 1.0) / 2.0) / 1e9
}

/// Bytes moved by one `spr` of order `n`: the packed triangle is read and written once
pub fn spr_bytes<T>(n: i32) -> f64 {
    let n = f64::from(n.max(0));
    n * (n + 1.0) * std::mem::size_of::<T>() as f64
}
