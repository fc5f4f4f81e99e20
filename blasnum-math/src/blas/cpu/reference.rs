use num_complex::{Complex32, Complex64};
use num_traits::Zero;

use crate::blas::{Fill, SPR};

use super::Reference;

macro_rules! impl_spr {
    ($($ty:ty),*) => {
        $(
            impl SPR<Reference> for $ty {
                #[allow(clippy::cast_sign_loss)]
                unsafe fn spr(
                    _ctx: Reference,
                    uplo: Fill,
                    n: i32,
                    alpha: Self,
                    x: *const Self,
                    incx: i32,
                    ap: *mut Self,
                ) {
                    if n <= 0 || alpha.is_zero() {
                        return;
                    }
                    let n = n as usize;
                    let incx = incx as isize;

                    // a negative stride starts at the far end of x
                    let kx = if incx < 0 { (1 - n as isize) * incx } else { 0 };
                    let xi = |i: usize| *x.offset(kx + i as isize * incx);

                    let mut kk = 0;
                    for j in 0..n {
                        let xj = xi(j);
                        let (rows, len) = match uplo {
                            Fill::Lower => (j..n, n - j),
                            _ => (0..j + 1, j + 1),
                        };

                        if !xj.is_zero() {
                            let temp = alpha * xj;
                            for (k, i) in (kk..).zip(rows) {
                                let a = ap.add(k);
                                *a = *a + xi(i) * temp;
                            }
                        }
                        kk += len;
                    }
                }
            }
        )*
    };
}

impl_spr!(f32, f64, Complex32, Complex64);

#[cfg(test)]
mod tests {
    use num_complex::{Complex32, Complex64};

    use crate::blas::{cpu::Reference, spr, Fill, SPR};

    fn has_reference_kernel<T: SPR<Reference>>() {}

    #[test]
    fn covers_the_blas_float_types() {
        has_reference_kernel::<f32>();
        has_reference_kernel::<f64>();
        has_reference_kernel::<Complex32>();
        has_reference_kernel::<Complex64>();
    }

    #[test]
    fn large_values_stay_finite() {
        // 70000^2 * 2 overflows i32, but is routine for floats
        let mut ap = [0.0f32];
        spr(Reference, Fill::Upper, 1, 2.0, &[70000.0], 1, &mut ap).unwrap();
        assert_eq!(ap, [9.8e9]);

        let mut ap = [Complex64::new(0.0, 0.0)];
        let x = [Complex64::new(70000.0, 0.0)];
        spr(Reference, Fill::Lower, 1, Complex64::new(2.0, 0.0), &x, 1, &mut ap).unwrap();
        assert_eq!(ap, [Complex64::new(9.8e9, 0.0)]);
    }
}
