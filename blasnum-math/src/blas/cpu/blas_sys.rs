extern crate blas_src;
extern crate blas_sys;

use crate::blas::{Fill, SPR};

use super::SystemBlas;

macro_rules! impl_spr {
    ($float:ident =>
        spr: $spr:path,
    ) => {
        impl SPR<SystemBlas> for $float {
            unsafe fn spr(
                _ctx: SystemBlas,
                uplo: Fill,
                n: i32,
                alpha: Self,
                x: *const Self,
                incx: i32,
                ap: *mut Self,
            ) {
                $spr(&(uplo as i8), &n, &alpha, x, &incx, ap);
            }
        }
    };
}

impl_spr!(f32 =>
    spr: blas_sys::sspr_,
);

impl_spr!(f64 =>
    spr: blas_sys::dspr_,
);

#[cfg(test)]
mod tests {
    use crate::blas::{
        cpu::{Reference, SystemBlas},
        packed_len, spr, Fill,
    };

    #[test]
    fn agrees_with_reference() {
        let n = 17;
        let x: Vec<f64> = (0..2 * n).map(|i| f64::from(i % 7) - 3.0).collect();

        for uplo in [Fill::Upper, Fill::Lower] {
            for incx in [1, 2, -2] {
                let init: Vec<f64> = (0..packed_len(n)).map(|i| (i % 5) as f64).collect();
                let mut gold = init.clone();
                let mut sys = init;

                spr(Reference, uplo, n, 0.5, &x, incx, &mut gold).unwrap();
                spr(SystemBlas, uplo, n, 0.5, &x, incx, &mut sys).unwrap();
                assert_eq!(gold, sys);
            }
        }
    }
}
