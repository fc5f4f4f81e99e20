use std::time::Instant;

use blasnum_math::{
    blas::{cpu::Reference, packed_len, spr, spr_batched, spr_bytes, spr_gflop_count, Fill, Flops},
    check::{near_check_batched, norm_check_batched, unit_check_batched, Norm, Tolerance},
    compose,
    sys::{Complex32, Complex64},
    to_display_string, Scalar,
};

const N: i32 = 100;
const INCX: i32 = 1;
const BATCH_COUNT: usize = 4;
const ITERS: usize = 10;

fn run<T: Scalar + Tolerance + Flops + blasnum_math::blas::SPR<Reference>>(
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let alpha = compose::<T>(0.6, 0.0);
    let size_a = packed_len(N);

    let x: Vec<Vec<T>> = (0..BATCH_COUNT)
        .map(|b| {
            (0..N)
                .map(|i| compose(f64::from((i + b as i32) % 10 + 1), f64::from(i % 3)))
                .collect()
        })
        .collect();
    let init: Vec<Vec<T>> = (0..BATCH_COUNT)
        .map(|b| {
            (0..size_a)
                .map(|i| compose(((i + b) % 7) as f64, 1.0))
                .collect()
        })
        .collect();

    // one call per batch gives the gold result
    let mut gold = init.clone();
    for (x, a) in x.iter().zip(gold.iter_mut()) {
        spr(Reference, Fill::Upper, N, alpha, x, INCX, a)?;
    }

    let mut result = init.clone();
    spr_batched(Reference, Fill::Upper, N, alpha, &x, INCX, &mut result)?;

    if T::IS_COMPLEX {
        let tol = f64::from(N) * T::SUM_ERROR_TOLERANCE;
        near_check_batched(1, size_a, 1, &gold, &result, tol)?;
    } else {
        unit_check_batched(1, size_a, 1, &gold, &result)?;
    }
    let norm_error = norm_check_batched(Norm::Frobenius, 1, size_a, 1, &gold, &result)?;

    let start = Instant::now();
    for _ in 0..ITERS {
        spr_batched(Reference, Fill::Upper, N, alpha, &x, INCX, &mut result)?;
    }
    let seconds = start.elapsed().as_secs_f64() / ITERS as f64;

    let gflops = BATCH_COUNT as f64 * spr_gflop_count::<T>(N) / seconds;
    let bandwidth = BATCH_COUNT as f64 * spr_bytes::<T>(N) / seconds / 1e9;

    println!(
        "{name},{N},{},{INCX},{BATCH_COUNT},{gflops},{bandwidth},{norm_error}",
        to_display_string(&alpha)
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("type,N,alpha,incx,batch_count,Gflops,GB/s,norm_error");
    run::<f32>("f32")?;
    run::<f64>("f64")?;
    run::<Complex32>("c32")?;
    run::<Complex64>("c64")?;
    Ok(())
}
