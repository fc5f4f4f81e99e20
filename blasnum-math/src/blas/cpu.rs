use super::BLASContext;

#[cfg(feature = "blas-sys")]
#[allow(clippy::module_inception)]
mod blas_sys;

mod reference;

/// Pure rust reference kernels. Always available, covers every [`super::SPR`] type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reference;

impl BLASContext for Reference {}

/// Kernels from the linked system BLAS, selected through the provider features
#[cfg(feature = "blas-sys")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemBlas;

#[cfg(feature = "blas-sys")]
impl BLASContext for SystemBlas {}
