//! Dimensionality reduction.
//!
//! - `traits/` - algorithm traits and option/result types
//! - `impl_generic/` - implementations written against [`RuntimeClient`](crate::runtime::RuntimeClient)
//! - `cpu/` - bindings for [`CpuClient`](crate::runtime::CpuClient)

mod cpu;
pub mod impl_generic;
pub mod traits;

pub use traits::pca::{EigenPair, PcaAlgorithms, PcaOptions, PcaResult};
