//! lss-core: dense matrix foundation for the lss simulator.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - matrix (immutable dense matrix value type)
//! - accumulator (column-growing trajectory buffer)
//! - error (shared error types)

pub mod accumulator;
pub mod error;
pub mod matrix;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use accumulator::Accumulator;
pub use error::{CoreError, CoreResult, Dims};
pub use matrix::Matrix;
pub use numeric::*;
