//! Discrete-time linear state-space simulation.
//!
//! Provides:
//! - `StateSpaceModel` trait over the A, B, C, D matrices and initial state
//! - `System`, a validated, immutable model loaded once per run
//! - `simulate`, the fixed-step recurrence producing time-major trajectories

pub mod error;
pub mod model;
pub mod sim;
pub mod system;

pub use error::{SimError, SimResult};
pub use model::StateSpaceModel;
pub use sim::{SimProgress, Trajectories, simulate, simulate_with_progress};
pub use system::System;
