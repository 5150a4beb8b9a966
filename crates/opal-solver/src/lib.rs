//! Shared solver abstractions for opal optimization backends.
//!
//! This crate carries the types a backend and the model core agree on
//! without depending on the model itself:
//!
//! - [`SolverConfig`]: configuration options a backend applies before solving
//! - [`SolverStatus`]: common status values across solvers
//! - [`SolverError`]: construction, translation, and solve errors
//!
//! The backend adapter trait lives in `opal-core::solver`, next to the model
//! types it consumes.

mod config;
mod error;
mod status;

pub use config::SolverConfig;
pub use error::SolverError;
pub use status::SolverStatus;
