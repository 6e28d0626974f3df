//! # Engine Module
//!
//! Stateful orchestration pieces of the diffusion analysis.
//!
//! - **Configuration** ([`config`]) - analysis parameters and their validating builder
//! - **Frequency-domain context** ([`context`]) - the immutable bundle of VACF and
//!   variances from which the characteristic function and `D(s)` are evaluated
//! - **Stage outputs** ([`state`]) - immutable results of each pipeline stage
//! - **Progress Monitoring** ([`progress`]) - callback-based progress reporting
//! - **Error Handling** ([`error`]) - engine error type with stage context
//!
//! The pipeline tasks themselves (minimum search, frequency sweep) live in the
//! crate-private `tasks` module and are driven by [`crate::workflows::analyze`].

pub mod config;
pub mod context;
pub mod error;
pub mod progress;
pub mod state;
pub(crate) mod tasks;
