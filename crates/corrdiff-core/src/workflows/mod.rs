//! # Workflows Module
//!
//! High-level entry points that run a complete diffusion analysis.
//!
//! - **Analysis Workflow** ([`analyze`]) - preprocessing, correlation functions, the
//!   direct integral estimate, the characteristic-function minimum and the frequency
//!   sweep with its extrapolation to `s -> 0`.
//!
//! Workflows take an already loaded series so that callers decide how trajectories are
//! read (see [`crate::core::io`]); progress is reported through
//! [`crate::engine::progress::ProgressReporter`].

pub mod analyze;
