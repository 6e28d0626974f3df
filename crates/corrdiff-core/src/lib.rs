//! # corrdiff Core Library
//!
//! Estimates the diffusion coefficient of a harmonically restrained degree of freedom
//! from a molecular dynamics trajectory, following the time-correlation-function
//! analysis of Hummer (New J. Phys. 2005, 7, 34).
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same three-layer split used throughout the project:
//!
//! - **[`core`]: The Foundation.** Stateless numerics (autocorrelation, trapezoidal
//!   integration, numeric Laplace transforms, bounded minimization, regression and
//!   polynomial fitting), series preprocessing, unit conversions and file I/O.
//!
//! - **[`engine`]: The Logic Core.** Analysis configuration, error types, progress
//!   reporting, the immutable frequency-domain context and the individual pipeline
//!   tasks (minimum search, frequency sweep).
//!
//! - **[`workflows`]: The Public API.** Runs a complete analysis of one trajectory
//!   and returns a [`engine::state::DiffusionReport`] holding every stage output.

pub mod core;
pub mod engine;
pub mod workflows;
