//! # Core Module
//!
//! Stateless building blocks of the correlation analysis.
//!
//! - **Numerics** ([`numerics`]) - autocorrelation, integration, Laplace transforms,
//!   bounded minimization, regression and polynomial fitting
//! - **Preprocessing** ([`series`]) - mean removal, finite-difference velocities, variances
//! - **Units** ([`units`]) - conversions between internal (Å, fs) and reporting units
//! - **File I/O** ([`io`]) - trajectory readers and the correlation function writer
//!
//! Internal units are Ångström for distance and femtoseconds for time, so
//! velocities are in Å/fs and diffusion coefficients in Å²/fs.

pub mod io;
pub mod numerics;
pub mod series;
pub mod units;
