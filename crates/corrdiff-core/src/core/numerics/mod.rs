//! Numerical primitives used by the diffusion analysis.
//!
//! Every routine here is a pure function of its arguments: no routine keeps
//! state between calls, so independent analyses can share them freely.

pub mod correlation;
pub mod integration;
pub mod laplace;
pub mod minimize;
pub mod polyfit;
pub mod regression;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumericError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Normal-equations matrix is singular")]
    SingularMatrix,

    #[error("Minimization failed: {0}")]
    Minimization(String),
}
