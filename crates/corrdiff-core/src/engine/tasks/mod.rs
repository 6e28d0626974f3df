pub mod minimum;
pub mod sweep;
