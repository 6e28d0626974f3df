//! Reading scalar trajectories and writing correlation functions.
//!
//! Two input formats are supported through the [`traits::SeriesFile`] trait: the
//! fixed-width trajectory written by the NAMD colvars module ([`colvars`]) and a
//! plain one-value-per-line format ([`raw`]). A malformed data line ends the
//! series early instead of failing the read; the line number is kept in
//! [`traits::SeriesMetadata`].

pub mod acf;
pub mod colvars;
pub mod raw;
pub mod traits;
