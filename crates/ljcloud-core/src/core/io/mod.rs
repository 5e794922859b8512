//! Reading and writing particle coordinate files.
//!
//! [`traits::ParticleFile`] is the common interface; [`xyz::XyzCsvFile`] implements
//! the plain comma-separated `x,y,z` format, one particle per line. Loading is always
//! completed, or fails, before any energy evaluation starts: a malformed record
//! aborts the whole load instead of being skipped.

pub mod traits;
pub mod xyz;
