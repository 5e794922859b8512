use crate::core::models::cloud::ParticleCloud;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Defines the interface for reading and writing particle coordinate formats.
///
/// Implementors handle format-specific parsing and serialization; the provided
/// path helpers open files and delegate to them.
pub trait ParticleFile {
    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads a particle cloud from `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if any record is malformed or the reader fails. No
    /// partially loaded cloud is ever returned.
    fn read_from(reader: impl Read) -> Result<ParticleCloud, Self::Error>;

    /// Writes `cloud` to `writer` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    fn write_to(cloud: &ParticleCloud, writer: impl Write) -> Result<(), Self::Error>;

    /// Reads a particle cloud from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<ParticleCloud, Self::Error> {
        let file = File::open(path)?;
        Self::read_from(file)
    }

    /// Writes `cloud` to the file at `path`, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(cloud: &ParticleCloud, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        Self::write_to(cloud, BufWriter::new(file))
    }
}
