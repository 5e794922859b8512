use super::traits::ParticleFile;
use crate::core::models::cloud::ParticleCloud;
use crate::core::models::position::Position;
use std::io::{self, Read, Write};
use thiserror::Error;
use tracing::debug;

const FIELDS_PER_RECORD: usize = 3;

#[derive(Debug, Error)]
pub enum XyzCsvError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("Expected 3 coordinates on line {line}, found {found}")]
    Arity { line: u64, found: usize },
    #[error("Non-finite coordinate on line {line}")]
    NonFinite { line: u64 },
    #[error("Failed to write position record: {0}")]
    Write(#[source] csv::Error),
}

/// Plain-text positions: one `x,y,z` triple in meters per line, no header.
///
/// Surrounding whitespace is trimmed, blank lines are ignored and lines starting
/// with `#` are treated as comments.
pub struct XyzCsvFile;

impl ParticleFile for XyzCsvFile {
    type Error = XyzCsvError;

    fn read_from(reader: impl Read) -> Result<ParticleCloud, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut positions = Vec::new();
        for result in csv_reader.records() {
            let record = result.map_err(|source| XyzCsvError::Csv {
                line: source.position().map_or(0, |p| p.line()),
                source,
            })?;
            let line = record.position().map_or(0, |p| p.line());

            if record.len() != FIELDS_PER_RECORD {
                return Err(XyzCsvError::Arity {
                    line,
                    found: record.len(),
                });
            }

            let (x, y, z): (f64, f64, f64) = record
                .deserialize(None)
                .map_err(|source| XyzCsvError::Csv { line, source })?;
            let position = Position::new(x, y, z);
            if !position.is_finite() {
                return Err(XyzCsvError::NonFinite { line });
            }
            positions.push(position);
        }

        debug!(count = positions.len(), "Loaded particle positions.");
        Ok(ParticleCloud::new(positions))
    }

    fn write_to(cloud: &ParticleCloud, writer: impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        for position in cloud {
            csv_writer
                .serialize((position.x(), position.y(), position.z()))
                .map_err(XyzCsvError::Write)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
