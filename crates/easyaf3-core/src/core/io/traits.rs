use crate::core::models::job::AfJobConfig;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing job-configuration documents.
///
/// Implementors handle one on-disk encoding; the path-based helpers are shared.
pub trait JobFile {
    /// The error type for I/O and decoding failures.
    type Error: Error + From<io::Error>;

    /// Reads and validates a job from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be decoded or the decoded document
    /// does not describe a valid job.
    fn read_from(reader: &mut impl BufRead) -> Result<AfJobConfig, Self::Error>;

    /// Writes a job to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn write_to(job: &AfJobConfig, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a job from a file path.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<AfJobConfig, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a job to a file path, creating or truncating the file.
    fn write_to_path<P: AsRef<Path>>(job: &AfJobConfig, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(job, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
