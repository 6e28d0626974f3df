use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Unknown field index {0} (expected 1, 2 or 3)")]
    InvalidField(u8),
    #[error("Correlation functions differ in length ({acf} vs {vacf})")]
    LengthMismatch { acf: usize, vacf: usize },
}

/// Bookkeeping collected while reading a series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesMetadata {
    /// Number of `#` comment/header lines skipped.
    pub comment_lines: usize,
    /// 1-based line number of the first malformed data line, if reading stopped early.
    pub truncated_at: Option<usize>,
}

/// Defines the interface for reading a scalar time series from a text format.
pub trait SeriesFile {
    /// Format-specific read options (e.g. which column to extract).
    type Options;

    /// Reads samples from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the underlying reader fails.
    /// Malformed data lines are not errors: they end the series.
    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<(Vec<f64>, SeriesMetadata), SeriesError>;

    /// Reads samples from a file path.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        options: &Self::Options,
    ) -> Result<(Vec<f64>, SeriesMetadata), SeriesError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, options)
    }
}

/// Shared line loop: skips blank and `#` lines, extracts one sample per data line
/// with `extract`, and stops at the first line `extract` rejects.
pub(crate) fn read_samples<F>(
    reader: &mut impl BufRead,
    mut extract: F,
) -> Result<(Vec<f64>, SeriesMetadata), SeriesError>
where
    F: FnMut(&str) -> Option<f64>,
{
    let mut samples = Vec::new();
    let mut metadata = SeriesMetadata::default();

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;

        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with('#') {
            metadata.comment_lines += 1;
            continue;
        }

        match extract(&line) {
            Some(value) => samples.push(value),
            None => {
                tracing::debug!(
                    "Malformed record on line {}; series truncated at {} samples.",
                    line_num,
                    samples.len()
                );
                metadata.truncated_at = Some(line_num);
                break;
            }
        }
    }

    Ok((samples, metadata))
}
