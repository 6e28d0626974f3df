use super::traits::SeriesError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `lag acf vacf` rows, space separated, one per lag.
///
/// # Errors
///
/// Returns [`SeriesError::LengthMismatch`] if the two functions differ in length, or
/// any I/O error from the writer.
pub fn write_correlations<W: Write>(
    writer: W,
    acf: &[f64],
    vacf: &[f64],
) -> Result<(), SeriesError> {
    if acf.len() != vacf.len() {
        return Err(SeriesError::LengthMismatch {
            acf: acf.len(),
            vacf: vacf.len(),
        });
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_writer(writer);

    for (lag, (a, v)) in acf.iter().zip(vacf).enumerate() {
        csv_writer.write_record([lag.to_string(), a.to_string(), v.to_string()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_correlations_to_path<P: AsRef<Path>>(
    path: P,
    acf: &[f64],
    vacf: &[f64],
) -> Result<(), SeriesError> {
    let file = File::create(path)?;
    write_correlations(BufWriter::new(file), acf, vacf)
}
