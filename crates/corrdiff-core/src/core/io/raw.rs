use super::traits::{SeriesError, SeriesFile, SeriesMetadata, read_samples};
use std::io::BufRead;

/// One sample per line; only the first whitespace-separated token is read.
pub struct RawFile;

impl SeriesFile for RawFile {
    type Options = ();

    fn read_from(
        reader: &mut impl BufRead,
        _options: &Self::Options,
    ) -> Result<(Vec<f64>, SeriesMetadata), SeriesError> {
        read_samples(reader, |line| line.split_whitespace().next()?.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_values_and_skips_comments() {
        let text = "# position\n0.5\n-1.25 trailing\n\n3e-2\n";
        let (series, metadata) = RawFile::read_from(&mut Cursor::new(text), &()).unwrap();
        assert_eq!(series, vec![0.5, -1.25, 0.03]);
        assert_eq!(metadata.comment_lines, 1);
        assert_eq!(metadata.truncated_at, None);
    }

    #[test]
    fn malformed_line_ends_series() {
        let text = "1.0\n2.0\nabc\n4.0\n";
        let (series, metadata) = RawFile::read_from(&mut Cursor::new(text), &()).unwrap();
        assert_eq!(series, vec![1.0, 2.0]);
        assert_eq!(metadata.truncated_at, Some(3));
    }

    #[test]
    fn reads_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.dat");
        std::fs::write(&path, "1\n2\n3\n").unwrap();
        let (series, _) = RawFile::read_from_path(&path, &()).unwrap();
        assert_eq!(series, vec![1.0, 2.0, 3.0]);
    }
}
