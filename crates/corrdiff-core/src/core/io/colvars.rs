use super::traits::{SeriesError, SeriesFile, SeriesMetadata, read_samples};
use phf::phf_map;
use std::io::BufRead;

/// Byte span of one value column in a colvars trajectory line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    pub offset: usize,
    pub width: usize,
}

impl FieldSpan {
    /// Slices the column out of `line`. Lines shorter than `offset + width` yield a
    /// shorter slice; lines that do not reach `offset` yield `None`.
    pub fn slice<'a>(&self, line: &'a str) -> Option<&'a str> {
        if self.offset > line.len() {
            return None;
        }
        let end = line.len().min(self.offset + self.width);
        line.get(self.offset..end)
    }
}

static FIELD_SPANS: phf::Map<u8, FieldSpan> = phf_map! {
    1u8 => FieldSpan { offset: 15, width: 23 },
    2u8 => FieldSpan { offset: 37, width: 23 },
    3u8 => FieldSpan { offset: 61, width: 23 },
};

pub fn field_span(field: u8) -> Option<FieldSpan> {
    FIELD_SPANS.get(&field).copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColvarsOptions {
    /// 1-based index of the collective variable column to extract.
    pub field: u8,
}

impl Default for ColvarsOptions {
    fn default() -> Self {
        Self { field: 1 }
    }
}

/// Fixed-width `colvars.traj` trajectory written by the NAMD colvars module.
pub struct ColvarsFile;

impl SeriesFile for ColvarsFile {
    type Options = ColvarsOptions;

    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<(Vec<f64>, SeriesMetadata), SeriesError> {
        let span = field_span(options.field).ok_or(SeriesError::InvalidField(options.field))?;
        read_samples(reader, |line| span.slice(line)?.trim().parse().ok())
    }
}
