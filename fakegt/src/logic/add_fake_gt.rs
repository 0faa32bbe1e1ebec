use crate::error::FakeGtError;
use std::io::{BufRead, Write};

pub const DATA_COLUMNS: usize = 8;

#[cfg(windows)]
pub const LINE_TERMINATOR: &[u8] = b"\r\n";
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &[u8] = b"\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Comment,
    Header,
    Data,
}

impl RowKind {
    pub fn classify(first_field: &[u8]) -> RowKind {
        if first_field.starts_with(b"##") {
            RowKind::Comment
        } else if first_field.starts_with(b"#CHROM") {
            RowKind::Header
        } else {
            RowKind::Data
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformSummary {
    pub comment: u64,
    pub header: u64,
    pub data: u64,
}

impl TransformSummary {
    pub fn total(&self) -> u64 {
        self.comment + self.header + self.data
    }
}

/// Append a FORMAT column holding an unknown genotype to every row.
///
/// `##` rows are copied as they are, the `#CHROM` row gains `FORMAT` and
/// `sample_name`, and each data row must have exactly eight columns and gains
/// `GT` and `.`. Rows written before a malformed data row stay in `writer`.
///
/// Only data rows are column-checked. A `#CHROM` row that already carries
/// FORMAT and sample columns is extended again, and the run fails at the
/// first data row instead.
pub fn add_fake_gt<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    sample_name: &str,
) -> Result<TransformSummary, FakeGtError> {
    let mut summary = TransformSummary::default();
    let mut line = Vec::new();
    let mut line_number = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        line_number += 1;

        if line.ends_with(b"\r\n") {
            line.truncate(line.len() - 2);
        } else if line.ends_with(b"\n") {
            line.pop();
        }

        let first_field = line.split(|x| *x == b'\t').next().unwrap_or_default();
        let kind = RowKind::classify(first_field);
        if kind == RowKind::Data {
            let fields = line.split(|x| *x == b'\t').count();
            if fields != DATA_COLUMNS {
                return Err(FakeGtError::FormatError {
                    line: line_number,
                    fields,
                });
            }
        }

        writer.write_all(&line)?;
        match kind {
            RowKind::Comment => summary.comment += 1,
            RowKind::Header => {
                writer.write_all(b"\tFORMAT\t")?;
                writer.write_all(sample_name.as_bytes())?;
                summary.header += 1;
            }
            RowKind::Data => {
                writer.write_all(b"\tGT\t.")?;
                summary.data += 1;
            }
        }
        writer.write_all(LINE_TERMINATOR)?;
    }

    writer.flush()?;
    Ok(summary)
}
