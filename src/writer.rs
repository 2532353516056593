use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::record::{CsvRow, OwnedCsvRow, Record, QUOTES_HEADERS};

fn csv_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .has_headers(false)
        .delimiter(b',')
        .terminator(csv::Terminator::CRLF)
        .double_quote(true);
    builder
}

/// Writes the header row then one row per record, in the given order.
///
/// The target file is truncated. A failure midway may leave a partial file.
pub fn write_records<P: AsRef<Path>>(records: &[Record], path: P) -> Result<()> {
    let wtr = csv_builder().from_path(path)?;
    write_to(records, wtr)
}

pub fn write_to<W: Write>(records: &[Record], mut wtr: csv::Writer<W>) -> Result<()> {
    wtr.write_record(QUOTES_HEADERS.iter())?;
    for record in records {
        wtr.serialize(CsvRow::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reads an exported file back.
///
/// Tags are split on `", "`, so a tag that contains this separator comes back
/// as several tags. A row with a blank text or author is an error.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    rdr.deserialize::<OwnedCsvRow>()
        .enumerate()
        .map(|(index, row)| row?.into_record(index))
        .collect()
}

/// Human readable listing of every collected quote
pub fn list_records<W: Write>(mut w: W, records: &[Record]) -> Result<()> {
    for (i, r) in records.iter().enumerate() {
        writeln!(w, "Quote {} (Page {}):", i + 1, r.page())?;
        writeln!(w, "Text: {}", r.text())?;
        writeln!(w, "Author: {}", r.author())?;
        writeln!(w, "Tags: {}", r.joined_tags())?;
        writeln!(w, "{}", "-".repeat(60))?;
    }
    Ok(())
}
