use crate::domain::ports::{JournalEntry, TransactionJournal};
use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes purchase attempts as CSV rows.
///
/// The header comes from [`JournalEntry`]'s field names; options without a value
/// become empty cells.
pub struct JournalWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> JournalWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new().has_headers(true).from_writer(sink);
        Self { writer }
    }

    /// Flushes pending rows and hands back the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl JournalWriter<File> {
    /// Creates (or truncates) the journal file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> TransactionJournal for JournalWriter<W> {
    fn record(&mut self, entry: &JournalEntry) -> Result<()> {
        self.writer.serialize(entry)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
