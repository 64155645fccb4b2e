use crate::domain::model::{CleanRecord, DirtyRecord};
use crate::utils::error::Result;
use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::path::Path;

/// Appends records to the clean and (optional) dirty CSVs one at a time, so
/// memory stays bounded for large corpora. Headers are written at creation,
/// so an empty corpus still produces headed files. When no dirty path is
/// configured, dirty records are counted and dropped.
pub struct CsvSink {
    clean: Writer<File>,
    dirty: Option<Writer<File>>,
    dropped_dirty: usize,
}

impl CsvSink {
    pub fn create(clean_path: &str, dirty_path: Option<&str>) -> Result<Self> {
        let clean = open_writer(clean_path, &["source", "target"])?;
        let dirty = dirty_path
            .map(|path| open_writer(path, &["source", "target", "reason"]))
            .transpose()?;

        Ok(Self {
            clean,
            dirty,
            dropped_dirty: 0,
        })
    }

    pub fn write_clean(&mut self, record: &CleanRecord) -> Result<()> {
        self.clean.serialize(record)?;
        Ok(())
    }

    pub fn write_dirty(&mut self, record: &DirtyRecord) -> Result<()> {
        match &mut self.dirty {
            Some(writer) => writer.serialize(record)?,
            None => self.dropped_dirty += 1,
        }
        Ok(())
    }

    pub fn dropped_dirty(&self) -> usize {
        self.dropped_dirty
    }

    pub fn finish(mut self) -> Result<()> {
        self.clean.flush()?;
        if let Some(writer) = &mut self.dirty {
            writer.flush()?;
        }
        Ok(())
    }
}

fn open_writer(path: &str, header: &[&str]) -> Result<Writer<File>> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // The header is written explicitly; serde-derived headers only appear
    // once a first record is serialized, which would leave empty outputs
    // headerless.
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(header)?;
    Ok(writer)
}
