use crate::core::{reader, transform, writer};
use crate::core::{Pipeline, Storage, Table};
use crate::utils::error::Result;

/// Reads, transforms and writes comma-separated files through a [`Storage`].
pub struct CsvPipeline<S: Storage> {
    storage: S,
}

impl<S: Storage> CsvPipeline<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: Storage> Pipeline for CsvPipeline<S> {
    fn extract(&self, source_path: &str) -> Result<Table> {
        tracing::debug!("Reading source file: {}", source_path);
        let bytes = self.storage.read_file(source_path)?;
        tracing::debug!("Read {} bytes", bytes.len());
        reader::parse_table(&bytes)
    }

    fn transform(&self, data: &Table) -> Result<Table> {
        transform::transform(data)
    }

    fn load(&self, data: &Table, destination_path: &str) -> Result<bool> {
        let bytes = writer::serialize_table(data)?;
        tracing::debug!(
            "Writing {} bytes to destination: {}",
            bytes.len(),
            destination_path
        );
        self.storage.write_file(destination_path, &bytes)?;
        Ok(true)
    }
}
