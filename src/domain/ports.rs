use crate::domain::model::Table;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn source_path(&self) -> &str;
    fn destination_path(&self) -> &str;
}

pub trait Pipeline: Send + Sync {
    fn extract(&self, source_path: &str) -> Result<Table>;
    fn transform(&self, data: &Table) -> Result<Table>;
    fn load(&self, data: &Table, destination_path: &str) -> Result<bool>;
}
