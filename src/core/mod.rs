pub mod etl;
pub mod pipeline;
pub mod reader;
pub mod transform;
pub mod writer;

pub use crate::domain::model::{Row, Table, Value};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
