pub mod assembler;
pub mod dispatcher;
pub mod engine;
pub mod parser;
pub mod registry;

pub use crate::domain::model::{InboundRecord, OutboundRecord, RecordData, TransformOutput};
pub use crate::domain::ports::{HttpFetcher, RecordTransform, SettingsProvider};
pub use crate::utils::error::{ProtocolError, Result, TransformError};
