use crate::domain::model::{OutboundBatch, OutboundRecord};
use crate::utils::error::ProtocolError;

/// 將 outbound records 包在 `values` 底下編碼，順序不變、不去重、不丟棄。
pub fn assemble(outbound: Vec<OutboundRecord>) -> Result<Vec<u8>, ProtocolError> {
    let batch = OutboundBatch { values: outbound };
    serde_json::to_vec(&batch).map_err(ProtocolError::EncodingFault)
}
