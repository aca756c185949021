use crate::domain::model::InboundRecord;
use crate::utils::error::ProtocolError;
use serde_json::Value;
use std::collections::HashSet;

/// 解析請求 body 為有序的 inbound records。任何一筆格式錯誤都會讓整批失敗。
pub fn parse(payload: &[u8]) -> Result<Vec<InboundRecord>, ProtocolError> {
    if payload.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(ProtocolError::malformed("request body is empty"));
    }

    let root: Value = serde_json::from_slice(payload)
        .map_err(|e| ProtocolError::malformed(format!("invalid JSON: {}", e)))?;

    let Value::Object(mut envelope) = root else {
        return Err(ProtocolError::malformed("request body is not a JSON object"));
    };

    let values = match envelope.remove("values") {
        Some(Value::Array(values)) => values,
        Some(_) => return Err(ProtocolError::malformed("`values` is not an array")),
        None => return Err(ProtocolError::malformed("`values` is missing")),
    };

    let mut seen = HashSet::with_capacity(values.len());
    let mut records = Vec::with_capacity(values.len());
    for (index, element) in values.into_iter().enumerate() {
        let record = parse_record(index, element)?;
        if !seen.insert(record.record_id.clone()) {
            tracing::warn!(
                "Duplicate recordId '{}' at position {}; echoing it as-is",
                record.record_id,
                index
            );
        }
        records.push(record);
    }

    tracing::debug!("Parsed batch with {} records", records.len());
    Ok(records)
}

fn parse_record(index: usize, element: Value) -> Result<InboundRecord, ProtocolError> {
    let Value::Object(mut fields) = element else {
        return Err(ProtocolError::malformed(format!(
            "element {} is not an object",
            index
        )));
    };

    let record_id = match fields.remove("recordId") {
        Some(Value::String(id)) if !id.is_empty() => id,
        Some(Value::String(_)) => {
            return Err(ProtocolError::malformed(format!(
                "element {} has an empty recordId",
                index
            )))
        }
        Some(_) => {
            return Err(ProtocolError::malformed(format!(
                "element {} has a non-string recordId",
                index
            )))
        }
        None => {
            return Err(ProtocolError::malformed(format!(
                "element {} lacks recordId",
                index
            )))
        }
    };

    let data = match fields.remove("data") {
        Some(Value::Object(data)) => data,
        Some(_) => {
            return Err(ProtocolError::malformed(format!(
                "record '{}' has non-object data",
                record_id
            )))
        }
        None => {
            return Err(ProtocolError::malformed(format!(
                "record '{}' lacks data",
                record_id
            )))
        }
    };

    Ok(InboundRecord { record_id, data })
}
