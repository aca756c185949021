use serde::{Deserialize, Serialize};

/// 單筆 record 的資料：任意 JSON 欄位，保留插入順序
pub type RecordData = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct InboundRecord {
    pub record_id: String,
    pub data: RecordData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMessage {
    pub message: String,
}

impl SkillMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundRecord {
    pub record_id: String,
    pub data: RecordData,
    pub errors: Vec<SkillMessage>,
    pub warnings: Vec<SkillMessage>,
}

impl OutboundRecord {
    pub fn success(record_id: String, data: RecordData, warnings: Vec<String>) -> Self {
        Self {
            record_id,
            data,
            errors: Vec::new(),
            warnings: warnings.into_iter().map(SkillMessage::new).collect(),
        }
    }

    pub fn failure(record_id: String, data: RecordData, message: String) -> Self {
        Self {
            record_id,
            data,
            errors: vec![SkillMessage::new(message)],
            warnings: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outbound wire envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundBatch {
    pub values: Vec<OutboundRecord>,
}

/// Successful result of one transform invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformOutput {
    pub data: RecordData,
    pub warnings: Vec<String>,
}

impl TransformOutput {
    pub fn new(data: RecordData) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}
