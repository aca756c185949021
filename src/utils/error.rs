use crate::domain::model::RecordData;
use thiserror::Error;

/// 批次層級的協定錯誤：整個請求被拒絕，不會處理任何 record。
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed request envelope: {reason}")]
    MalformedEnvelope { reason: String },

    #[error("{setting} is missing")]
    MissingConfiguration { setting: String },

    #[error("Failed to encode the response batch: {0}")]
    EncodingFault(#[source] serde_json::Error),
}

impl ProtocolError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedEnvelope {
            reason: reason.into(),
        }
    }

    /// HTTP status the host should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MalformedEnvelope { .. } | Self::MissingConfiguration { .. } => 400,
            Self::EncodingFault(_) => 500,
        }
    }

    /// 給呼叫端看的訊息，前綴 skill 名稱方便排查
    pub fn message(&self, skill_name: &str) -> String {
        match self {
            Self::MalformedEnvelope { .. } => {
                format!("{} - Invalid request record array.", skill_name)
            }
            Self::MissingConfiguration { setting } => format!(
                "{} - {} is missing. Make sure to set it in the Environment Variables.",
                skill_name, setting
            ),
            Self::EncodingFault(_) => {
                format!("{} - Failed to encode the response batch.", skill_name)
            }
        }
    }
}

/// Failure signal returned by a transform for a single record.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct TransformError {
    pub message: String,
    /// Data the transform committed before failing. Empty unless a skill opts in.
    pub partial_data: RecordData,
}

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            partial_data: RecordData::new(),
        }
    }

    pub fn with_partial_data(mut self, data: RecordData) -> Self {
        self.partial_data = data;
        self
    }

    pub fn missing_input(field: &str, expected: &str) -> Self {
        Self::new(format!(
            "Input data is missing a `{}` {}.",
            field, expected
        ))
    }
}

impl From<SkillError> for TransformError {
    fn from(err: SkillError) -> Self {
        Self::new(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum SkillError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("The remote service {url} responded with a {status} error code: {message}")]
    RemoteServiceError {
        url: String,
        status: u16,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data file error in {path}: {message}")]
    DataFileError { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, SkillError>;
