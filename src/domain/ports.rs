use crate::domain::model::{RecordData, TransformOutput};
use crate::utils::error::{Result, TransformError};
use async_trait::async_trait;

/// A skill's per-record transform. Implementations must not keep state
/// between invocations or touch records other than the one they are given.
#[async_trait]
pub trait RecordTransform: Send + Sync {
    /// Display name, used as route and error-message prefix.
    fn name(&self) -> &str;

    /// Name of a required setting that is absent, checked before any record is parsed.
    fn missing_setting(&self) -> Option<&str> {
        None
    }

    async fn transform(
        &self,
        record_id: &str,
        data: &RecordData,
    ) -> std::result::Result<TransformOutput, TransformError>;
}

pub trait SettingsProvider: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// 空字串視同未設定
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.trim().is_empty())
    }
}

/// Outbound HTTP capability handed to skills that call upstream services.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<serde_json::Value>;
}
