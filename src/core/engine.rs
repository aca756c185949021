use crate::core::{assembler, dispatcher, parser};
use crate::domain::ports::RecordTransform;
use crate::utils::error::ProtocolError;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum ReplyBody {
    Json(Vec<u8>),
    Text(String),
}

/// What the host sends back: an HTTP status and a raw body.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillReply {
    pub status: u16,
    pub body: ReplyBody,
}

impl SkillReply {
    fn batch(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            body: ReplyBody::Json(body),
        }
    }

    fn rejected(skill_name: &str, err: &ProtocolError) -> Self {
        Self {
            status: err.status_code(),
            body: ReplyBody::Text(err.message(skill_name)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    pub fn body_bytes(&self) -> &[u8] {
        match &self.body {
            ReplyBody::Json(bytes) => bytes,
            ReplyBody::Text(text) => text.as_bytes(),
        }
    }
}

/// Runs one skill over request bodies: precondition, parse, dispatch, assemble.
#[derive(Clone)]
pub struct SkillEngine {
    transform: Arc<dyn RecordTransform>,
    max_concurrency: usize,
}

impl SkillEngine {
    pub fn new(transform: Arc<dyn RecordTransform>) -> Self {
        Self {
            transform,
            max_concurrency: 1,
        }
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn name(&self) -> &str {
        self.transform.name()
    }

    pub async fn process(&self, body: &[u8]) -> SkillReply {
        let skill_name = self.transform.name();
        tracing::info!("{} - processing request ({} bytes)", skill_name, body.len());

        match self.run(body).await {
            Ok(bytes) => SkillReply::batch(bytes),
            Err(err) => {
                tracing::error!("❌ {} - request rejected: {}", skill_name, err);
                SkillReply::rejected(skill_name, &err)
            }
        }
    }

    async fn run(&self, body: &[u8]) -> Result<Vec<u8>, ProtocolError> {
        // 缺少設定時直接短路，不解析也不處理任何 record
        if let Some(setting) = self.transform.missing_setting() {
            return Err(ProtocolError::MissingConfiguration {
                setting: setting.to_string(),
            });
        }

        let skill_name = self.transform.name();
        let records = parser::parse(body)?;
        let total = records.len();

        let outbound = dispatcher::dispatch_all(
            skill_name,
            records,
            self.transform.as_ref(),
            self.max_concurrency,
        )
        .await;

        let failed = outbound.iter().filter(|r| !r.is_success()).count();
        tracing::info!(
            "{} - processed {} records ({} failed)",
            skill_name,
            total,
            failed
        );

        assembler::assemble(outbound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RecordData, TransformOutput};
    use crate::utils::error::TransformError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Upper {
        api_key: Option<String>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RecordTransform for Upper {
        fn name(&self) -> &str {
            "upper"
        }

        fn missing_setting(&self) -> Option<&str> {
            self.api_key.is_none().then_some("UPPER_API_KEY")
        }

        async fn transform(
            &self,
            _record_id: &str,
            data: &RecordData,
        ) -> Result<TransformOutput, TransformError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let text = data
                .get("text")
                .and_then(|v| v.as_str())
                .ok_or_else(|| TransformError::missing_input("text", "string"))?;
            let mut out = RecordData::new();
            out.insert("text".to_string(), json!(text.to_uppercase()));
            Ok(TransformOutput::new(out))
        }
    }

    fn engine(api_key: Option<&str>) -> (SkillEngine, Arc<Upper>) {
        let transform = Arc::new(Upper {
            api_key: api_key.map(str::to_string),
            calls: AtomicUsize::new(0),
        });
        (SkillEngine::new(transform.clone()), transform)
    }

    #[tokio::test]
    async fn test_process_returns_batch() {
        let (engine, _) = engine(Some("k"));
        let body = json!({"values": [
            {"recordId": "1", "data": {"text": "abc"}},
            {"recordId": "2", "data": {}}
        ]});

        let reply = engine.process(body.to_string().as_bytes()).await;

        assert!(reply.is_success());
        let value: serde_json::Value = serde_json::from_slice(reply.body_bytes()).unwrap();
        assert_eq!(value["values"][0]["data"], json!({"text": "ABC"}));
        assert_eq!(value["values"][1]["data"], json!({}));
        assert_eq!(
            value["values"][1]["errors"][0]["message"],
            json!("upper - Error processing the request record : Input data is missing a `text` string.")
        );
    }

    #[tokio::test]
    async fn test_process_malformed_envelope_is_batch_level() {
        let (engine, transform) = engine(Some("k"));

        let reply = engine.process(br#"{"value": []}"#).await;

        assert_eq!(reply.status, 400);
        assert_eq!(
            reply.body,
            ReplyBody::Text("upper - Invalid request record array.".to_string())
        );
        assert_eq!(transform.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_process_missing_setting_short_circuits() {
        let (engine, transform) = engine(None);

        // 即使 body 格式錯誤，也先回報缺少的設定
        let reply = engine.process(b"not json").await;

        assert_eq!(reply.status, 400);
        assert_eq!(
            reply.body,
            ReplyBody::Text(
                "upper - UPPER_API_KEY is missing. Make sure to set it in the Environment Variables."
                    .to_string()
            )
        );
        assert_eq!(transform.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_process_is_idempotent() {
        let (engine, _) = engine(Some("k"));
        let body = br#"{"values":[{"recordId":"a","data":{"text":"x","extra":[1,2]}},{"recordId":"b","data":{}}]}"#;

        let first = engine.process(body).await;
        let second = engine.process(body).await;

        assert_eq!(first.body_bytes(), second.body_bytes());
    }
}
