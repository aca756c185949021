use crate::core::{RecordData, RecordTransform, TransformError, TransformOutput};
use crate::skills::stop_words;
use async_trait::async_trait;
use serde_json::{json, Value};
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

const DEFAULT_LANGUAGE: &str = "en";

/// Splits text into lower-cased words, dropping punctuation, digits and stop words.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub const NAME: &'static str = "tokenizer";

    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(text: &str, language_code: &str) -> Vec<String> {
        let stop_words = stop_words::for_language(language_code);

        let normalized: String = text
            .nfc()
            .collect::<String>()
            .to_lowercase()
            .chars()
            .filter_map(|c| {
                if c.is_whitespace() {
                    Some(' ')
                } else if c.is_alphabetic() || is_combining_mark(c) {
                    Some(c)
                } else {
                    None
                }
            })
            .collect();

        normalized
            .split(' ')
            .filter(|word| !word.is_empty() && !stop_words.contains(word))
            .map(str::to_string)
            .collect()
    }
}

// 沒有預組字形的附加符號也要保留
fn is_combining_mark(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark | GeneralCategory::EnclosingMark
    )
}

#[async_trait]
impl RecordTransform for Tokenizer {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn transform(
        &self,
        _record_id: &str,
        data: &RecordData,
    ) -> Result<TransformOutput, TransformError> {
        let text = data
            .get("text")
            .and_then(Value::as_str)
            .ok_or_else(|| TransformError::missing_input("text", "string"))?;
        let language_code = data
            .get("languageCode")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_LANGUAGE);

        let words = Self::tokenize(text, language_code);

        let mut out = RecordData::new();
        out.insert("words".to_string(), json!(words));
        Ok(TransformOutput::new(out))
    }
}
