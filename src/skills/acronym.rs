use crate::core::{RecordData, RecordTransform, TransformError, TransformOutput};
use crate::utils::error::{Result, SkillError};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

/// Case-insensitive acronym → description lookup.
#[derive(Debug, Clone, Default)]
pub struct AcronymDictionary {
    entries: HashMap<String, String>,
}

impl AcronymDictionary {
    /// 不分大小寫後重複的縮寫會被拒絕
    pub fn from_map<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = HashMap::new();
        for (key, description) in entries {
            let key = key.as_ref();
            if map.insert(key.to_uppercase(), description.into()).is_some() {
                return Err(SkillError::ConfigError {
                    message: format!(
                        "Duplicate acronym '{}': keys are compared case-insensitively",
                        key
                    ),
                });
            }
        }
        Ok(Self { entries: map })
    }

    /// 從 JSON 檔載入 (`{"ML": "Machine Learning", ...}`)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let entries: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|e| SkillError::DataFileError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        let dictionary = Self::from_map(entries).map_err(|e| SkillError::DataFileError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::info!("Loaded {} acronyms from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    /// 只有全大寫的字才算縮寫
    pub fn lookup(&self, word: &str) -> Option<&str> {
        if !word.chars().all(char::is_uppercase) {
            return None;
        }
        self.entries.get(&word.to_uppercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct LinkAcronyms {
    dictionary: Arc<AcronymDictionary>,
}

impl LinkAcronyms {
    pub const NAME: &'static str = "link-acronyms";

    pub fn new(dictionary: Arc<AcronymDictionary>) -> Self {
        Self { dictionary }
    }
}

#[async_trait]
impl RecordTransform for LinkAcronyms {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn transform(
        &self,
        _record_id: &str,
        data: &RecordData,
    ) -> std::result::Result<TransformOutput, TransformError> {
        let word = data
            .get("word")
            .and_then(Value::as_str)
            .ok_or_else(|| TransformError::missing_input("word", "string"))?;

        let mut out = RecordData::new();
        if let Some(description) = self.dictionary.lookup(word) {
            out.insert("value".to_string(), json!(word));
            out.insert("description".to_string(), json!(description));
        }
        Ok(TransformOutput::new(out))
    }
}

pub struct LinkAcronymsList {
    dictionary: Arc<AcronymDictionary>,
}

impl LinkAcronymsList {
    pub const NAME: &'static str = "link-acronyms-list";

    pub fn new(dictionary: Arc<AcronymDictionary>) -> Self {
        Self { dictionary }
    }
}

#[async_trait]
impl RecordTransform for LinkAcronymsList {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn transform(
        &self,
        _record_id: &str,
        data: &RecordData,
    ) -> std::result::Result<TransformOutput, TransformError> {
        let words = data
            .get("words")
            .and_then(Value::as_array)
            .ok_or_else(|| TransformError::missing_input("words", "array of words"))?;

        let mut seen = HashSet::new();
        let mut acronyms = Vec::new();
        for word in words.iter().filter_map(Value::as_str) {
            if !seen.insert(word) {
                continue;
            }
            if let Some(description) = self.dictionary.lookup(word) {
                acronyms.push(json!({ "value": word, "description": description }));
            }
        }

        let mut out = RecordData::new();
        out.insert("acronyms".to_string(), Value::Array(acronyms));
        Ok(TransformOutput::new(out))
    }
}
