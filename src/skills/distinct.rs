use crate::core::{RecordData, RecordTransform, TransformError, TransformOutput};
use crate::utils::error::{Result, SkillError};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Maps normalized word forms to the canonical (first) form of their lemma.
#[derive(Debug, Clone, Default)]
pub struct Thesaurus {
    synonyms: HashMap<String, String>,
}

impl Thesaurus {
    pub fn new<L, W>(lemmas: L) -> Result<Self>
    where
        L: IntoIterator<Item = W>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        let mut synonyms = HashMap::new();
        for lemma in lemmas {
            let forms: Vec<String> = lemma.into_iter().map(Into::into).collect();
            let Some(canonical) = forms.first().cloned() else {
                continue;
            };
            for form in &forms {
                let normalized = Self::normalize(form);
                if let Some(existing) = synonyms.get(&normalized) {
                    return Err(SkillError::ConfigError {
                        message: format!(
                            "Thesaurus parsing error: the form '{}' of the lemma '{}' looks the same, once normalized, as one of the forms of '{}'. Please disambiguate or merge lemmas.",
                            form, canonical, existing
                        ),
                    });
                }
                synonyms.insert(normalized, canonical.clone());
            }
        }
        Ok(Self { synonyms })
    }

    /// 從 JSON 檔載入 (`[["canonical", "synonym", ...], ...]`)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let lemmas: Vec<Vec<String>> =
            serde_json::from_str(&content).map_err(|e| SkillError::DataFileError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        let thesaurus = Self::new(lemmas)?;
        tracing::info!(
            "Loaded thesaurus with {} forms from {}",
            thesaurus.synonyms.len(),
            path.display()
        );
        Ok(thesaurus)
    }

    /// NFC 正規化後轉小寫，去掉 Unicode 標點 (P*) 與分隔符號 (Z*)
    pub fn normalize(word: &str) -> String {
        word.nfc()
            .collect::<String>()
            .to_lowercase()
            .chars()
            .filter(|&c| !is_punctuation_or_separator(c))
            .collect()
    }

    /// 去除重複字詞；同義詞以 thesaurus 的標準形式表示，其餘保留第一次出現的寫法
    pub fn dedupe<'a, I>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen_keys = HashSet::new();
        let mut seen_output = HashSet::new();
        let mut out = Vec::new();

        for word in words {
            let normalized = Self::normalize(word);
            let (key, representative) = match self.synonyms.get(&normalized) {
                Some(canonical) => (canonical.clone(), canonical.clone()),
                None => (normalized, word.to_string()),
            };
            if seen_keys.insert(key) && seen_output.insert(representative.clone()) {
                out.push(representative);
            }
        }
        out
    }
}

fn is_punctuation_or_separator(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        ConnectorPunctuation
            | DashPunctuation
            | OpenPunctuation
            | ClosePunctuation
            | InitialPunctuation
            | FinalPunctuation
            | OtherPunctuation
            | SpaceSeparator
            | LineSeparator
            | ParagraphSeparator
    )
}

pub struct Distinct {
    thesaurus: Arc<Thesaurus>,
}

impl Distinct {
    pub const NAME: &'static str = "distinct";

    pub fn new(thesaurus: Arc<Thesaurus>) -> Self {
        Self { thesaurus }
    }
}

#[async_trait]
impl RecordTransform for Distinct {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn transform(
        &self,
        _record_id: &str,
        data: &RecordData,
    ) -> std::result::Result<TransformOutput, TransformError> {
        let words = data.get("words").and_then(Value::as_array).ok_or_else(|| {
            TransformError::missing_input("words", "array of words to de-duplicate")
        })?;

        let distinct = self
            .thesaurus
            .dedupe(words.iter().filter_map(Value::as_str));

        let mut out = RecordData::new();
        out.insert("distinct".to_string(), json!(distinct));
        Ok(TransformOutput::new(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thesaurus() -> Arc<Thesaurus> {
        Arc::new(
            Thesaurus::new(vec![
                vec!["MSFT", "Microsoft", "Microsoft Corp", "Microsoft Corporation"],
                vec!["USA", "United States", "United States of America"],
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_normalize_strips_case_punctuation_and_spaces() {
        assert_eq!(Thesaurus::normalize("Microsoft Corp."), "microsoftcorp");
        assert_eq!(Thesaurus::normalize("U.S.A"), "usa");
    }

    #[test]
    fn test_symbols_are_not_punctuation() {
        let words = Thesaurus::default().dedupe(["C", "C++", "C$", "a|b"]);
        assert_eq!(words, vec!["C", "C++", "C$", "a|b"]);
    }

    #[test]
    fn test_unicode_punctuation_and_separators_are_stripped() {
        let words = Thesaurus::default().dedupe([
            "Microsoft's",
            "Microsoft\u{2019}s",
            "\u{ab}Microsoft\u{2013}s\u{bb}",
            "new\u{a0}york",
            "new york",
        ]);
        assert_eq!(words, vec!["Microsoft's", "new\u{a0}york"]);
    }

    #[test]
    fn test_composed_and_decomposed_forms_match() {
        let words = Thesaurus::default().dedupe(["caf\u{e9}", "cafe\u{301}"]);
        assert_eq!(words, vec!["caf\u{e9}"]);
    }

    #[test]
    fn test_dedupe_without_synonyms_keeps_first_occurrence() {
        let words = Thesaurus::default().dedupe(["Hello", "hello", "HELLO!", "world"]);
        assert_eq!(words, vec!["Hello", "world"]);
    }

    #[test]
    fn test_dedupe_uses_canonical_forms() {
        let words = thesaurus().dedupe([
            "Microsoft",
            "united states",
            "MSFT",
            "Microsoft Corporation",
            "Redmond",
            "U.S.A.",
        ]);
        assert_eq!(words, vec!["MSFT", "USA", "Redmond"]);
    }

    #[test]
    fn test_conflicting_lemmas_are_rejected() {
        let err = Thesaurus::new(vec![vec!["USA", "U.S."], vec!["US", "United States"]])
            .unwrap_err();
        assert!(matches!(err, SkillError::ConfigError { .. }));
        assert!(err.to_string().contains("'US'"));
    }

    #[tokio::test]
    async fn test_transform_requires_words() {
        let skill = Distinct::new(thesaurus());
        let data = json!({"words": "not an array"}).as_object().cloned().unwrap();

        let err = skill.transform("1", &data).await.unwrap_err();

        assert_eq!(
            err.message,
            "Input data is missing a `words` array of words to de-duplicate."
        );
    }

    #[tokio::test]
    async fn test_transform_outputs_distinct() {
        let skill = Distinct::new(thesaurus());
        let data = json!({"words": ["Microsoft", "MSFT", "Seattle"]})
            .as_object()
            .cloned()
            .unwrap();

        let out = skill.transform("1", &data).await.unwrap();

        assert_eq!(out.data.get("distinct"), Some(&json!(["MSFT", "Seattle"])));
    }
}
