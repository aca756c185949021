use crate::core::{RecordData, RecordTransform, TransformError, TransformOutput};
use async_trait::async_trait;
use serde_json::{json, Value};

#[derive(Debug, Clone, Default)]
pub struct GetFileExtension;

impl GetFileExtension {
    pub const NAME: &'static str = "get-file-extension";

    pub fn new() -> Self {
        Self
    }

    /// 回傳 (副檔名含點, 不含副檔名的檔名)。路徑分隔符 `/` 與 `\` 都會處理。
    pub fn split(document_name: &str) -> (String, String) {
        let file = document_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(document_name);

        match file.rfind('.') {
            Some(dot) if dot + 1 < file.len() => {
                (file[dot..].to_string(), file[..dot].to_string())
            }
            Some(dot) => (String::new(), file[..dot].to_string()),
            None => (String::new(), file.to_string()),
        }
    }
}

#[async_trait]
impl RecordTransform for GetFileExtension {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn transform(
        &self,
        _record_id: &str,
        data: &RecordData,
    ) -> Result<TransformOutput, TransformError> {
        let document_name = match data.get("documentName") {
            Some(Value::String(name)) => name.as_str(),
            Some(Value::Null) => "",
            Some(_) => {
                return Err(TransformError::new(
                    "`documentName` must be a string.",
                ))
            }
            None => return Err(TransformError::missing_input("documentName", "string")),
        };

        let (extension, file_name) = if document_name.trim().is_empty() {
            (String::new(), String::new())
        } else {
            Self::split(document_name)
        };

        let mut out = RecordData::new();
        out.insert("extension".to_string(), json!(extension));
        out.insert("fileName".to_string(), json!(file_name));
        Ok(TransformOutput::new(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(name: &str) -> (String, String) {
        GetFileExtension::split(name)
    }

    #[test]
    fn test_split_common_names() {
        assert_eq!(split("report.pdf"), (".pdf".to_string(), "report".to_string()));
        assert_eq!(split("archive.tar.gz"), (".gz".to_string(), "archive.tar".to_string()));
        assert_eq!(
            split("https://acct.blob.core.windows.net/docs/q3/summary.docx"),
            (".docx".to_string(), "summary".to_string())
        );
        assert_eq!(split(r"C:\docs\notes.txt"), (".txt".to_string(), "notes".to_string()));
    }

    #[test]
    fn test_split_edge_cases() {
        assert_eq!(split("README"), (String::new(), "README".to_string()));
        assert_eq!(split("trailing."), (String::new(), "trailing".to_string()));
        assert_eq!(split(".gitignore"), (".gitignore".to_string(), String::new()));
    }

    #[tokio::test]
    async fn test_blank_or_null_name_yields_empty_strings() {
        let skill = GetFileExtension::new();
        for data in [json!({"documentName": "  "}), json!({"documentName": null})] {
            let data = data.as_object().cloned().unwrap();
            let out = skill.transform("1", &data).await.unwrap();
            assert_eq!(
                Value::Object(out.data),
                json!({"extension": "", "fileName": ""})
            );
        }
    }

    #[tokio::test]
    async fn test_missing_name_is_error() {
        let err = GetFileExtension::new()
            .transform("1", &RecordData::new())
            .await
            .unwrap_err();
        assert_eq!(err.message, "Input data is missing a `documentName` string.");
    }
}
