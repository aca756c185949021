use crate::core::HttpFetcher;
use crate::utils::error::{Result, SkillError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;
        let parsed: Option<Value> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            let message = parsed
                .as_ref()
                .and_then(|v| v.get("message"))
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            return Err(SkillError::RemoteServiceError {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        match parsed {
            Some(value) => Ok(value),
            None => Ok(serde_json::from_str(&body)?),
        }
    }
}

/// 依路徑挑出集合。路徑以 `.` 分隔，`..` 表示遞迴往下搜尋，例如 `resourceSets..resources..point`。
/// 唯一的結果若是陣列則展開成元素。
pub fn select_collection(value: &Value, path: &str) -> Vec<Value> {
    let mut current: Vec<&Value> = vec![value];
    let mut recursive = false;

    for segment in path.split('.') {
        if segment.is_empty() {
            recursive = true;
            continue;
        }

        let mut next = Vec::new();
        for node in current {
            if recursive {
                collect_descendants(node, segment, &mut next);
            } else {
                collect_children(node, segment, &mut next);
            }
        }
        current = next;
        recursive = false;
    }

    match current.as_slice() {
        [Value::Array(items)] => items.clone(),
        matches => matches.iter().map(|v| (*v).clone()).collect(),
    }
}

fn collect_children<'a>(node: &'a Value, name: &str, out: &mut Vec<&'a Value>) {
    match node {
        Value::Object(map) => {
            if let Some(child) = map.get(name) {
                out.push(child);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_children(item, name, out);
            }
        }
        _ => {}
    }
}

fn collect_descendants<'a>(node: &'a Value, name: &str, out: &mut Vec<&'a Value>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                if key == name {
                    out.push(child);
                }
                collect_descendants(child, name, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_descendants(item, name, out);
            }
        }
        _ => {}
    }
}
