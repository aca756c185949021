use power_skills::adapters::ReqwestFetcher;
use power_skills::skills::build_registry;
use power_skills::utils::validation::Validate;
use power_skills::{EnvSettings, SkillError, SkillsConfig};
use serde_json::{json, Value};
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn write_data_files(dir: &TempDir) {
    fs::write(
        dir.path().join("acronyms.json"),
        r#"{"ml": "Machine Learning", "NLP": "Natural Language Processing"}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("thesaurus.json"),
        r#"[["MSFT", "Microsoft", "Microsoft Corp"], ["ML", "Machine Learning"]]"#,
    )
    .unwrap();
}

fn config_for(dir: &TempDir, extra: &str) -> SkillsConfig {
    let config_path = dir.path().join("skills.toml");
    fs::write(
        &config_path,
        format!(
            r#"
[server]
listen_addr = "127.0.0.1:0"
max_concurrency = 2

[data]
data_dir = "{}"

{}
"#,
            dir.path().display().to_string().replace('\\', "/"),
            extra
        ),
    )
    .unwrap();
    SkillsConfig::from_file(&config_path).unwrap()
}

fn fetcher() -> Arc<ReqwestFetcher> {
    Arc::new(ReqwestFetcher::new(Duration::from_secs(1)).unwrap())
}

#[tokio::test]
async fn test_registry_built_from_config_and_data_files() {
    let dir = TempDir::new().unwrap();
    write_data_files(&dir);
    let config = config_for(&dir, "");
    config.validate().unwrap();

    let settings = EnvSettings::from_config(&config);
    let registry = build_registry(&config, &settings, fetcher()).unwrap();

    assert_eq!(
        registry.names().collect::<Vec<_>>(),
        vec![
            "distinct",
            "geo-point-from-name",
            "get-file-extension",
            "link-acronyms",
            "link-acronyms-list",
            "tokenizer"
        ]
    );

    let reply = registry
        .get("link-acronyms-list")
        .unwrap()
        .process(br#"{"values":[{"recordId":"1","data":{"words":["NLP","and","ML","NLP"]}}]}"#)
        .await;
    assert_eq!(reply.status, 200);
    let value: Value = serde_json::from_slice(reply.body_bytes()).unwrap();
    assert_eq!(
        value["values"][0]["data"]["acronyms"],
        json!([
            {"value": "NLP", "description": "Natural Language Processing"},
            {"value": "ML", "description": "Machine Learning"}
        ])
    );

    let reply = registry
        .get("distinct")
        .unwrap()
        .process(
            br#"{"values":[{"recordId":"1","data":{"words":["Microsoft","MSFT","machine learning","other","Other"]}}]}"#,
        )
        .await;
    let value: Value = serde_json::from_slice(reply.body_bytes()).unwrap();
    assert_eq!(
        value["values"][0]["data"]["distinct"],
        json!(["MSFT", "ML", "other"])
    );
}

#[tokio::test]
async fn test_geo_key_from_settings_section_clears_missing_setting() {
    let dir = TempDir::new().unwrap();
    write_data_files(&dir);
    let config = config_for(
        &dir,
        r#"
[settings]
AZUREMAPS_APP_KEY = "from-toml"
AZUREMAPS_ENDPOINT = "http://127.0.0.1:9/Locations"
"#,
    );
    config.validate().unwrap();

    let settings = EnvSettings::from_config(&config);
    let registry = build_registry(&config, &settings, fetcher()).unwrap();

    let reply = registry
        .get("geo-point-from-name")
        .unwrap()
        .process(br#"{"values":[{"recordId":"1","data":{}}]}"#)
        .await;

    // 金鑰已設定，錯誤只會落在單筆記錄上
    assert_eq!(reply.status, 200);
}

#[test]
fn test_missing_data_file_fails_registry() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, "");
    let settings = EnvSettings::from_config(&config);

    let result = build_registry(&config, &settings, fetcher());

    assert!(matches!(result, Err(SkillError::IoError(_))));
}

#[test]
fn test_conflicting_thesaurus_is_config_error() {
    let dir = TempDir::new().unwrap();
    write_data_files(&dir);
    fs::write(
        dir.path().join("thesaurus.json"),
        r#"[["US", "United States"], ["U.S.", "Uncle Sam"]]"#,
    )
    .unwrap();
    let config = config_for(&dir, "");
    let settings = EnvSettings::from_config(&config);

    let result = build_registry(&config, &settings, fetcher());

    assert!(matches!(result, Err(SkillError::ConfigError { .. })));
}

#[test]
fn test_invalid_endpoint_setting_fails_validation() {
    let dir = TempDir::new().unwrap();
    let config = config_for(
        &dir,
        r#"
[settings]
AZUREMAPS_ENDPOINT = "not a url"
"#,
    );

    assert!(config.validate().is_err());
}
