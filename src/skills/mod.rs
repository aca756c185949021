// Reference skills. Each one is a RecordTransform plugged into the core engine.

pub mod acronym;
pub mod distinct;
pub mod file_extension;
pub mod geo_point;
pub mod stop_words;
pub mod tokenizer;

pub use acronym::{AcronymDictionary, LinkAcronyms, LinkAcronymsList};
pub use distinct::{Distinct, Thesaurus};
pub use file_extension::GetFileExtension;
pub use geo_point::GeoPointFromName;
pub use tokenizer::Tokenizer;

use crate::config::SkillsConfig;
use crate::core::engine::SkillEngine;
use crate::core::registry::SkillRegistry;
use crate::core::{HttpFetcher, RecordTransform, SettingsProvider};
use crate::utils::error::Result;
use std::sync::Arc;

/// 建立所有 skill。資料檔讀取失敗會讓啟動失敗；缺少的設定則留到請求時回報。
pub fn build_registry(
    config: &SkillsConfig,
    settings: &dyn SettingsProvider,
    fetcher: Arc<dyn HttpFetcher>,
) -> Result<SkillRegistry> {
    let acronyms = Arc::new(AcronymDictionary::from_file(config.data.acronyms_path())?);
    let thesaurus = Arc::new(Thesaurus::from_file(config.data.thesaurus_path())?);

    let transforms: Vec<Arc<dyn RecordTransform>> = vec![
        Arc::new(LinkAcronyms::new(acronyms.clone())),
        Arc::new(LinkAcronymsList::new(acronyms)),
        Arc::new(Tokenizer::new()),
        Arc::new(GetFileExtension::new()),
        Arc::new(Distinct::new(thesaurus)),
        Arc::new(GeoPointFromName::from_settings(fetcher, settings)),
    ];

    let engines = transforms
        .into_iter()
        .map(|transform| {
            if let Some(setting) = transform.missing_setting() {
                tracing::warn!(
                    "⚠️ {} - {} is not set; requests will be rejected until it is",
                    transform.name(),
                    setting
                );
            }
            SkillEngine::new(transform).with_max_concurrency(config.server.max_concurrency)
        })
        .collect();

    Ok(SkillRegistry::new(engines))
}
