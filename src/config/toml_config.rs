use crate::utils::error::{Result, SkillError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    /// Skill settings (API keys, endpoints). Looked up before environment variables.
    #[serde(default)]
    pub settings: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_listen_addr")]
    pub listen_addr: String,
    #[serde(default = "ServerConfig::default_max_concurrency")]
    pub max_concurrency: usize,
    #[serde(default = "ServerConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl ServerConfig {
    fn default_listen_addr() -> String {
        "0.0.0.0:7071".to_string()
    }

    fn default_max_concurrency() -> usize {
        1
    }

    fn default_request_timeout() -> u64 {
        30
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: Self::default_listen_addr(),
            max_concurrency: Self::default_max_concurrency(),
            request_timeout_seconds: Self::default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "DataConfig::default_data_dir")]
    pub data_dir: String,
    pub acronyms_path: Option<String>,
    pub thesaurus_path: Option<String>,
}

impl DataConfig {
    fn default_data_dir() -> String {
        "data".to_string()
    }

    pub fn acronyms_path(&self) -> PathBuf {
        self.resolve(self.acronyms_path.as_deref(), "acronyms.json")
    }

    pub fn thesaurus_path(&self) -> PathBuf {
        self.resolve(self.thesaurus_path.as_deref(), "thesaurus.json")
    }

    fn resolve(&self, explicit: Option<&str>, file_name: &str) -> PathBuf {
        match explicit {
            Some(path) => PathBuf::from(path),
            None => Path::new(&self.data_dir).join(file_name),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir(),
            acronyms_path: None,
            thesaurus_path: None,
        }
    }
}

impl SkillsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SkillError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SkillError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// `[settings]` 中實際有值的設定；空白或未替換的佔位符視同未設定
    pub fn configured_setting(&self, key: &str) -> Option<&str> {
        self.settings
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty() && !is_unresolved_placeholder(value))
    }

    /// 替換環境變數 (例如 ${AZUREMAPS_APP_KEY})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SkillError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

/// `${VAR}` left untouched because the variable was not set.
pub fn is_unresolved_placeholder(value: &str) -> bool {
    value.starts_with("${") && value.ends_with('}')
}

impl Validate for SkillsConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_non_empty_string("server.listen_addr", &self.server.listen_addr)?;
        validate_range("server.max_concurrency", self.server.max_concurrency, 1, 64)?;
        validate_range(
            "server.request_timeout_seconds",
            self.server.request_timeout_seconds,
            1,
            300,
        )?;

        validate_path("data.data_dir", &self.data.data_dir)?;
        if let Some(path) = &self.data.acronyms_path {
            validate_path("data.acronyms_path", path)?;
        }
        if let Some(path) = &self.data.thesaurus_path {
            validate_path("data.thesaurus_path", path)?;
        }

        if let Some(endpoint) = self.configured_setting(crate::skills::geo_point::ENDPOINT_SETTING) {
            validate_url(crate::skills::geo_point::ENDPOINT_SETTING, endpoint)?;
        }

        tracing::info!("✅ Configuration validation passed");
        Ok(())
    }
}
