#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::{is_unresolved_placeholder, DataConfig, ServerConfig, SkillsConfig};

use crate::core::SettingsProvider;
use std::collections::HashMap;

/// Settings lookup: the TOML `[settings]` table first, then process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSettings {
    overrides: HashMap<String, String>,
}

impl EnvSettings {
    pub fn new(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    pub fn from_config(config: &SkillsConfig) -> Self {
        Self::new(config.settings.clone())
    }
}

impl SettingsProvider for EnvSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.overrides
            .get(key)
            .filter(|value| !is_unresolved_placeholder(value))
            .cloned()
            .or_else(|| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let settings = EnvSettings::new(HashMap::from([(
            "PATH".to_string(),
            "from-config".to_string(),
        )]));
        assert_eq!(settings.get("PATH").as_deref(), Some("from-config"));
    }

    #[test]
    fn test_blank_and_placeholder_values_are_missing() {
        let settings = EnvSettings::new(HashMap::from([
            ("POWER_SKILLS_TEST_BLANK".to_string(), "  ".to_string()),
            (
                "POWER_SKILLS_TEST_PLACEHOLDER".to_string(),
                "${POWER_SKILLS_TEST_PLACEHOLDER}".to_string(),
            ),
        ]));
        assert_eq!(settings.get_non_empty("POWER_SKILLS_TEST_BLANK"), None);
        assert_eq!(settings.get("POWER_SKILLS_TEST_PLACEHOLDER"), None);
        assert_eq!(settings.get("POWER_SKILLS_TEST_NOT_THERE"), None);
    }
}
