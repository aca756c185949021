use crate::config::SkillsConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "power-skills")]
#[command(about = "Custom skills host for document-enrichment pipelines")]
pub struct CliConfig {
    #[arg(long, env = "SKILLS_CONFIG", help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "SKILLS_LISTEN_ADDR")]
    pub listen_addr: Option<String>,

    #[arg(long, env = "SKILLS_DATA_DIR", help = "Directory holding acronyms.json and thesaurus.json")]
    pub data_dir: Option<String>,

    #[arg(long, env = "SKILLS_MAX_CONCURRENCY", help = "Records processed concurrently per batch")]
    pub max_concurrency: Option<usize>,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入 TOML（若有指定），再套用命令列覆寫
    pub fn load(&self) -> Result<SkillsConfig> {
        let mut config = match &self.config {
            Some(path) => SkillsConfig::from_file(path)?,
            None => SkillsConfig::default(),
        };

        if let Some(addr) = &self.listen_addr {
            config.server.listen_addr = addr.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.data.data_dir = dir.clone();
        }
        if let Some(concurrency) = self.max_concurrency {
            config.server.max_concurrency = concurrency;
        }

        Ok(config)
    }
}
