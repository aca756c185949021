pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod skills;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{EnvSettings, SkillsConfig};

pub use crate::core::engine::{ReplyBody, SkillEngine, SkillReply};
pub use crate::core::registry::SkillRegistry;
pub use utils::error::{ProtocolError, Result, SkillError, TransformError};
