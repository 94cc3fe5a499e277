//! Configuration File
//!
//! `--config` で指定するJSON設定ファイル（すべてのキーは任意）

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bucket: Option<String>,
    pub project_id: Option<String>,
    pub credentials: Option<String>,
    pub cache_control: Option<String>,
    pub compact: Option<bool>,

    /// Seconds to wait for stdin to reach EOF; unset waits forever
    pub stdin_timeout_secs: Option<u64>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let path = shellexpand::tilde(path).to_string();
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }
}
