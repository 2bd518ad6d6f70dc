use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/rfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RfetchConfig {
    /// Seconds to wait for the connection to come up before giving up.
    pub connect_timeout_secs: u64,
    /// Overall transfer deadline in seconds.
    pub request_timeout_secs: u64,
    /// Maximum redirects libcurl may follow before failing the transfer.
    pub max_redirections: u32,
    /// Optional User-Agent header (None = libcurl default).
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for RfetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            request_timeout_secs: 3600,
            max_redirections: 10,
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RfetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
