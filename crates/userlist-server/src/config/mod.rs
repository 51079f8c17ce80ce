//! Server config loader (strict parsing).

pub mod schema;

use std::{fs, io::ErrorKind, path::Path};

use userlist_core::error::{Result, UserListError};

pub use schema::{ServerConfig, ServerSection};

/// Env var naming the config file; falls back to [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "USERLIST_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "userlist.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| UserListError::Io(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| UserListError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Like [`load_from_file`], but a missing file yields the defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            Ok(ServerConfig::default())
        }
        Err(e) => Err(UserListError::Io(format!(
            "read config failed ({}): {e}",
            path.display()
        ))),
    }
}

/// Path from `USERLIST_CONFIG`, or `userlist.yaml` in the working directory.
pub fn config_path_from_env() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned())
}
