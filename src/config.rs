use crate::error::{GaugeError, Result};
use crate::types::config::{FileConfig, GaugeConfig, ServerConfig};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "jellygauge.toml";

pub const ENV_URL: &str = "JELLYGAUGE_URL";
pub const ENV_TOKEN: &str = "JELLYGAUGE_TOKEN";
pub const ENV_USER_ID: &str = "JELLYGAUGE_USER_ID";

/// Loads configuration from the given file (or `jellygauge.toml` in the
/// working directory), then applies environment overrides. The file may be
/// absent entirely when the environment supplies the server settings.
pub fn load_config(path: Option<&Path>) -> Result<GaugeConfig> {
    let env = EnvOverrides::from_process_env();
    load_config_with_env(path, &env)
}

struct EnvOverrides {
    url: Option<String>,
    token: Option<String>,
    user_id: Option<String>,
}

impl EnvOverrides {
    fn from_process_env() -> Self {
        Self {
            url: std::env::var(ENV_URL).ok(),
            token: std::env::var(ENV_TOKEN).ok(),
            user_id: std::env::var(ENV_USER_ID).ok(),
        }
    }
}

fn load_config_with_env(path: Option<&Path>, env: &EnvOverrides) -> Result<GaugeConfig> {
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    let file_path = path.unwrap_or(default_path);

    let file = if file_path.exists() {
        read_file_config(file_path)?
    } else if path.is_some() {
        // An explicitly named config file must exist.
        return Err(GaugeError::ConfigNotFound(
            file_path.display().to_string(),
        ));
    } else {
        FileConfig::default()
    };

    let url = env
        .url
        .clone()
        .or(file.server.url)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| GaugeError::MissingSetting(format!("server.url (or {ENV_URL})")))?;
    let token = env
        .token
        .clone()
        .or(file.server.token)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| GaugeError::MissingSetting(format!("server.token (or {ENV_TOKEN})")))?;
    let user_id = env.user_id.clone().or(file.server.user_id);

    Ok(GaugeConfig {
        server: ServerConfig {
            url: url.trim_end_matches('/').to_string(),
            token,
            user_id,
        },
        limits: file.limits,
    })
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| GaugeError::ConfigParse(format!("{}: {}", path.display(), e)))
}
