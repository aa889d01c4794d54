use std::collections::HashMap;
use std::fs;
use std::env;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use local_ip_address::local_ip;
use crate::config;
use crate::error::ClientError;

pub(crate) const DEFAULT_CONTEXT: &str = "default";

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct Contexts {
    pub(crate) contexts: HashMap<String, Config>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) current: bool,
    #[serde(skip_deserializing)]
    pub(crate) name: String,
    pub(crate) host: String,
    #[serde(default)]
    pub(crate) api: config::api::Api,
}

impl Config {
    pub(crate) fn get_api_url(&self) -> String {
        format!("{}://{}:{}", self.api.scheme, self.host, self.api.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            current: true,
            name: DEFAULT_CONTEXT.to_string(),
            host: local_ip()
                .map(|ip| ip.to_string())
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            api: config::api::Api::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct AuthConfig {
    pub(crate) token: String
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct AuthToken {
    token: String,
}

pub(crate) fn get_config_dir() -> PathBuf {
    match env::var_os("PLATFORM_CONFIG_DIR") {
        Some(variable) => PathBuf::from(variable),
        None => {
            let home = env::var_os("HOME").unwrap_or_default();
            PathBuf::from(home).join(".config").join("platform")
        }
    }
}

pub(crate) fn read_contexts(config_dir: &Path) -> Result<Option<Contexts>, ClientError> {
    let file = config_dir.join("config.toml");

    if !file.is_file() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&file)?;
    let mut contexts: Contexts = toml::from_str(&contents)?;

    for (name, config) in contexts.contexts.iter_mut() {
        config.name = name.clone();
    }

    Ok(Some(contexts))
}

pub(crate) fn load_config(context_current: &str) -> Result<Config, ClientError> {
    load_config_from(&get_config_dir(), context_current)
}

/// Pick the context named `context_current`. Without a name, pick the one
/// flagged `current`, else the built-in defaults. A name that matches no
/// context is an error, except `default`.
pub(crate) fn load_config_from(config_dir: &Path, context_current: &str) -> Result<Config, ClientError> {
    debug!("load config file from {}", config_dir.display());

    let contexts = match read_contexts(config_dir) {
        Ok(contexts) => contexts,
        Err(err) if context_current.is_empty() => {
            error!("{}", err);
            None
        }
        Err(err) => return Err(err),
    };

    if !context_current.is_empty() {
        if let Some(config) = contexts.as_ref().and_then(|c| c.contexts.get(context_current)) {
            debug!("Switch to context {}", config.name);
            return Ok(config.clone());
        }

        if context_current != DEFAULT_CONTEXT {
            return Err(ClientError::Config(format!(
                "Context '{}' does not exist in {}",
                context_current,
                config_dir.join("config.toml").display()
            )));
        }
    } else if let Some(contexts) = &contexts {
        let mut flagged: Vec<&Config> = contexts.contexts.values().filter(|c| c.current).collect();
        flagged.sort_by(|a, b| a.name.cmp(&b.name));

        if let Some(config) = flagged.first() {
            debug!("Switch to current context {}", config.name);
            return Ok((*config).clone());
        }
    }

    debug!("Switch to default configuration");

    Ok(Config::default())
}

pub(crate) fn load_auth_config(context_name: &str) -> Result<AuthConfig, ClientError> {
    load_auth_config_from(&get_config_dir(), context_name)
}

pub(crate) fn load_auth_config_from(config_dir: &Path, context_name: &str) -> Result<AuthConfig, ClientError> {
    let file = config_dir.join("auth.json");
    let auth_file_content = fs::read_to_string(&file).map_err(|err| {
        ClientError::Auth(format!("cannot read {}: {}", file.display(), err))
    })?;

    let context_auth: HashMap<String, AuthToken> = serde_json::from_str(&auth_file_content)?;

    match context_auth.get(context_name) {
        Some(auth_token) => Ok(AuthConfig {
            token: auth_token.token.clone()
        }),
        None => Err(ClientError::Auth(format!(
            "Context '{}' does not exist in {}", context_name, file.display()
        ))),
    }
}
