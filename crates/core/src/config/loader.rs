use crate::config::types::{ConfigFile, LoggingConfig, ResolvedConfig};
use shellexpand::full;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("keg '{0}' not found")]
    KegNotFound(String),

    #[error("no kegs defined in config")]
    NoKegs,

    #[error("no current keg set and more than one keg defined")]
    NoCurrentKeg,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(
        config_path: Option<&Path>,
        keg_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        Self::resolve(cf, keg_override)
    }

    fn resolve(cf: ConfigFile, keg_override: Option<&str>) -> Result<ResolvedConfig, ConfigError> {
        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.kegs.is_empty() {
            return Err(ConfigError::NoKegs);
        }

        let active = match keg_override.map(ToOwned::to_owned).or(cf.current) {
            Some(name) => name,
            // A lone keg needs no `current`.
            None if cf.kegs.len() == 1 => cf.kegs.keys().next().cloned().unwrap_or_default(),
            None => return Err(ConfigError::NoCurrentKeg),
        };

        let kegs = cf
            .kegs
            .iter()
            .map(|(name, keg)| Ok((name.clone(), expand_path(&keg.path)?)))
            .collect::<Result<BTreeMap<_, _>, ConfigError>>()?;

        let keg_root =
            kegs.get(&active).cloned().ok_or_else(|| ConfigError::KegNotFound(active.clone()))?;

        let logging = resolve_logging(&cf.logging)?;

        Ok(ResolvedConfig { active_keg: active, keg_root, kegs, title: cf.title, logging })
    }
}

fn resolve_logging(log_cfg: &LoggingConfig) -> Result<LoggingConfig, ConfigError> {
    let Some(ref file) = log_cfg.file else {
        return Ok(log_cfg.clone());
    };
    Ok(LoggingConfig {
        level: log_cfg.level.clone(),
        file_level: log_cfg.file_level.clone(),
        file: Some(expand_path(&file.to_string_lossy())?),
    })
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("kegdex").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("kegdex").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
