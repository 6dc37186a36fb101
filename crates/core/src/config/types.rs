use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::title::{DEFAULT_MAX_HEADING_LEN, TitleResolver};

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    /// Keg used when none is named on the command line.
    pub current: Option<String>,
    #[serde(default)]
    pub kegs: BTreeMap<String, KegProfile>,
    #[serde(default)]
    pub title: TitleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct KegProfile {
    /// Keg root directory; `~` and environment variables are expanded.
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct TitleConfig {
    /// Longest heading accepted as a node title, in characters.
    #[serde(default = "default_max_heading_len")]
    pub max_heading_len: usize,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self { max_heading_len: default_max_heading_len() }
    }
}

fn default_max_heading_len() -> usize {
    DEFAULT_MAX_HEADING_LEN
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Name of the active keg, or the directory name for `for_keg_dir`.
    pub active_keg: String,
    pub keg_root: PathBuf,
    /// Every configured keg, with expanded paths.
    pub kegs: BTreeMap<String, PathBuf>,
    pub title: TitleConfig,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Settings for a keg root given directly, without a config file.
    pub fn for_keg_dir(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            active_keg: name.clone(),
            keg_root: path.to_path_buf(),
            kegs: BTreeMap::from([(name, path.to_path_buf())]),
            title: TitleConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    pub fn resolver(&self) -> TitleResolver {
        TitleResolver::new(self.title.max_heading_len)
    }
}
