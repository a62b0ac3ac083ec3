//! Configuration file loader with multi-source merging.

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority.
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./larder.toml` or `./.larder.toml`
    /// 3. Global: `$XDG_CONFIG_HOME/larder/config.toml` (or the platform
    ///    equivalent)
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config).
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// The global config file path, under the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("larder").join("config.toml"))
    }

    /// The project-level config file, if one exists.
    pub fn project_config_path() -> Option<PathBuf> {
        ["larder.toml", ".larder.toml"]
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
    }
}
