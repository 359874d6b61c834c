use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::MuseumMapError;
use crate::map::RouteProviderConfig;

const CONFIG_DIR_NAME: &str = "museum_map";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Catalog index of the place selected on startup
    pub initial_place: usize,
    pub route_provider: RouteProviderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 420.,
            window_height: 760.,
            initial_place: 0,
            route_provider: RouteProviderConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Result<PathBuf, MuseumMapError> {
        Ok(dirs::config_dir()
            .ok_or(MuseumMapError::NoConfigDir)?
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    }

    /// Read the config at `path`. `Ok(None)` when the file does not exist.
    pub fn from_file(path: &Path) -> Result<Option<Self>, MuseumMapError> {
        if !path.exists() {
            return Ok(None);
        }
        let file =
            std::fs::File::open(path).map_err(|e| MuseumMapError::ConfigIOError { source: e })?;
        serde_json::from_reader(file)
            .map(Some)
            .map_err(|e| MuseumMapError::ConfigParseError { source: e })
    }

    /// Load the user config, falling back to defaults on any problem
    pub fn load_or_default() -> Self {
        let loaded = Self::default_path().and_then(|path| Self::from_file(&path));
        match loaded {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("Using default config: {}", e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), MuseumMapError> {
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| MuseumMapError::ConfigIOError { source: e })?;
        }

        let file =
            std::fs::File::create(path).map_err(|e| MuseumMapError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| MuseumMapError::ConfigSerializeError { source: e })
    }

    pub fn save(&self) -> Result<PathBuf, MuseumMapError> {
        let path = Self::default_path()?;
        self.save_to(&path)?;
        Ok(path)
    }
}
