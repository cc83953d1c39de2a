use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Edge distance and per-frame step for one scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeScroll {
    pub threshold: f64,
    pub max_step: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoScrollConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_outer_threshold")]
    pub outer_threshold: f64,
    #[serde(default = "default_outer_max_step")]
    pub outer_max_step: f64,
    #[serde(default = "default_inner_threshold")]
    pub inner_threshold: f64,
    #[serde(default = "default_inner_max_step")]
    pub inner_max_step: f64,
}

fn default_enabled() -> bool {
    true
}

fn default_outer_threshold() -> f64 {
    80.0
}

fn default_outer_max_step() -> f64 {
    22.0
}

fn default_inner_threshold() -> f64 {
    60.0
}

fn default_inner_max_step() -> f64 {
    18.0
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            outer_threshold: default_outer_threshold(),
            outer_max_step: default_outer_max_step(),
            inner_threshold: default_inner_threshold(),
            inner_max_step: default_inner_max_step(),
        }
    }
}

impl AutoScrollConfig {
    pub fn outer(&self) -> EdgeScroll {
        EdgeScroll {
            threshold: self.outer_threshold,
            max_step: self.outer_max_step,
        }
    }

    pub fn inner(&self) -> EdgeScroll {
        EdgeScroll {
            threshold: self.inner_threshold,
            max_step: self.inner_max_step,
        }
    }

    /// The same tuning expressed in another unit, e.g. terminal cells
    /// instead of pixels.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            enabled: self.enabled,
            outer_threshold: self.outer_threshold * factor,
            outer_max_step: self.outer_max_step * factor,
            inner_threshold: self.inner_threshold * factor,
            inner_max_step: self.inner_max_step * factor,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the key-value files. Defaults to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub auto_scroll: AutoScrollConfig,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/tacky/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("tacky/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("tacky\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match std::fs::read_to_string(&config_path) {
                    Ok(content) => return Self::from_toml(&content),
                    Err(e) => tracing::warn!(
                        "Could not read config {}: {}",
                        config_path.display(),
                        e
                    ),
                }
            }
        }
        Self::default()
    }

    /// Parse a config document, falling back to defaults when it is invalid.
    pub fn from_toml(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config: {}", e);
                Self::default()
            }
        }
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("tacky")))
            .unwrap_or_else(|| PathBuf::from(".tacky"))
    }
}
