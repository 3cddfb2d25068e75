//! Configuration file support for torkiq.
//!
//! Loads optional `.torkiq/config.toml` from the working directory.
//!
//! ```toml
//! [output]
//! path = "public/index.html"
//!
//! [assets]
//! stylesheet_script = ""          # offline build, base CSS only
//!
//! [page]
//! copyright_year = 2025           # pin for reproducible output
//!
//! [smoke]
//! accent_token = "bg-violet-700"
//! ```

use std::path::{Path, PathBuf};

use chrono::Datelike;
use page_leptos::smoke::SmokeExpectations;
use page_leptos::styles::{DEFAULT_STYLESHEET_SCRIPT, StyleAssets};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Directory holding the config file, relative to the project root.
pub const CONFIG_DIR: &str = ".torkiq";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct TorkiqConfig {
    pub output: OutputConfig,
    pub assets: AssetsConfig,
    pub page: PageConfig,
    /// Overrides for the post-render checks
    pub smoke: SmokeExpectations,
}

/// Where the rendered document goes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dist").join("index.html"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Utility stylesheet script URL. Empty string drops the tag.
    pub stylesheet_script: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            stylesheet_script: DEFAULT_STYLESHEET_SCRIPT.to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Copyright year; the current year when unset.
    pub copyright_year: Option<i32>,
}

impl TorkiqConfig {
    /// Load config from `.torkiq/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_DIR).join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path, warning and falling back to the
    /// defaults when it cannot be used.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Strict variant of [`TorkiqConfig::load_from_path`].
    pub fn try_load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Year printed in the footer, resolved once.
    pub fn copyright_year(&self) -> i32 {
        self.page
            .copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    pub fn style_assets(&self) -> StyleAssets {
        StyleAssets {
            stylesheet_script: self.assets.stylesheet_script.clone(),
        }
    }
}
