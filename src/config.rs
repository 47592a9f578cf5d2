use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::mapping::{GlyphTable, build, default_table, empty};

#[derive(Deserialize, Default)]
struct RawConfig {
    folder_icons: Option<RawSettings>,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawSettings {
    enabled: bool,
    custom_mappings: toml::Table,
}

impl Default for RawSettings {
    fn default() -> Self {
        RawSettings {
            enabled: true,
            custom_mappings: toml::Table::new(),
        }
    }
}

impl RawSettings {
    fn into_settings(self) -> Settings {
        let mut custom_mappings = BTreeMap::new();
        for (name, value) in self.custom_mappings {
            match value {
                toml::Value::String(glyph) => {
                    custom_mappings.insert(name, glyph);
                }
                other => {
                    tracing::debug!(%name, kind = other.type_str(), "ignoring non-string folder mapping");
                }
            }
        }
        Settings {
            enabled: self.enabled,
            custom_mappings,
        }
    }
}

/// User-facing settings of the `[folder_icons]` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub enabled: bool,
    pub custom_mappings: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            enabled: true,
            custom_mappings: BTreeMap::new(),
        }
    }
}

impl Settings {
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(raw.folder_icons.unwrap_or_default().into_settings())
    }

    /// A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like `load`, but never fails: problems are logged and defaults used.
    pub fn from_config(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("{e}; using default folder badges");
                Self::default()
            }
        }
    }

    /// Defaults overlaid with overrides, or nothing when disabled.
    pub fn effective_table(&self) -> GlyphTable {
        if !self.enabled {
            return empty();
        }
        build(&default_table(), &self.custom_mappings)
    }
}
