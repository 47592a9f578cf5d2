use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Settings;
use crate::decorate::DecorationSupplier;
use crate::error::{Error, Result};
use crate::fs::{FileSystem, LocalFs};

pub const REFRESH_COMMAND: &str = "emojiFolderIcons.refresh";
pub const REFRESHED_MESSAGE: &str = "Emoji Folder Icons refreshed!";

/// Length and CRC-32 of the config file last seen; `None` when it was
/// missing or unreadable. Content-based, so saves within one mtime tick
/// are still noticed.
type ConfigStamp = Option<(u64, u32)>;

fn config_stamp(path: &Path) -> ConfigStamp {
    let bytes = std::fs::read(path).ok()?;
    Some((bytes.len() as u64, crc32fast::hash(&bytes)))
}

/// Wires settings, the decoration supplier and the refresh command together.
/// The host holds one of these and hands `supplier()` to its renderer.
pub struct App<F = LocalFs> {
    pub status_message: String,
    config_path: PathBuf,
    settings: Settings,
    config_stamp: ConfigStamp,
    supplier: Arc<DecorationSupplier<F>>,
}

impl App<LocalFs> {
    pub fn new(config_path: PathBuf) -> Self {
        Self::with_fs(LocalFs, config_path)
    }
}

impl<F: FileSystem> App<F> {
    pub fn with_fs(fs: F, config_path: PathBuf) -> Self {
        let settings = Settings::from_config(&config_path);
        let config_stamp = config_stamp(&config_path);
        let supplier = Arc::new(DecorationSupplier::new(fs, settings.effective_table()));
        tracing::debug!(
            path = %config_path.display(),
            enabled = settings.enabled,
            overrides = settings.custom_mappings.len(),
            "folder badges initialised"
        );
        App {
            status_message: String::new(),
            config_path,
            settings,
            config_stamp,
            supplier,
        }
    }

    pub fn supplier(&self) -> &Arc<DecorationSupplier<F>> {
        &self.supplier
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Configuration changed: re-read it and replace the mapping wholesale.
    pub fn reload_config(&mut self) {
        self.settings = Settings::from_config(&self.config_path);
        self.config_stamp = config_stamp(&self.config_path);
        self.supplier.update_mappings(self.settings.effective_table());
    }

    /// Reload if the config file appeared, vanished or was rewritten since
    /// the last look. Returns whether a reload happened.
    pub fn poll_config(&mut self) -> bool {
        if config_stamp(&self.config_path) == self.config_stamp {
            return false;
        }
        tracing::info!(path = %self.config_path.display(), "config changed");
        self.reload_config();
        true
    }

    pub fn execute_command(&mut self, name: &str) -> Result<()> {
        match name.trim() {
            REFRESH_COMMAND | "refresh" => {
                self.refresh();
                self.status_message = REFRESHED_MESSAGE.into();
                Ok(())
            }
            other => Err(Error::UnknownCommand(other.to_string())),
        }
    }

    /// Rebuild from current configuration and broadcast exactly once.
    fn refresh(&mut self) {
        let settings = Settings::from_config(&self.config_path);
        let table = settings.effective_table();
        self.settings = settings;
        self.config_stamp = config_stamp(&self.config_path);
        if *self.supplier.mappings().snapshot() == table {
            self.supplier.refresh();
        } else {
            self.supplier.update_mappings(table);
        }
    }
}
