//! Emoji badges for well-known project directories.
//!
//! The host file browser asks a [`DecorationSupplier`] for the badge of each
//! visible entry and listens on [`DecorationSupplier::subscribe`] for hints
//! that earlier answers are stale. [`App`] wires it to a TOML config file and
//! the `emojiFolderIcons.refresh` command.

pub mod app;
pub mod config;
pub mod decorate;
pub mod entry;
pub mod error;
pub mod fs;
pub mod glyphs;
pub mod listing;
pub mod mapping;
pub mod util;

pub use app::App;
pub use config::Settings;
pub use decorate::{Decoration, DecorationSupplier, DecorationsChanged};
pub use entry::{EntryRef, FileType};
pub use error::{Error, Result};
pub use fs::{FileSystem, LocalFs};
pub use mapping::{GlyphTable, MappingStore};
