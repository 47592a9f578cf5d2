use futures::future::join_all;
use tokio::sync::broadcast;

use crate::entry::EntryRef;
use crate::fs::{FileSystem, LocalFs};
use crate::mapping::{GlyphTable, MappingStore, lookup};

const CHANNEL_CAPACITY: usize = 16;

/// Badge plus tooltip for one directory entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoration {
    pub badge: String,
    pub tooltip: String,
}

/// "Previously supplied decorations are stale; ask again."
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecorationsChanged {
    /// Sent by `update_mappings` and `refresh`.
    All,
    /// Sent by `invalidate`, for hosts that know which entries changed.
    Entries(Vec<EntryRef>),
}

/// Answers badge queries for the host and tells it when to re-ask.
pub struct DecorationSupplier<F = LocalFs> {
    fs: F,
    mappings: MappingStore,
    changes: broadcast::Sender<DecorationsChanged>,
}

impl DecorationSupplier<LocalFs> {
    pub fn local(table: GlyphTable) -> Self {
        Self::new(LocalFs, table)
    }
}

impl<F: FileSystem> DecorationSupplier<F> {
    pub fn new(fs: F, table: GlyphTable) -> Self {
        let (changes, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            fs,
            mappings: MappingStore::new(table),
            changes,
        }
    }

    /// Badge for `entry` if it is a local directory whose lowercased name is
    /// mapped. Every failure along the way yields `None`.
    pub async fn decorate(&self, entry: &EntryRef) -> Option<Decoration> {
        if !entry.is_local() {
            return None;
        }

        match self.fs.stat(entry.path()).await {
            Ok(kind) if kind.is_dir() => {}
            Ok(_) => return None,
            Err(e) => {
                tracing::debug!(entry = %entry, error = %e, "stat failed, no badge");
                return None;
            }
        }

        let name = entry.base_name()?.to_lowercase();
        let table = self.mappings.snapshot();
        let badge = lookup(&table, &name)?;
        Some(Decoration {
            badge: badge.to_owned(),
            tooltip: format!("{name} folder"),
        })
    }

    /// Decorate many entries concurrently. Results line up with `entries`.
    pub async fn decorate_all(&self, entries: &[EntryRef]) -> Vec<Option<Decoration>> {
        join_all(entries.iter().map(|e| self.decorate(e))).await
    }

    /// Swap in a new effective mapping and tell subscribers to re-query.
    pub fn update_mappings(&self, table: GlyphTable) {
        tracing::info!(entries = table.len(), "folder badge mapping replaced");
        self.mappings.replace(table);
        self.notify(DecorationsChanged::All);
    }

    /// Ask subscribers to re-query without touching the mapping.
    pub fn refresh(&self) {
        self.notify(DecorationsChanged::All);
    }

    /// Ask subscribers to re-query only `entries`. An empty list is a no-op.
    pub fn invalidate(&self, entries: Vec<EntryRef>) {
        if entries.is_empty() {
            return;
        }
        self.notify(DecorationsChanged::Entries(entries));
    }

    /// Subscribe to change notifications; drop the receiver to unsubscribe.
    /// A lagged receiver should treat the gap as `DecorationsChanged::All`.
    pub fn subscribe(&self) -> broadcast::Receiver<DecorationsChanged> {
        self.changes.subscribe()
    }

    pub fn mappings(&self) -> &MappingStore {
        &self.mappings
    }

    fn notify(&self, change: DecorationsChanged) {
        // no subscribers is fine
        let _ = self.changes.send(change);
    }
}
