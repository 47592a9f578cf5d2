use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::glyphs::DEFAULT_GLYPHS;

/// Lowercase directory name -> glyph.
pub type GlyphTable = HashMap<String, String>;

pub fn default_table() -> GlyphTable {
    DEFAULT_GLYPHS
        .iter()
        .map(|(name, glyph)| (name.to_string(), glyph.to_string()))
        .collect()
}

/// Overlay `overrides` on a copy of `defaults`. Override keys are lowercased
/// and always win; `defaults` is left untouched.
pub fn build<I, K, V>(defaults: &GlyphTable, overrides: I) -> GlyphTable
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut table = defaults.clone();
    for (name, glyph) in overrides {
        table.insert(name.as_ref().to_lowercase(), glyph.into());
    }
    table
}

/// Table used while badges are disabled.
pub fn empty() -> GlyphTable {
    GlyphTable::new()
}

/// Case-insensitive exact match. An empty glyph counts as no badge.
pub fn lookup<'a>(table: &'a GlyphTable, name: &str) -> Option<&'a str> {
    table
        .get(&name.to_lowercase())
        .map(String::as_str)
        .filter(|glyph| !glyph.is_empty())
}

/// Holder of the effective mapping. Readers take an `Arc` snapshot; writers
/// swap in a whole new table, so no reader ever sees a partial update.
pub struct MappingStore {
    current: RwLock<Arc<GlyphTable>>,
}

impl MappingStore {
    pub fn new(table: GlyphTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    pub fn snapshot(&self) -> Arc<GlyphTable> {
        Arc::clone(&self.current.read())
    }

    pub fn replace(&self, table: GlyphTable) {
        *self.current.write() = Arc::new(table);
    }

    pub fn lookup(&self, name: &str) -> Option<String> {
        lookup(&self.snapshot(), name).map(str::to_owned)
    }

    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.read().is_empty()
    }
}

impl Default for MappingStore {
    fn default() -> Self {
        Self::new(default_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_overrides_is_the_default_table() {
        let defaults = default_table();
        let table = build(&defaults, Vec::<(&str, &str)>::new());
        assert_eq!(table, defaults);
        assert_eq!(table.len(), DEFAULT_GLYPHS.len());
    }

    #[test]
    fn override_adds_new_key() {
        let defaults = default_table();
        let table = build(&defaults, [("custom-folder", "\u{1f680}")]);
        assert_eq!(lookup(&table, "custom-folder"), Some("\u{1f680}"));
        assert_eq!(table.len(), defaults.len() + 1);
    }

    #[test]
    fn override_replaces_default() {
        let defaults = default_table();
        let table = build(&defaults, [("src", "\u{2728}")]);
        assert_eq!(lookup(&table, "src"), Some("\u{2728}"));
        assert_eq!(lookup(&table, "assets"), Some("\u{1f3a8}"));
    }

    #[test]
    fn override_keys_are_lowercased() {
        let table = build(&default_table(), [("Vendor", "\u{1f69a}")]);
        assert!(table.contains_key("vendor"));
        assert_eq!(lookup(&table, "VENDOR"), Some("\u{1f69a}"));
    }

    #[test]
    fn build_does_not_leak_between_calls() {
        let defaults = default_table();
        let first = build(&defaults, [("a", "1"), ("src", "x")]);
        let second = build(&defaults, [("b", "2")]);
        assert!(first.contains_key("a"));
        assert!(!second.contains_key("a"));
        assert_eq!(lookup(&second, "src"), Some("\u{1f4e6}\u{1f4e6}"));
        assert_eq!(defaults, default_table());

        let again = build(&defaults, [("b", "2")]);
        assert_eq!(second, again);
    }

    #[test]
    fn lookup_is_case_insensitive_exact_match() {
        let table = default_table();
        assert_eq!(lookup(&table, "SRC"), lookup(&table, "src"));
        assert_eq!(lookup(&table, "Src"), Some("\u{1f4e6}\u{1f4e6}"));
        assert_eq!(lookup(&table, "sr"), None);
        assert_eq!(lookup(&table, "src2"), None);
        assert_eq!(lookup(&table, "my-src"), None);
    }

    #[test]
    fn empty_glyph_means_no_badge() {
        let table = build(&default_table(), [("src", "")]);
        assert_eq!(lookup(&table, "src"), None);
    }

    #[test]
    fn empty_table_matches_nothing() {
        let table = empty();
        for (name, _) in DEFAULT_GLYPHS {
            assert_eq!(lookup(&table, name), None);
        }
    }

    #[test]
    fn store_replace_is_visible_to_new_snapshots_only() {
        let store = MappingStore::default();
        let before = store.snapshot();
        store.replace(build(&empty(), [("src", "S")]));

        assert_eq!(lookup(&before, "src"), Some("\u{1f4e6}\u{1f4e6}"));
        assert_eq!(store.lookup("src").as_deref(), Some("S"));
        assert_eq!(store.lookup("assets"), None);
        assert_eq!(store.len(), 1);

        store.replace(empty());
        assert!(store.is_empty());
    }
}
