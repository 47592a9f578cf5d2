use std::io::{self, Write};
use std::path::Path;

use crossterm::style::Stylize;

use crate::decorate::{DecorationSupplier, Decoration};
use crate::entry::EntryRef;
use crate::fs::FileSystem;
use crate::util::pad_to_width;

const BADGE_WIDTH: usize = 4;

pub struct ListEntry {
    pub name: String,
    pub entry: EntryRef,
    pub is_dir: bool,
}

/// Directory contents, directories first, each group sorted by lowercase name.
/// Symlinks to directories sort with the directories.
pub async fn read_entries(dir: &Path, show_hidden: bool) -> io::Result<Vec<ListEntry>> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    let mut read_dir = tokio::fs::read_dir(dir).await?;
    while let Some(item) = read_dir.next_entry().await? {
        let name = item.file_name().to_string_lossy().into_owned();
        if !show_hidden && name.starts_with('.') {
            continue;
        }
        let path = item.path();
        let is_dir = tokio::fs::metadata(&path)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        let entry = ListEntry {
            name,
            entry: EntryRef::file(path),
            is_dir,
        };
        if is_dir {
            dirs.push(entry);
        } else {
            files.push(entry);
        }
    }

    dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    dirs.extend(files);
    Ok(dirs)
}

/// One line per entry: badge column, then the name.
pub fn render_lines(entries: &[ListEntry], decorations: &[Option<Decoration>]) -> Vec<String> {
    entries
        .iter()
        .zip(decorations)
        .map(|(e, d)| {
            let badge = d.as_ref().map(|d| d.badge.as_str()).unwrap_or("");
            let badge = pad_to_width(badge, BADGE_WIDTH);
            if e.is_dir {
                format!("{badge}{}", format!("{}/", e.name).blue().bold())
            } else {
                format!("{badge}{}", e.name)
            }
        })
        .collect()
}

/// Read `dir`, ask the supplier for every entry and print the result.
pub async fn print_dir<F: FileSystem>(
    supplier: &DecorationSupplier<F>,
    dir: &Path,
    show_hidden: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let entries = read_entries(dir, show_hidden).await?;
    let refs: Vec<EntryRef> = entries.iter().map(|e| e.entry.clone()).collect();
    let decorations = supplier.decorate_all(&refs).await;
    for line in render_lines(&entries, &decorations) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
