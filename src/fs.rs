use std::future::Future;
use std::io;
use std::path::Path;

use crate::entry::FileType;

/// Host filesystem collaborator. `stat` may suspend; errors are the
/// caller's to interpret.
pub trait FileSystem: Send + Sync {
    fn stat(&self, path: &Path) -> impl Future<Output = io::Result<FileType>> + Send;
}

/// Local disk via `tokio::fs`. Symlinks are followed, so a link to a
/// directory reports `SYMLINK | DIRECTORY`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    async fn stat(&self, path: &Path) -> io::Result<FileType> {
        let link = tokio::fs::symlink_metadata(path).await?;
        let mut kind = FileType::UNKNOWN;
        let meta = if link.is_symlink() {
            kind |= FileType::SYMLINK;
            tokio::fs::metadata(path).await?
        } else {
            link
        };
        if meta.is_dir() {
            kind |= FileType::DIRECTORY;
        } else if meta.is_file() {
            kind |= FileType::FILE;
        }
        Ok(kind)
    }
}
