use std::fmt;
use std::path::{Path, PathBuf};

pub const FILE_SCHEME: &str = "file";

/// A path handed over by the host, tagged with the scheme it lives under.
/// Only `file` entries are addressable on the local filesystem.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntryRef {
    scheme: String,
    path: PathBuf,
}

impl EntryRef {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            scheme: FILE_SCHEME.into(),
            path: path.into(),
        }
    }

    pub fn with_scheme(scheme: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            scheme: scheme.into().to_ascii_lowercase(),
            path: path.into(),
        }
    }

    /// Accepts `scheme:rest` URIs and plain paths (which are `file`).
    /// URI paths are percent-decoded; `file://host/path` keeps only the path.
    pub fn parse(s: &str) -> Self {
        match split_scheme(s) {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case(FILE_SCHEME) => {
                let path = match rest.strip_prefix("//") {
                    Some(authority_and_path) => match authority_and_path.find('/') {
                        Some(i) => &authority_and_path[i..],
                        None => "/",
                    },
                    None => rest,
                };
                Self::file(percent_decode(path))
            }
            Some((scheme, rest)) => Self::with_scheme(scheme, percent_decode(rest)),
            None => Self::file(s),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_local(&self) -> bool {
        self.scheme == FILE_SCHEME
    }

    /// Final path segment, if any.
    pub fn base_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
    }
}

impl fmt::Display for EntryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.path.display())
    }
}

// Invalid UTF-8 after decoding leaves the text as written.
fn percent_decode(s: &str) -> String {
    urlencoding::decode(s)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| s.to_owned())
}

// RFC 3986 scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ).
// Single-letter schemes are treated as Windows drive letters.
fn split_scheme(s: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = s.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if scheme.len() < 2 || !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some((scheme, rest))
}

/// Entry type flags as reported by the host. A symlink to a directory
/// carries both `SYMLINK` and `DIRECTORY`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileType(u8);

impl FileType {
    pub const UNKNOWN: FileType = FileType(0);
    pub const FILE: FileType = FileType(1);
    pub const DIRECTORY: FileType = FileType(2);
    pub const SYMLINK: FileType = FileType(64);

    pub fn contains(self, other: FileType) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn is_dir(self) -> bool {
        self.contains(Self::DIRECTORY)
    }
}

impl std::ops::BitOr for FileType {
    type Output = FileType;

    fn bitor(self, rhs: FileType) -> FileType {
        FileType(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for FileType {
    fn bitor_assign(&mut self, rhs: FileType) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_path_is_local() {
        let e = EntryRef::parse("/home/me/project/src");
        assert!(e.is_local());
        assert_eq!(e.path(), Path::new("/home/me/project/src"));
        assert_eq!(e.base_name().as_deref(), Some("src"));
    }

    #[test]
    fn parse_file_uri() {
        let e = EntryRef::parse("file:///tmp/assets");
        assert!(e.is_local());
        assert_eq!(e.path(), Path::new("/tmp/assets"));

        let e = EntryRef::parse("FILE://server/share/docs");
        assert!(e.is_local());
        assert_eq!(e.path(), Path::new("/share/docs"));
    }

    #[test]
    fn parse_file_uri_without_authority_keeps_every_segment() {
        let e = EntryRef::parse("file:work/project/src");
        assert!(e.is_local());
        assert_eq!(e.path(), Path::new("work/project/src"));

        let e = EntryRef::parse("file:/abs/docs");
        assert_eq!(e.path(), Path::new("/abs/docs"));
    }

    #[test]
    fn parse_file_uri_with_bare_host_is_root() {
        assert_eq!(EntryRef::parse("file://server").path(), Path::new("/"));
    }

    #[test]
    fn parse_percent_decodes_uri_paths() {
        let e = EntryRef::parse("file:///tmp/my%20docs");
        assert_eq!(e.path(), Path::new("/tmp/my docs"));
        assert_eq!(e.base_name().as_deref(), Some("my docs"));

        let e = EntryRef::parse("file:///p/%C3%BCbersetzungen");
        assert_eq!(e.base_name().as_deref(), Some("\u{fc}bersetzungen"));
    }

    #[test]
    fn parse_plain_path_is_taken_literally() {
        let e = EntryRef::parse("/tmp/100%25");
        assert_eq!(e.path(), Path::new("/tmp/100%25"));
    }

    #[test]
    fn parse_keeps_undecodable_bytes_as_written() {
        let e = EntryRef::parse("file:///tmp/bad%FF");
        assert_eq!(e.path(), Path::new("/tmp/bad%FF"));
    }

    #[test]
    fn parse_foreign_scheme() {
        let e = EntryRef::parse("untitled:Untitled-1");
        assert!(!e.is_local());
        assert_eq!(e.scheme(), "untitled");

        let e = EntryRef::parse("vscode-remote://ssh/home/src");
        assert!(!e.is_local());
        assert_eq!(e.scheme(), "vscode-remote");
    }

    #[test]
    fn drive_letter_is_not_a_scheme() {
        let e = EntryRef::parse("C:\\work\\src");
        assert!(e.is_local());
    }

    #[test]
    fn base_name_of_root_is_none() {
        assert_eq!(EntryRef::file("/").base_name(), None);
    }

    #[test]
    fn file_type_flags() {
        let t = FileType::SYMLINK | FileType::DIRECTORY;
        assert!(t.is_dir());
        assert!(t.contains(FileType::SYMLINK));
        assert!(!FileType::FILE.is_dir());
        assert!(!FileType::UNKNOWN.is_dir());
        assert!(!(FileType::SYMLINK | FileType::FILE).is_dir());
    }

    #[test]
    fn display_includes_scheme() {
        assert_eq!(EntryRef::file("/a/b").to_string(), "file:/a/b");
    }
}
