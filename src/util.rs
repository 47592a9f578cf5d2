use std::path::PathBuf;

use unicode_width::UnicodeWidthStr;

pub const CONFIG_ENV: &str = "EMOJI_FOLDERS_CONFIG";

pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("emoji-folders"))
}

/// `$EMOJI_FOLDERS_CONFIG`, else `<config dir>/emoji-folders/config.toml`,
/// else `./config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Some(p) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(p);
    }
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.toml")
}

/// Pad `s` with spaces to `width` terminal columns. Wider input is returned
/// unchanged.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = s.width();
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_ascii() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
        assert_eq!(pad_to_width("", 2), "  ");
    }

    #[test]
    fn pad_counts_emoji_as_double_width() {
        // U+1F4E6 is two columns wide
        assert_eq!(pad_to_width("\u{1f4e6}", 4), "\u{1f4e6}  ");
        assert_eq!(pad_to_width("\u{1f4e6}\u{1f4e6}", 4), "\u{1f4e6}\u{1f4e6}");
    }

    #[test]
    fn config_path_ends_with_file_name() {
        assert!(default_config_path().ends_with("config.toml") || std::env::var_os(CONFIG_ENV).is_some());
    }
}
