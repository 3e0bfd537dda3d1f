//! Icon and school-logo file resolution.
//!
//! An asset request carries an identifier, not a path: the identifier is
//! normalized into a plain PNG file name, looked up under the asset
//! directory, and replaced by `default.png` when absent. Anything containing
//! a path separator or parent-directory component skips straight to the
//! default.

use std::path::{Path, PathBuf};

pub const DEFAULT_ASSET: &str = "default.png";

/// Normalizes a personality icon identifier: trim, drop inner spaces, append
/// the `.png` suffix when missing. Returns `None` for names that are empty or
/// try to traverse out of the asset directory.
pub fn personality_icon_name(raw: &str) -> Option<String> {
    let name = raw.trim().replace(' ', "");
    file_name(name)
}

/// Normalizes a school logo identifier: trim, lowercase, spaces become
/// hyphens, `.png` appended when missing.
pub fn school_logo_name(raw: &str) -> Option<String> {
    let name = raw.trim().to_lowercase().replace(' ', "-");
    file_name(name)
}

fn file_name(name: String) -> Option<String> {
    if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
        return None;
    }
    if name.to_lowercase().ends_with(".png") {
        Some(name)
    } else {
        Some(format!("{name}.png"))
    }
}

/// Resolves a normalized file name inside an asset directory, falling back to
/// the default asset. `None` means not even the default exists, which is the
/// only case the caller turns into a 404.
pub fn resolve(dir: &Path, name: Option<String>) -> Option<PathBuf> {
    if let Some(name) = name {
        let path = dir.join(&name);
        if path.is_file() {
            return Some(path);
        }
        tracing::debug!(file = %name, "asset missing, trying default");
    }
    let fallback = dir.join(DEFAULT_ASSET);
    fallback.is_file().then_some(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_icon_name_appends_png() {
        assert_eq!(personality_icon_name("3"), Some("3.png".to_string()));
        assert_eq!(personality_icon_name("3.png"), Some("3.png".to_string()));
        assert_eq!(personality_icon_name("3.PNG"), Some("3.PNG".to_string()));
    }

    #[test]
    fn test_icon_name_strips_spaces() {
        assert_eq!(
            personality_icon_name(" icon 12 "),
            Some("icon12.png".to_string())
        );
    }

    #[test]
    fn test_school_logo_name_lowercases_and_hyphenates() {
        assert_eq!(
            school_logo_name("Tech University"),
            Some("tech-university.png".to_string())
        );
        assert_eq!(school_logo_name("HKU"), Some("hku.png".to_string()));
    }

    #[test]
    fn test_traversal_names_rejected() {
        assert_eq!(personality_icon_name("../secret"), None);
        assert_eq!(personality_icon_name("a/b"), None);
        assert_eq!(school_logo_name("..\\windows"), None);
        assert_eq!(personality_icon_name("  "), None);
    }

    #[test]
    fn test_resolve_prefers_exact_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("3.png"), b"png").unwrap();
        fs::write(dir.path().join(DEFAULT_ASSET), b"png").unwrap();

        let path = resolve(dir.path(), Some("3.png".to_string())).unwrap();
        assert_eq!(path.file_name().unwrap(), "3.png");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_ASSET), b"png").unwrap();

        let path = resolve(dir.path(), Some("missing.png".to_string())).unwrap();
        assert_eq!(path.file_name().unwrap(), DEFAULT_ASSET);

        // A rejected name also lands on the default.
        let path = resolve(dir.path(), None).unwrap();
        assert_eq!(path.file_name().unwrap(), DEFAULT_ASSET);
    }

    #[test]
    fn test_resolve_none_when_default_also_missing() {
        let dir = TempDir::new().unwrap();
        assert!(resolve(dir.path(), Some("missing.png".to_string())).is_none());
    }
}
