//! Path normalization and minified-sibling helpers.
//!
//! Provides consistent path handling across the pipeline:
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `minified_sibling` / `is_minified_name` / `unminified_counterpart` -
//!   derivation and detection of `.min.` companion files

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Marker distinguishing minified companion files (`app.min.js`).
pub const MIN_MARKER: &str = ".min.";

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Path of the minified copy stored next to a source file: the last
/// extension is replaced by `.min.<ext>` (`style.css` → `style.min.css`).
///
/// Inputs that already carry the marker, or have no extension to replace,
/// map to themselves; the file processor treats that as "already minified"
/// and refuses to persist over the original.
pub fn minified_sibling(path: &Path) -> PathBuf {
    if is_minified_name(path) {
        return path.to_path_buf();
    }
    let (Some(stem), Some(ext)) = (
        path.file_stem().and_then(OsStr::to_str),
        path.extension().and_then(OsStr::to_str),
    ) else {
        return path.to_path_buf();
    };
    path.with_file_name(format!("{stem}.min.{ext}"))
}

/// True when the file name carries the `.min.` marker.
///
/// The check is against the file name only, so a directory named
/// `v1.min.x` in the path does not poison detection.
pub fn is_minified_name(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.contains(MIN_MARKER))
}

/// The non-minified counterpart of a minified file
/// (`app.min.js` → `app.js`). `None` for paths without the marker.
pub fn unminified_counterpart(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    if !name.contains(MIN_MARKER) {
        return None;
    }
    Some(path.with_file_name(name.replacen(MIN_MARKER, ".", 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        assert!(normalize_path(path).is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        assert!(normalize_path(path).is_absolute());
    }

    #[test]
    fn test_minified_sibling_simple() {
        assert_eq!(
            minified_sibling(Path::new("/ui/style.css")),
            PathBuf::from("/ui/style.min.css")
        );
    }

    #[test]
    fn test_minified_sibling_multi_dot_stem() {
        // Only the last extension is replaced.
        assert_eq!(
            minified_sibling(Path::new("/ui/jquery.slim.js")),
            PathBuf::from("/ui/jquery.slim.min.js")
        );
    }

    #[test]
    fn test_minified_sibling_already_minified() {
        let path = Path::new("/ui/app.min.js");
        assert_eq!(minified_sibling(path), path.to_path_buf());
    }

    #[test]
    fn test_minified_sibling_no_extension() {
        let path = Path::new("/ui/README");
        assert_eq!(minified_sibling(path), path.to_path_buf());
    }

    #[test]
    fn test_is_minified_name() {
        assert!(is_minified_name(Path::new("app.min.js")));
        assert!(!is_minified_name(Path::new("app.js")));
        // Marker in a directory component does not count.
        assert!(!is_minified_name(Path::new("/v1.min.x/app.js")));
    }

    #[test]
    fn test_unminified_counterpart() {
        assert_eq!(
            unminified_counterpart(Path::new("/ui/app.min.js")),
            Some(PathBuf::from("/ui/app.js"))
        );
        assert_eq!(unminified_counterpart(Path::new("/ui/app.js")), None);
    }
}
