//! Asset kind definitions.

/// Content type of an embeddable asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Stylesheet, minified with lightningcss.
    Css,
    /// Script, minified with oxc.
    Js,
    /// Markup, minified with minify-html. Also the fallback for
    /// unrecognized extensions.
    Html,
}

impl AssetKind {
    /// Map a normalized type tag (`htm` already folded into `html`) to a
    /// kind. Unrecognized tags return `None`; callers fall back to `Html`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "css" => Some(Self::Css),
            "js" => Some(Self::Js),
            "html" => Some(Self::Html),
            _ => None,
        }
    }

    /// Extension filter used by the directory walk. Case-insensitive, so
    /// `Style.CSS` is discovered just like `style.css`.
    pub fn matches_extension(ext: &str) -> bool {
        matches!(
            ext.to_ascii_lowercase().as_str(),
            "css" | "js" | "htm" | "html"
        )
    }

    /// Tag used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Js => "js",
            Self::Html => "html",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(AssetKind::from_tag("css"), Some(AssetKind::Css));
        assert_eq!(AssetKind::from_tag("js"), Some(AssetKind::Js));
        assert_eq!(AssetKind::from_tag("html"), Some(AssetKind::Html));
        assert_eq!(AssetKind::from_tag("txt"), None);
    }

    #[test]
    fn test_matches_extension_case_insensitive() {
        for ext in ["css", "js", "htm", "html", "CSS", "Js", "HTML"] {
            assert!(AssetKind::matches_extension(ext), "{ext} should match");
        }
        assert!(!AssetKind::matches_extension("txt"));
        assert!(!AssetKind::matches_extension("min"));
    }
}
