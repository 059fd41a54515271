//! Conversion context resolution.
//!
//! Derives every naming and path fact the pipeline needs for one input
//! file: content type, logical name, group, header path, minified-sibling
//! path and the generated constant name.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

use crate::utils::path::{minified_sibling, normalize_path};

use super::AssetKind;

/// Per-file conversion facts, built fresh for each input and fully
/// consumed once the header is written.
#[derive(Debug, Clone)]
pub struct ConvertContext {
    /// Absolute path to the source asset.
    pub input_path: PathBuf,
    /// Normalized type tag (`htm` folded into `html`), used for naming.
    pub type_tag: String,
    /// Minifier selection; `Html` for unrecognized extensions.
    pub kind: AssetKind,
    /// File name up to the first dot, used for identifier derivation.
    pub logical_name: String,
    /// Namespace segment: parent directory name, or the grandparent when
    /// the parent is a redundant type-named folder (`widgets/css/`).
    pub group: String,
    /// Header file to write.
    pub output_header_path: PathBuf,
    /// Where the minified text may be persisted; equals `input_path` for
    /// inputs that are already minified.
    pub minified_sibling_path: PathBuf,
    /// `<TYPE>_<NAME>`; the gzip constant appends `_GZIP`.
    pub constant_name: String,
}

impl ConvertContext {
    /// Derive all conversion facts for `input_path`.
    ///
    /// When `output_location` is an existing directory the header file name
    /// is synthesized as `<group><Name><TYPE>.h`; otherwise the location is
    /// taken verbatim as the header path.
    pub fn resolve(input_path: &Path, output_location: &Path) -> Result<Self> {
        let input_path = normalize_path(input_path);
        let file_name = input_path
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or_else(|| anyhow!("input path has no file name: {}", input_path.display()))?;

        let extension = input_path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let type_tag = if extension == "htm" {
            "html".to_string()
        } else {
            extension.clone()
        };
        let kind = AssetKind::from_tag(&type_tag).unwrap_or(AssetKind::Html);

        let logical_name = file_name
            .split('.')
            .next()
            .unwrap_or(file_name)
            .to_string();

        // A parent folder named after the content type carries no namespace
        // information; promote to the grandparent (`widgets/css/style.css`
        // groups under `widgets`). Both the raw extension and the
        // normalized tag count as type-named, so `htm/` and `html/`
        // folders are treated alike.
        let parent = input_path.parent();
        let parent_name = parent
            .and_then(Path::file_name)
            .and_then(OsStr::to_str)
            .unwrap_or_default();
        let group = if !extension.is_empty()
            && (parent_name.eq_ignore_ascii_case(&type_tag)
                || parent_name.eq_ignore_ascii_case(&extension))
        {
            parent
                .and_then(Path::parent)
                .and_then(Path::file_name)
                .and_then(OsStr::to_str)
                .unwrap_or_default()
        } else {
            parent_name
        }
        .to_string();

        let output_header_path = if output_location.is_dir() {
            let header_name = format!(
                "{group}{}{}.h",
                capitalize(&logical_name),
                type_tag.to_uppercase()
            );
            normalize_path(output_location).join(header_name)
        } else {
            normalize_path(output_location)
        };

        let minified_sibling_path = minified_sibling(&input_path);
        let constant_name = format!(
            "{}_{}",
            type_tag.to_uppercase(),
            logical_name.to_uppercase()
        );

        Ok(Self {
            input_path,
            type_tag,
            kind,
            logical_name,
            group,
            output_header_path,
            minified_sibling_path,
            constant_name,
        })
    }
}

/// Uppercase the first character and lowercase the rest, matching the
/// header file names emitted by earlier releases (`mainPage` → `Mainpage`).
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
