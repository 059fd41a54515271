//! Source tree walking and candidate selection.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rustc_hash::FxHashSet;

use crate::config::ToolConfig;
use crate::utils::path::{is_minified_name, unminified_counterpart};
use crate::{debug, log};

use super::AssetKind;
use super::process::process_file;

/// Convert every asset file under `source_root` into a header in
/// `output_dir`.
///
/// Candidates are filtered by extension and deduplicated: a `.min.` file
/// is skipped when its non-minified source is present, since processing
/// that source refreshes the minified copy anyway. Standalone minified
/// files are converted directly. The first per-file failure aborts the
/// whole batch.
pub fn process_dir(
    source_root: &Path,
    output_dir: &Path,
    recursive: bool,
    store_minified: bool,
    config: &ToolConfig,
) -> Result<()> {
    let mut candidates = FxHashSet::default();
    collect_assets(&mut candidates, source_root, recursive);

    let mut processed = 0usize;
    for path in &candidates {
        if is_minified_name(path)
            && let Some(counterpart) = unminified_counterpart(path)
            && counterpart.is_file()
        {
            debug!("skip"; "{} is covered by {}", path.display(), counterpart.display());
            continue;
        }
        process_file(path, output_dir, store_minified, config)?;
        processed += 1;
    }

    log!("walk"; "processed {} of {} candidate file(s)", processed, candidates.len());
    Ok(())
}

/// Collect files with an asset extension under `dir`.
fn collect_assets(out: &mut FxHashSet<PathBuf>, dir: &Path, recursive: bool) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if recursive {
                collect_assets(out, &path, true);
            }
        } else if has_asset_extension(&path) {
            out.insert(path);
        }
    }
}

fn has_asset_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(AssetKind::matches_extension)
}
