//! Per-file conversion with side effects (sibling persistence, header emission).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::ToolConfig;
use crate::{debug, log};

use super::header::{ASSET_HEADER, HeaderVars};
use super::{ConvertContext, compress, minify};

/// Convert one asset file into a C header.
///
/// Pipeline: resolve context → minify → compress → optionally persist the
/// minified sibling → write the header. The header is always overwritten;
/// the sibling write is refused when the input itself is already minified.
/// Partial writes are not rolled back.
pub fn process_file(
    input: &Path,
    output_location: &Path,
    store_minified: bool,
    config: &ToolConfig,
) -> Result<()> {
    log!("asset"; "processing {}", input.display());
    let ctx = ConvertContext::resolve(input, output_location)?;
    debug!("asset"; "resolved {} asset `{}` in group `{}`", ctx.type_tag, ctx.logical_name, ctx.group);

    let source = fs::read_to_string(&ctx.input_path)
        .with_context(|| format!("failed to read {}", ctx.input_path.display()))?;
    let minified = minify(ctx.kind, &source)
        .with_context(|| format!("failed to minify {}", ctx.input_path.display()))?;
    let compressed = compress(&minified)?;

    if store_minified {
        if ctx.minified_sibling_path == ctx.input_path {
            log!("skip"; "{} is already minified, refusing to overwrite it", ctx.input_path.display());
        } else {
            debug!("asset"; "writing minified copy {}", ctx.minified_sibling_path.display());
            fs::write(&ctx.minified_sibling_path, &minified).with_context(|| {
                format!("failed to write {}", ctx.minified_sibling_path.display())
            })?;
        }
    }

    debug!("asset"; "using constants {} and {}_GZIP", ctx.constant_name, ctx.constant_name);
    let rendered = ASSET_HEADER.render(&HeaderVars {
        constant: ctx.constant_name,
        minified,
        gzip_len: compressed.len,
        gzip_data: compressed.literal,
        progmem: config.progmem,
    });

    if let Some(parent) = ctx.output_header_path.parent() {
        fs::create_dir_all(parent)?;
    }
    log!("asset"; "writing header {}", ctx.output_header_path.display());
    fs::write(&ctx.output_header_path, rendered)
        .with_context(|| format!("failed to write {}", ctx.output_header_path.display()))?;
    Ok(())
}
