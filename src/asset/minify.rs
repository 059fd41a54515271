//! Asset minification for JS, CSS and HTML files.
//!
//! Uses oxc for JavaScript, lightningcss for CSS and minify-html for HTML.
//! Minifier failures are fatal: a source that does not parse aborts the
//! conversion instead of being embedded verbatim.

use anyhow::{Result, anyhow, bail};
use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use minify_html::Cfg;
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use crate::log;

use super::AssetKind;

/// Minify source text with the minifier matching the asset kind.
pub fn minify(kind: AssetKind, source: &str) -> Result<String> {
    log!("minify"; "using the {} minifier", kind.name());
    match kind {
        AssetKind::Css => minify_css(source),
        AssetKind::Js => minify_js(source),
        AssetKind::Html => minify_html(source),
    }
}

/// Minify JavaScript source code.
fn minify_js(source: &str) -> Result<String> {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if let Some(error) = ret.errors.first() {
        bail!("JavaScript parse failed: {error}");
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Ok(code)
}

/// Minify CSS source code.
fn minify_css(source: &str) -> Result<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default())
        .map_err(|e| anyhow!("CSS parse failed: {e}"))?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| anyhow!("CSS print failed: {e}"))?;
    Ok(result.code)
}

/// Minify HTML markup.
fn minify_html(source: &str) -> Result<String> {
    let minified = minify_html::minify(source.as_bytes(), &Cfg::spec_compliant());
    String::from_utf8(minified)
        .map_err(|_| anyhow!("HTML minifier produced non-UTF-8 output"))
}
