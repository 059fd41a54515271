//! Asset conversion pipeline: resolve, minify, compress, emit.

mod compress;
mod context;
mod header;
mod kind;
mod minify;
mod process;
mod scan;

// Types
pub use context::ConvertContext;
pub use kind::AssetKind;

// Pipeline steps
pub use compress::{Compressed, compress};
pub use minify::minify;

// Entry points
pub use process::process_file;
pub use scan::process_dir;
