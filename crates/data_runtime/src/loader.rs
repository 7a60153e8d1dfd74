//! File loading helpers that resolve paths under the workspace `data/` tree.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Prefer the top-level workspace `data/` so tests and tools can run from
/// any crate directory.
pub fn data_root() -> PathBuf {
    let here = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() {
        ws
    } else {
        here.join("data")
    }
}

/// Read a raw text file under `data/` and return its contents.
pub fn read_text(rel: impl AsRef<Path>) -> Result<String> {
    let path = data_root().join(rel);
    let s = fs::read_to_string(&path).with_context(|| format!("read data: {}", path.display()))?;
    Ok(s)
}
