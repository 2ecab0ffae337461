//! Static export: the page shell and catalog as plain files, for hosting
//! without `toolshelf serve`.
//!
//! The page never loads `catalog.json`: the wasm bundle embeds its own copy.
//! The file is a data dump for other consumers, the same document that
//! `GET /api/v1/catalog` returns.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use toolshelf_core::page::{render_page, PageOptions};
use toolshelf_core::Catalog;

pub const INDEX_FILE: &str = "index.html";
/// Pretty-printed catalog dump; not read by the exported page.
pub const CATALOG_FILE: &str = "catalog.json";

/// What [`export_site`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub files: Vec<PathBuf>,
    pub tools: usize,
}

/// Write `index.html` and `catalog.json` into `out_dir`, creating it if needed.
///
/// The wasm bundle (`pkg/`) and the tool files (`tools/`) are not copied; they
/// are expected next to the exported page.
pub fn export_site(catalog: &Catalog, out_dir: &Path) -> Result<ExportSummary> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let index_path = out_dir.join(INDEX_FILE);
    let page = render_page(catalog, &PageOptions::default());
    fs::write(&index_path, page)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    let catalog_path = out_dir.join(CATALOG_FILE);
    let json = serde_json::to_string_pretty(catalog).context("Failed to serialize catalog")?;
    fs::write(&catalog_path, json)
        .with_context(|| format!("Failed to write {}", catalog_path.display()))?;

    tracing::info!(dir = %out_dir.display(), "Exported static site");

    Ok(ExportSummary {
        files: vec![index_path, catalog_path],
        tools: catalog.tool_count(),
    })
}
