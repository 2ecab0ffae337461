//! Download links for tool assets.

use serde::Serialize;

/// Directory the page expects tool files in, relative to the page.
pub const ASSET_DIR: &str = "./tools/";

/// Target of a browser download: where to fetch, and the suggested save name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadLink {
    pub href: String,
    pub save_as: String,
}

impl DownloadLink {
    /// Link for a tool's asset file. `None` when there is nothing to download.
    pub fn for_file(file: Option<&str>) -> Option<Self> {
        Self::with_prefix(ASSET_DIR, file)
    }

    pub fn with_prefix(prefix: &str, file: Option<&str>) -> Option<Self> {
        let clean = file?.trim_start_matches(['/', '\\']);
        if clean.is_empty() {
            return None;
        }

        Some(Self {
            href: format!("{}{}", prefix, clean),
            save_as: clean.to_string(),
        })
    }
}
