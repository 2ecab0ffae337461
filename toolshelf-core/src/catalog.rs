//! The tool catalog: phases, categories and tools.
//!
//! The catalog is authored content compiled into the crate. It is parsed once
//! and never mutated; every view of it (the rendered tree, the modal, the HTTP
//! API) borrows from the same value.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The catalog document compiled into the crate.
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// Separator between a phase slug and its human-readable title.
const PHASE_TITLE_SEPARATOR: &str = " — ";

/// One downloadable tool or wordlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
    /// One-line summary shown in the tool row.
    pub description: String,
    /// Asset file name, relative to the tools directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Usage notes as an HTML fragment. Authored markup, rendered verbatim.
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Slug of the owning phase.
    pub phase: String,
    /// Where else this tool appears, e.g. `from 04/linux`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_of: Option<String>,
}

/// A directory-like grouping of tools within a phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Grouping label such as `wordlists/`. Not unique across phases.
    pub label: String,
    pub tools: Vec<Tool>,
}

/// A stage of the engagement lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phase {
    /// `<slug> — <title>`, e.g. `01_recon_enum — Reconnaissance & Enumeration`.
    pub name: String,
    pub categories: Vec<Category>,
}

impl Phase {
    /// The slug part of the name (`01_recon_enum`).
    pub fn slug(&self) -> &str {
        match self.name.split_once(PHASE_TITLE_SEPARATOR) {
            Some((slug, _)) => slug.trim(),
            None => self.name.trim(),
        }
    }

    /// The human-readable part of the name, or the whole name if it has no slug.
    pub fn title(&self) -> &str {
        match self.name.split_once(PHASE_TITLE_SEPARATOR) {
            Some((_, title)) => title.trim(),
            None => self.name.trim(),
        }
    }
}

/// The whole catalog, in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub phases: Vec<Phase>,
}

impl Catalog {
    /// Parse the catalog compiled into the crate.
    pub fn embedded() -> Result<Self> {
        let catalog = Self::from_json(EMBEDDED_CATALOG)?;
        tracing::debug!(
            phases = catalog.phases.len(),
            tools = catalog.tool_count(),
            "Loaded embedded catalog"
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Every tool in phase, then category, then item order.
    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.phases
            .iter()
            .flat_map(|phase| phase.categories.iter())
            .flat_map(|category| category.tools.iter())
    }

    pub fn tool_count(&self) -> usize {
        self.tools().count()
    }

    /// First tool with exactly this name, in render order.
    pub fn find_tool(&self, name: &str) -> Option<&Tool> {
        self.tools().find(|tool| tool.name == name)
    }
}
