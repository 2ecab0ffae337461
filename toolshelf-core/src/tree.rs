//! Rendering of the catalog into nested collapsible sections.
//!
//! A render pass walks the catalog once, phase by phase, category by category,
//! and gives every tool the next row index starting at 0. The resulting
//! [`CatalogTree`] owns those rows; a new render starts a new tree and a new
//! numbering, so indexes from an old tree are meaningless for a new one.
//!
//! Markup produced by [`CatalogTree::to_html`] escapes every catalog string it
//! shows. Tool detail markup is not part of the tree; it only ever reaches the
//! info modal. [`CatalogTree::to_static_html`] is the same tree for pages
//! without scripting: downloads are plain links and there is no info action.

use std::fmt::Write;

use crate::catalog::{Catalog, Category, Phase, Tool};
use crate::disclosure::{Disclosure, Expansion, NodeId};
use crate::download::DownloadLink;
use crate::escape::escape_html;

/// A phase section and its categories.
#[derive(Debug, Clone)]
pub struct PhaseNode<'a> {
    pub phase: &'a Phase,
    pub disclosure: Disclosure,
    pub categories: Vec<CategoryNode<'a>>,
}

/// A category section and its tool rows.
#[derive(Debug, Clone)]
pub struct CategoryNode<'a> {
    pub category: &'a Category,
    pub disclosure: Disclosure,
    pub rows: Vec<ToolRow<'a>>,
}

/// One tool row, bound to the tool it was rendered from.
#[derive(Debug, Clone, Copy)]
pub struct ToolRow<'a> {
    /// Position of this row in render order.
    pub index: usize,
    pub tool: &'a Tool,
}

impl<'a> ToolRow<'a> {
    /// Where the download action of this row points, if anywhere.
    pub fn download(&self) -> Option<DownloadLink> {
        DownloadLink::for_file(self.tool.file.as_deref())
    }
}

/// Output of one render pass.
#[derive(Debug, Clone)]
pub struct CatalogTree<'a> {
    phases: Vec<PhaseNode<'a>>,
    rows: Vec<ToolRow<'a>>,
}

/// Render `catalog` into a fresh tree with initial disclosure from `expansion`.
pub fn render<'a>(catalog: &'a Catalog, expansion: &Expansion) -> CatalogTree<'a> {
    let mut rows = Vec::new();
    let mut next_index = 0usize;

    let phases = catalog
        .phases
        .iter()
        .map(|phase| PhaseNode {
            phase,
            disclosure: expansion.phase(phase),
            categories: phase
                .categories
                .iter()
                .map(|category| {
                    let category_rows: Vec<ToolRow<'a>> = category
                        .tools
                        .iter()
                        .map(|tool| {
                            let row = ToolRow {
                                index: next_index,
                                tool,
                            };
                            next_index += 1;
                            row
                        })
                        .collect();
                    rows.extend(category_rows.iter().copied());
                    CategoryNode {
                        category,
                        disclosure: expansion.category(phase, category),
                        rows: category_rows,
                    }
                })
                .collect(),
        })
        .collect::<Vec<_>>();

    tracing::debug!(phases = phases.len(), rows = rows.len(), "Rendered catalog tree");

    CatalogTree { phases, rows }
}

impl<'a> CatalogTree<'a> {
    pub fn phases(&self) -> &[PhaseNode<'a>] {
        &self.phases
    }

    /// All rows in render order; `rows()[i].index == i`.
    pub fn rows(&self) -> &[ToolRow<'a>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&ToolRow<'a>> {
        self.rows.get(index)
    }

    fn disclosure_mut(&mut self, node: NodeId) -> Option<&mut Disclosure> {
        match node {
            NodeId::Phase(p) => self.phases.get_mut(p).map(|n| &mut n.disclosure),
            NodeId::Category(p, c) => self
                .phases
                .get_mut(p)
                .and_then(|n| n.categories.get_mut(c))
                .map(|n| &mut n.disclosure),
        }
    }

    /// Toggle one node. Returns its new state, or `None` for an unknown node.
    pub fn toggle(&mut self, node: NodeId) -> Option<bool> {
        self.disclosure_mut(node).map(Disclosure::toggle)
    }

    pub fn is_open(&self, node: NodeId) -> Option<bool> {
        match node {
            NodeId::Phase(p) => self.phases.get(p).map(|n| n.disclosure.open),
            NodeId::Category(p, c) => self
                .phases
                .get(p)
                .and_then(|n| n.categories.get(c))
                .map(|n| n.disclosure.open),
        }
    }

    /// Every node currently expanded, in document order.
    pub fn open_nodes(&self) -> Vec<NodeId> {
        let mut open = Vec::new();
        for (p, phase) in self.phases.iter().enumerate() {
            if phase.disclosure.open {
                open.push(NodeId::Phase(p));
            }
            for (c, category) in phase.categories.iter().enumerate() {
                if category.disclosure.open {
                    open.push(NodeId::Category(p, c));
                }
            }
        }
        open
    }

    /// Markup for the tools container. Action buttons are inert until the
    /// browser glue binds them by `data-row`.
    pub fn to_html(&self) -> String {
        self.write_html(RowActions::Buttons)
    }

    /// Markup that works without scripting: each download is an `<a download>`
    /// link and rows without a file have no action.
    pub fn to_static_html(&self) -> String {
        self.write_html(RowActions::Links)
    }

    fn write_html(&self, actions: RowActions) -> String {
        let mut html = String::new();
        for (p, phase) in self.phases.iter().enumerate() {
            let _ = write!(
                html,
                "<div class=\"{}\" data-phase=\"{}\">\n<div class=\"phase-header\">{}</div>\n<div class=\"phase-content\">\n",
                phase.disclosure.class("phase"),
                p,
                escape_html(&phase.phase.name)
            );
            for (c, category) in phase.categories.iter().enumerate() {
                let _ = write!(
                    html,
                    "<div class=\"{}\" data-category=\"{}\">\n<div class=\"category-header\">{}</div>\n<div class=\"category-content\">\n",
                    category.disclosure.class("category"),
                    c,
                    escape_html(&category.category.label)
                );
                for row in &category.rows {
                    write_row(&mut html, row, actions);
                }
                html.push_str("</div>\n</div>\n");
            }
            html.push_str("</div>\n</div>\n");
        }
        html
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowActions {
    Buttons,
    Links,
}

fn write_row(html: &mut String, row: &ToolRow<'_>, actions: RowActions) {
    let tool = row.tool;
    let dup = match &tool.duplicate_of {
        Some(note) => format!("<span class=\"dup\">↔ {}</span>", escape_html(note)),
        None => String::new(),
    };
    let buttons = match actions {
        RowActions::Buttons => format!(
            "<button class=\"btn\" type=\"button\" data-action=\"info\" data-row=\"{index}\">ℹ️ Info</button>\n\
             <button class=\"btn\" type=\"button\" data-action=\"download\" data-row=\"{index}\">⬇️ Download</button>\n",
            index = row.index
        ),
        RowActions::Links => match row.download() {
            Some(link) => format!(
                "<a class=\"btn\" href=\"{}\" download=\"{}\">⬇️ Download</a>\n",
                escape_html(&link.href),
                escape_html(&link.save_as)
            ),
            None => String::new(),
        },
    };

    let _ = write!(
        html,
        "<div class=\"tool\" data-row=\"{index}\">\n\
         <div class=\"tool-info\">\n\
         <div><span class=\"tool-name\">{name}</span>{dup}</div>\n\
         <div class=\"desc\">{desc}</div>\n\
         </div>\n\
         <div class=\"tool-actions\">\n\
         {buttons}\
         </div>\n\
         </div>\n",
        index = row.index,
        name = escape_html(&tool.name),
        dup = dup,
        desc = escape_html(&tool.description),
        buttons = buttons,
    );
}
