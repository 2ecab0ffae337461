//! The shared tool info modal.

use crate::catalog::Tool;
use crate::escape::escape_html;
use crate::tree::CatalogTree;

/// How the modal treats a tool's detail markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailMarkup {
    /// Catalog authors write the detail as HTML; insert it as is.
    #[default]
    Trusted,
    /// Show the detail as text. For catalogs from untrusted sources.
    Escaped,
}

/// What the modal shows while open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    /// Plain text, to be set as text content.
    pub title: String,
    /// Markup, to be set as inner HTML.
    pub body_html: String,
}

/// User input that can close the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    CloseClicked,
    BackdropClicked,
    /// A key press, by its `KeyboardEvent.key` value.
    KeyDown(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoModal {
    markup: DetailMarkup,
    content: Option<ModalContent>,
}

impl InfoModal {
    pub fn new(markup: DetailMarkup) -> Self {
        Self {
            markup,
            content: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    /// Open the modal on `tool`, replacing whatever it showed before.
    pub fn show(&mut self, tool: &Tool) {
        let body_html = match self.markup {
            DetailMarkup::Trusted => tool.detail.clone(),
            DetailMarkup::Escaped => escape_html(&tool.detail),
        };
        self.content = Some(ModalContent {
            title: tool.name.clone(),
            body_html,
        });
    }

    /// Open the modal on the tool at `index` of `tree`.
    ///
    /// Unknown indexes leave the modal untouched and return `false`.
    pub fn show_row(&mut self, tree: &CatalogTree<'_>, index: usize) -> bool {
        match tree.row(index) {
            Some(row) => {
                self.show(row.tool);
                true
            }
            None => {
                tracing::debug!(index, "Info requested for unknown row");
                false
            }
        }
    }

    /// Hide the modal. Returns whether it was visible.
    pub fn close(&mut self) -> bool {
        self.content.take().is_some()
    }

    /// Apply one input event. Returns whether the modal closed.
    pub fn handle(&mut self, event: ModalEvent) -> bool {
        match event {
            ModalEvent::CloseClicked | ModalEvent::BackdropClicked => self.close(),
            ModalEvent::KeyDown(key) if key == "Escape" && self.is_visible() => self.close(),
            ModalEvent::KeyDown(_) => false,
        }
    }
}
