#![forbid(unsafe_code)]

//! Core of Toolshelf, a browsable catalog of penetration-testing tools and
//! wordlists.
//!
//! The catalog is compiled in ([`Catalog::embedded`]) and rendered as nested
//! collapsible sections: phase, then category, then one row per tool. Each row
//! has an info action that opens a shared modal with the tool's usage notes and
//! a download action that fetches the tool's file from the tools directory.
//!
//! Everything except the `web` module is plain Rust and runs on any target.
//! `web` is the wasm-bindgen entry point that drives a real page, and is only
//! built for `wasm32`.

pub mod boot;
pub mod catalog;
pub mod disclosure;
pub mod download;
pub mod error;
pub mod escape;
pub mod modal;
pub mod page;
pub mod tree;

#[cfg(target_arch = "wasm32")]
mod web;

pub use catalog::{Catalog, Category, Phase, Tool};
pub use disclosure::{Disclosure, Expansion, NodeId};
pub use download::DownloadLink;
pub use error::{Error, Result};
pub use escape::escape_html;
pub use modal::{DetailMarkup, InfoModal, ModalContent, ModalEvent};
pub use tree::{render, CatalogTree, ToolRow};
