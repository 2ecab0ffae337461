//! Toolshelf host: serves the tool catalog page, its wasm bundle and the tool
//! files, and offers terminal views of the same catalog.

pub mod api;
pub mod config;
pub mod export;
pub mod tree_render;
