//! The HTML page shell the browser glue attaches to.
//!
//! The ids and classes below are the contract between the shell and
//! the browser glue: the glue looks each one up at start-up.

use crate::catalog::Catalog;
use crate::disclosure::Expansion;
use crate::escape::escape_html;
use crate::tree;

pub const LOADER_ID: &str = "loader";
pub const APP_ID: &str = "app";
pub const MODAL_ID: &str = "infoModal";
/// Selector of the modal close control. The only optional element.
pub const MODAL_CLOSE_SELECTOR: &str = ".modal-close";
pub const MODAL_TITLE_ID: &str = "modalTitle";
pub const MODAL_BODY_ID: &str = "modalDescription";
pub const CONTAINER_ID: &str = "container";

/// Applied only when scripting is off: nothing will ever fade the loader out.
const NOSCRIPT_STYLE: &str = "#loader { display: none; }";

const STYLESHEET: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #121212; color: #e0e0e0; }
#loader { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; }
#app, .static { max-width: 960px; margin: 0 auto; padding: 24px; }
#app { display: none; }
.phase-header, .category-header { cursor: pointer; padding: 8px 0; }
.phase-header { font-size: 1.3rem; font-weight: 600; }
.category { margin-left: 16px; }
.phase-content, .category-content { display: none; }
.phase.open > .phase-content, .category.open > .category-content { display: block; }
.tool { display: flex; justify-content: space-between; gap: 12px; padding: 6px 0; }
.dup { margin-left: 8px; opacity: 0.7; font-size: 0.85rem; }
.desc { opacity: 0.8; }
.modal { display: none; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.7); }
.modal-content { max-width: 760px; margin: 8vh auto; padding: 24px; background: #1e1e1e; border-radius: 8px; }
.modal-close { float: right; cursor: pointer; font-size: 1.5rem; }
"#;

/// Settings for [`render_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    /// URL of the wasm-bindgen JS module that boots the page.
    pub script_src: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Toolshelf".to_string(),
            script_src: "./pkg/toolshelf_core.js".to_string(),
        }
    }
}

/// Render the full page document for `catalog`.
///
/// The `<noscript>` fallback sits outside `#app`, which stays hidden until the
/// glue reveals it. It carries the tree with every section expanded and plain
/// download links.
pub fn render_page(catalog: &Catalog, options: &PageOptions) -> String {
    let fallback = tree::render(catalog, &Expansion::all_open()).to_static_html();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
<noscript><style>{noscript_style}</style></noscript>
</head>
<body>
<div id="{loader}">Loading…</div>
<div id="{app}">
<h1>{title}</h1>
<div id="{container}"></div>
</div>
<noscript>
<div class="static">
<h1>{title}</h1>
{fallback}</div>
</noscript>
<div id="{modal}" class="modal">
<div class="modal-content">
<span class="modal-close">&times;</span>
<h2 id="{modal_title}"></h2>
<div id="{modal_body}"></div>
</div>
</div>
<script type="module">
import init from "{script}";
init();
</script>
</body>
</html>
"#,
        title = escape_html(&options.title),
        style = STYLESHEET,
        noscript_style = NOSCRIPT_STYLE,
        loader = LOADER_ID,
        app = APP_ID,
        container = CONTAINER_ID,
        fallback = fallback,
        modal = MODAL_ID,
        modal_title = MODAL_TITLE_ID,
        modal_body = MODAL_BODY_ID,
        script = escape_html(&options.script_src),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_contains_every_contract_element() {
        let catalog = Catalog::embedded().unwrap();
        let html = render_page(&catalog, &PageOptions::default());
        for id in [
            LOADER_ID,
            APP_ID,
            MODAL_ID,
            MODAL_TITLE_ID,
            MODAL_BODY_ID,
            CONTAINER_ID,
        ] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing #{}", id);
        }
        assert!(html.contains("class=\"modal-close\""));
        assert!(html.contains("import init from \"./pkg/toolshelf_core.js\";"));
    }

    #[test]
    fn tools_container_starts_empty() {
        let catalog = Catalog::embedded().unwrap();
        let html = render_page(&catalog, &PageOptions::default());
        assert!(html.contains("<div id=\"container\"></div>"));
    }

    #[test]
    fn noscript_fallback_has_every_section_open() {
        let catalog = Catalog::embedded().unwrap();
        let html = render_page(&catalog, &PageOptions::default());
        let categories: usize = catalog.phases.iter().map(|p| p.categories.len()).sum();
        assert_eq!(html.matches("class=\"category open\"").count(), categories);
        assert_eq!(html.matches("class=\"phase open\"").count(), catalog.phases.len());
    }

    #[test]
    fn title_is_escaped() {
        let html = render_page(
            &Catalog::default(),
            &PageOptions {
                title: "<Tools>".to_string(),
                ..PageOptions::default()
            },
        );
        assert!(html.contains("<title>&lt;Tools&gt;</title>"));
    }

    #[test]
    fn noscript_fallback_is_visible_without_scripting() {
        let catalog = Catalog::embedded().unwrap();
        let html = render_page(&catalog, &PageOptions::default());

        let head_end = html.find("</head>").unwrap();
        let hide_loader = html
            .find("<noscript><style>#loader { display: none; }</style></noscript>")
            .unwrap();
        assert!(hide_loader < head_end);

        let app_end = html.find("<div id=\"container\"></div>\n</div>\n").unwrap();
        let fallback_start = html.find("<noscript>\n<div class=\"static\">").unwrap();
        assert!(fallback_start > app_end);
        assert!(fallback_start < html.find("id=\"infoModal\"").unwrap());
        assert!(!STYLESHEET.contains(".static { display: none"));
    }

    #[test]
    fn noscript_fallback_downloads_are_links() {
        let catalog = Catalog::embedded().unwrap();
        let html = render_page(&catalog, &PageOptions::default());
        let start = html.find("<div class=\"static\">").unwrap();
        let end = start + html[start..].find("</noscript>").unwrap();
        let fallback = &html[start..end];

        assert!(fallback.contains("<a class=\"btn\" href=\"./tools/ncat\" download=\"ncat\">"));
        assert!(!fallback.contains("<button"));
    }
}
