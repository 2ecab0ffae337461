//! ASCII tree rendering of the catalog for the terminal.

use toolshelf_core::{Catalog, Tool};

const DUPLICATE: char = '↔';

/// Render the catalog as a box-drawing tree.
///
/// Example output:
/// ```text
/// 01_recon_enum — Reconnaissance & Enumeration
/// ├── wordlists/
/// │   ├── big.txt: Large general-purpose wordlist
/// │   └── common.txt: Common directory & file names
/// └── network_utilities/
///     └── chisel: Tunneling for pivoting ↔ from 01
/// ```
pub fn render_tree(catalog: &Catalog) -> String {
    let mut output = String::new();
    for phase in &catalog.phases {
        output.push_str(&phase.name);
        output.push('\n');

        for (i, category) in phase.categories.iter().enumerate() {
            let is_last = i == phase.categories.len() - 1;
            let branch = if is_last { "└── " } else { "├── " };
            output.push_str(branch);
            output.push_str(&category.label);
            output.push('\n');

            let prefix = if is_last { "    " } else { "│   " };
            for (j, tool) in category.tools.iter().enumerate() {
                let tool_is_last = j == category.tools.len() - 1;
                render_tool(&mut output, tool, prefix, tool_is_last);
            }
        }
    }
    output
}

fn render_tool(output: &mut String, tool: &Tool, prefix: &str, is_last: bool) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(prefix);
    output.push_str(branch);
    output.push_str(&tool.name);
    output.push_str(": ");
    output.push_str(&tool.description);
    if let Some(note) = &tool.duplicate_of {
        output.push(' ');
        output.push(DUPLICATE);
        output.push(' ');
        output.push_str(note);
    }
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolshelf_core::{Category, Phase};

    fn make_tool(name: &str, duplicate_of: Option<&str>) -> Tool {
        Tool {
            name: name.to_string(),
            description: "desc".to_string(),
            file: None,
            detail: String::new(),
            tags: vec![],
            phase: "01".to_string(),
            duplicate_of: duplicate_of.map(str::to_string),
        }
    }

    fn make_phase(name: &str, categories: Vec<(&str, Vec<Tool>)>) -> Phase {
        Phase {
            name: name.to_string(),
            categories: categories
                .into_iter()
                .map(|(label, tools)| Category {
                    label: label.to_string(),
                    tools,
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(render_tree(&Catalog::default()), "");
    }

    #[test]
    fn test_single_phase_without_categories() {
        let catalog = Catalog {
            phases: vec![make_phase("01_recon_enum — Recon", vec![])],
        };
        assert_eq!(render_tree(&catalog), "01_recon_enum — Recon\n");
    }

    #[test]
    fn test_categories_and_tools() {
        let catalog = Catalog {
            phases: vec![make_phase(
                "01_recon_enum — Recon",
                vec![
                    (
                        "wordlists/",
                        vec![make_tool("big.txt", None), make_tool("common.txt", None)],
                    ),
                    ("network_utilities/", vec![make_tool("chisel", Some("from 01"))]),
                ],
            )],
        };
        let expected = "01_recon_enum — Recon\n\
                        ├── wordlists/\n\
                        │   ├── big.txt: desc\n\
                        │   └── common.txt: desc\n\
                        └── network_utilities/\n    \
                        └── chisel: desc ↔ from 01\n";
        assert_eq!(render_tree(&catalog), expected);
    }

    #[test]
    fn test_multiple_phases() {
        let catalog = Catalog {
            phases: vec![
                make_phase("01 — A", vec![("x/", vec![make_tool("a", None)])]),
                make_phase("02 — B", vec![("y/", vec![make_tool("b", None)])]),
            ],
        };
        assert_eq!(
            render_tree(&catalog),
            "01 — A\n└── x/\n    └── a: desc\n02 — B\n└── y/\n    └── b: desc\n"
        );
    }
}
