//! Open/closed state of the collapsible tree sections.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Phase};

/// Address of a collapsible node in a rendered tree, by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeId {
    Phase(usize),
    Category(usize, usize),
}

/// Expanded/collapsed flag of one node. Nodes never share state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    pub open: bool,
}

impl Disclosure {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// CSS class list for the node element.
    pub fn class(&self, base: &'static str) -> String {
        if self.open {
            format!("{} open", base)
        } else {
            base.to_string()
        }
    }
}

/// Which nodes start expanded after a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// Phases whose name contains `phase_marker` start open. Inside an open
    /// phase, categories labelled exactly `category_label` start open.
    Marked {
        phase_marker: String,
        category_label: String,
    },
    /// Every node starts open, for clients that cannot toggle.
    AllOpen,
}

impl Default for Expansion {
    fn default() -> Self {
        Self::marked("01_recon_enum", "wordlists/")
    }
}

impl Expansion {
    pub fn marked(phase_marker: impl Into<String>, category_label: impl Into<String>) -> Self {
        Self::Marked {
            phase_marker: phase_marker.into(),
            category_label: category_label.into(),
        }
    }

    pub fn all_open() -> Self {
        Self::AllOpen
    }

    pub fn phase(&self, phase: &Phase) -> Disclosure {
        match self {
            Self::Marked { phase_marker, .. } => {
                Disclosure::new(phase.name.contains(phase_marker.as_str()))
            }
            Self::AllOpen => Disclosure::new(true),
        }
    }

    pub fn category(&self, phase: &Phase, category: &Category) -> Disclosure {
        let open = match self {
            Self::Marked { category_label, .. } => {
                self.phase(phase).open && category.label == *category_label
            }
            Self::AllOpen => true,
        };
        Disclosure::new(open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(name: &str, labels: &[&str]) -> Phase {
        Phase {
            name: name.to_string(),
            categories: labels
                .iter()
                .map(|l| Category {
                    label: l.to_string(),
                    tools: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn toggle_flips_state() {
        let mut d = Disclosure::default();
        assert!(d.toggle());
        assert!(!d.toggle());
    }

    #[test]
    fn class_includes_open_only_when_expanded() {
        assert_eq!(Disclosure::new(false).class("phase"), "phase");
        assert_eq!(Disclosure::new(true).class("phase"), "phase open");
    }

    #[test]
    fn default_expansion_opens_first_phase_and_category() {
        let expansion = Expansion::default();
        let recon = phase("01_recon_enum — Recon", &["wordlists/", "network_utilities/"]);
        let privesc = phase("04_privesc — Privilege Escalation", &["wordlists/"]);

        assert!(expansion.phase(&recon).open);
        assert!(expansion.category(&recon, &recon.categories[0]).open);
        assert!(!expansion.category(&recon, &recon.categories[1]).open);

        assert!(!expansion.phase(&privesc).open);
        assert!(!expansion.category(&privesc, &privesc.categories[0]).open);
    }

    #[test]
    fn all_open_expands_everything() {
        let expansion = Expansion::all_open();
        let p = phase("04_privesc — Privilege Escalation", &["linux/"]);
        assert!(expansion.phase(&p).open);
        assert!(expansion.category(&p, &p.categories[0]).open);
    }

    #[test]
    fn empty_phase_marker_only_opens_matching_categories() {
        let expansion = Expansion::marked("", "x");
        let p = phase("04_privesc — Privilege Escalation", &["linux/", "x"]);
        assert!(expansion.phase(&p).open);
        assert!(!expansion.category(&p, &p.categories[0]).open);
        assert!(expansion.category(&p, &p.categories[1]).open);
    }
}
