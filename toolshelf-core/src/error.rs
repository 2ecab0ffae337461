use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    /// A required element of the page shell is not in the document.
    #[error("missing page element: {0}")]
    MissingElement(&'static str),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// One-line report of this error while doing `action`.
    pub fn context(&self, action: &str) -> String {
        format!("{}: {}", action, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_names_the_action_and_the_dom_failure() {
        let err = Error::Dom("NotFoundError".to_string());
        assert_eq!(
            err.context("Failed to toggle section"),
            "Failed to toggle section: DOM operation failed: NotFoundError"
        );
    }

    #[test]
    fn context_keeps_the_missing_element() {
        let err = Error::MissingElement("body");
        assert_eq!(
            err.context("Download of ./tools/ncat failed to start"),
            "Download of ./tools/ncat failed to start: missing page element: body"
        );
    }
}
