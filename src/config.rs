//! Server configuration: defaults, then environment, then command-line flags.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

/// Settings for `toolshelf serve`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/tools`, holding the downloadable files.
    pub tools_dir: PathBuf,
    /// Directory served under `/pkg`, holding the wasm-pack output.
    pub pkg_dir: PathBuf,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            tools_dir: PathBuf::from("./tools"),
            pkg_dir: PathBuf::from("./pkg"),
        }
    }
}

impl ServeConfig {
    /// Defaults overlaid with `TOOLSHELF_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`ServeConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("TOOLSHELF_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("TOOLSHELF_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: "TOOLSHELF_PORT",
                value: port.clone(),
            })?;
        }
        if let Some(dir) = lookup("TOOLSHELF_TOOLS_DIR") {
            config.tools_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("TOOLSHELF_PKG_DIR") {
            config.pkg_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Apply command-line overrides; `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        tools_dir: Option<PathBuf>,
        pkg_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(dir) = tools_dir {
            self.tools_dir = dir;
        }
        if let Some(dir) = pkg_dir {
            self.pkg_dir = dir;
        }
        self
    }

    /// `host:port`, as passed to the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
