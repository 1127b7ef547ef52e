//! Configuration
//!
//! Input path, output path and wrapper prefix for one run. Defaults are the
//! WordPress template layout; a `css-shield.json` file can override any of
//! them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// File looked up by [`ShieldConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "css-shield.json";

pub const DEFAULT_INPUT: &str = "template_base/style.css";
pub const DEFAULT_OUTPUT: &str = "template_base/style-wp.css";
pub const DEFAULT_PREFIX: &str = ".guto-article-wrapper";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShieldConfig {
    /// Stylesheet to read.
    pub input: PathBuf,
    /// Stylesheet to write, overwritten if present.
    pub output: PathBuf,
    /// Selector every rule is scoped under.
    pub prefix: String,
}

impl Default for ShieldConfig {
    fn default() -> Self {
        ShieldConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl ShieldConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        prefix: impl Into<String>,
    ) -> Self {
        ShieldConfig {
            input: input.into(),
            output: output.into(),
            prefix: prefix.into(),
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: ShieldConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Load `css-shield.json` from `dir` if it exists, defaults otherwise.
    ///
    /// Relative paths in the file stay relative to the working directory.
    pub fn discover(dir: &Path) -> anyhow::Result<Self> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            log::debug!("using config {}", candidate.display());
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
