//! Shield
//!
//! Reads a stylesheet, rewrites it with [`RuleRewriter`] and writes the
//! result. A missing input file is reported and skipped; every other I/O
//! failure is returned to the caller.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::ShieldConfig;
use crate::error::{Result, ShieldError};
use crate::rule_rewriter::{scan_rule_blocks, RuleRewriter};

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShieldOutcome {
    /// The output file was written with `blocks` rewritten rule blocks.
    Written { output: PathBuf, blocks: usize },
    /// The input file does not exist; nothing was written.
    InputMissing { input: PathBuf },
}

impl ShieldOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, ShieldOutcome::Written { .. })
    }
}

/// Shield the stylesheet at `input` under `prefix` and write it to `output`.
pub fn shield_css_file(input: &Path, output: &Path, prefix: &str) -> Result<ShieldOutcome> {
    let css = match fs::read_to_string(input) {
        Ok(css) => css,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::error!("input stylesheet '{}' was not found", input.display());
            return Ok(ShieldOutcome::InputMissing {
                input: input.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ShieldError::Read {
                path: input.to_path_buf(),
                source,
            })
        }
    };

    let blocks = scan_rule_blocks(&css);
    log::debug!(
        "found {} rule blocks in '{}'",
        blocks.len(),
        input.display()
    );

    let shielded = RuleRewriter::new(prefix).render(&blocks);

    fs::write(output, shielded).map_err(|source| ShieldError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    log::info!(
        "wrote {} rule blocks scoped under '{}' to '{}'",
        blocks.len(),
        prefix,
        output.display()
    );

    Ok(ShieldOutcome::Written {
        output: output.to_path_buf(),
        blocks: blocks.len(),
    })
}

pub fn shield_with_config(config: &ShieldConfig) -> Result<ShieldOutcome> {
    shield_css_file(&config.input, &config.output, &config.prefix)
}
