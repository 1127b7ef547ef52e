#![deny(clippy::all)]
//! CSS Shield
//!
//! Scopes a stylesheet under a wrapper selector and forces its declarations
//! with `!important`, for injection into pages that ship their own styles.

pub mod config;
pub mod error;
pub mod rule_rewriter;
pub mod shield;
mod version;

// Re-exports
pub use config::ShieldConfig;
pub use error::{Result, ShieldError};
pub use rule_rewriter::{RuleBlock, RuleRewriter};
pub use shield::{shield_css_file, shield_with_config, ShieldOutcome};
pub use version::{version_string, VERSION};
