//! Shield Test Utils

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use css_shield::RuleRewriter;

/// Rewritten rule blocks of `css`, without the generated header.
#[allow(dead_code)]
pub fn shield_rules(css: &str, prefix: &str) -> String {
    RuleRewriter::new(prefix).rewrite_rules(css)
}

/// Complete generated stylesheet for `css`.
#[allow(dead_code)]
pub fn shield_stylesheet(css: &str, prefix: &str) -> String {
    RuleRewriter::new(prefix).rewrite_stylesheet(css)
}

#[allow(dead_code)]
pub fn assert_contains(actual: &str, expected: &str) {
    assert!(
        actual.contains(expected),
        "Expected '{}' to contain '{}'",
        actual,
        expected
    );
}

#[allow(dead_code)]
pub fn assert_not_contains(actual: &str, expected: &str) {
    assert!(
        !actual.contains(expected),
        "Expected '{}' to not contain '{}'",
        actual,
        expected
    );
}

// Scratch directory removed on drop
#[allow(dead_code)]
pub struct TempDir {
    path: PathBuf,
}

#[allow(dead_code)]
impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let mut path = env::temp_dir();
        let unique = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        path.push(format!(
            "css_shield_test_{}_{}_{}",
            prefix,
            std::process::id(),
            unique
        ));
        fs::create_dir_all(&path).expect("Failed to create temp dir");
        TempDir { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let file = self.join(name);
        fs::write(&file, content).expect("Failed to write fixture");
        file
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
