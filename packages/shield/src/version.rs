//! Version

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version banner printed by the binary.
pub fn version_string() -> String {
    format!("CSS Shield v{}", VERSION)
}
