//! Rule Rewriter
//!
//! Scopes the rule blocks of a flat stylesheet under a wrapper selector and
//! marks every declaration `!important`, so the rules can be injected into a
//! host page without losing to the host's own styles.
//!
//! Blocks are found with a brace-bounded pattern, not a CSS parser. Nested
//! braces, comments and at-rules other than a single `@media` level are not
//! understood.

use once_cell::sync::Lazy;
use regex::Regex;

/// Suffix appended to every declaration that does not carry it yet.
pub const IMPORTANT_MARKER: &str = "!important";

/// Header written at the top of every generated stylesheet.
pub const GENERATED_HEADER: &str = "/* CSS Blindado Automaticamente para WordPress */\n\n";

/// Page-global selectors that collapse onto the wrapper element itself.
pub const GLOBAL_SELECTORS: &[&str] = &["body", "html", "*"];

// Pattern: (@media[^{]+{)?([^@}]+){([^}]+)}
// 1 = media header including its opening brace, 2 = selectors, 3 = declarations
static RULE_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(@media[^{]+\{)?([^@}]+)\{([^}]+)\}").unwrap());

/// A single matched rule block.
///
/// `selectors` and `declarations` are trimmed; `media` is the raw header as
/// matched, opening brace included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleBlock {
    pub media: Option<String>,
    pub selectors: String,
    pub declarations: String,
}

impl RuleBlock {
    pub fn new(media: Option<String>, selectors: String, declarations: String) -> Self {
        RuleBlock {
            media,
            selectors,
            declarations,
        }
    }
}

/// Scan `css` for rule blocks, left to right, without overlap.
pub fn scan_rule_blocks(css: &str) -> Vec<RuleBlock> {
    RULE_BLOCK_RE
        .captures_iter(css)
        .map(|caps| block_from_captures(&caps))
        .collect()
}

/// Run `block_callback` on every rule block and concatenate what it returns,
/// in match order. Text between blocks is dropped.
pub fn process_rule_blocks<F>(css: &str, mut block_callback: F) -> String
where
    F: FnMut(RuleBlock) -> String,
{
    let mut result = String::new();
    for caps in RULE_BLOCK_RE.captures_iter(css) {
        result.push_str(&block_callback(block_from_captures(&caps)));
    }
    result
}

fn block_from_captures(caps: &regex::Captures) -> RuleBlock {
    let media = caps
        .get(1)
        .map(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(str::to_string);
    let selectors = caps.get(2).map(|m| m.as_str()).unwrap_or("").trim();
    let declarations = caps.get(3).map(|m| m.as_str()).unwrap_or("").trim();
    RuleBlock::new(media, selectors.to_string(), declarations.to_string())
}

/// Mark every declaration in a `;`-separated list as important.
///
/// Empty pieces are dropped and declarations that already contain the marker
/// are left alone. The result always ends with `;`, even when no declaration
/// survives.
pub fn mark_important(declarations: &str) -> String {
    let marked: Vec<String> = declarations
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .map(|decl| {
            if decl.contains(IMPORTANT_MARKER) {
                decl.to_string()
            } else {
                format!("{} {}", decl, IMPORTANT_MARKER)
            }
        })
        .collect();
    format!("{};", marked.join("; "))
}

/// True for `body`, `html` and `*`, in any case.
pub fn is_global_selector(selector: &str) -> bool {
    let lowered = selector.to_lowercase();
    GLOBAL_SELECTORS.contains(&lowered.as_str())
}

/// Scope every selector in a `,`-separated list under `prefix`.
///
/// Global selectors are replaced by the prefix itself; everything else becomes
/// a descendant of it.
pub fn scope_selectors(selectors: &str, prefix: &str) -> String {
    selectors
        .split(',')
        .map(str::trim)
        .filter(|selector| !selector.is_empty())
        .map(|selector| {
            if is_global_selector(selector) {
                prefix.to_string()
            } else {
                format!("{} {}", prefix, selector)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rewrites stylesheets for a fixed wrapper prefix.
#[derive(Clone, Debug)]
pub struct RuleRewriter {
    prefix: String,
}

impl RuleRewriter {
    pub fn new(prefix: impl Into<String>) -> Self {
        RuleRewriter {
            prefix: prefix.into(),
        }
    }

    /// Format one block as a single output line.
    ///
    /// A media header is emitted in front of the scoped rule as matched, so the
    /// block it opened is never closed in the output.
    pub fn rewrite_block(&self, block: &RuleBlock) -> String {
        let selectors = scope_selectors(&block.selectors, &self.prefix);
        let declarations = mark_important(&block.declarations);
        match &block.media {
            Some(media) => format!("{} {} {{ {} }}\n", media, selectors, declarations),
            None => format!("{} {{ {} }}\n", selectors, declarations),
        }
    }

    /// Rewrite every rule block in `css`, without the generated header.
    pub fn rewrite_rules(&self, css: &str) -> String {
        process_rule_blocks(css, |block| self.rewrite_block(&block))
    }

    /// Render already scanned blocks as a complete generated stylesheet.
    pub fn render(&self, blocks: &[RuleBlock]) -> String {
        let mut output = String::from(GENERATED_HEADER);
        for block in blocks {
            output.push_str(&self.rewrite_block(block));
        }
        output
    }

    /// Rewrite `css` into a complete generated stylesheet.
    pub fn rewrite_stylesheet(&self, css: &str) -> String {
        self.render(&scan_rule_blocks(css))
    }
}
