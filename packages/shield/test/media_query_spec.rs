//! Media Query Tests
//!
//! A media header is kept verbatim and emitted in front of the first rule it
//! encloses. Later rules of the same media block are scoped without it.

mod utils;
use css_shield::rule_rewriter::scan_rule_blocks;
use utils::{assert_not_contains, shield_rules};

#[test]
fn should_keep_the_media_header_verbatim() {
    let css = "@media (max-width: 600px) { .a { color: red } }";
    assert_eq!(
        shield_rules(css, ".wrap"),
        "@media (max-width: 600px) { .wrap .a { color: red !important; }\n"
    );
}

#[test]
fn should_capture_the_header_with_its_opening_brace() {
    let blocks = scan_rule_blocks("@media print { .a { x: 1 } }");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].media.as_deref(), Some("@media print {"));
    assert_eq!(blocks[0].selectors, ".a");
    assert_eq!(blocks[0].declarations, "x: 1");
}

#[test]
fn should_flatten_later_rules_of_a_media_block() {
    let css = "@media print { .a { x: 1 } .b { y: 2 } }";
    assert_eq!(
        shield_rules(css, ".wrap"),
        "@media print { .wrap .a { x: 1 !important; }\n.wrap .b { y: 2 !important; }\n"
    );
}

#[test]
fn should_not_add_a_closing_brace_for_the_media_block() {
    let output = shield_rules("@media screen { body { margin: 0 } }", ".wrap");
    assert_eq!(output, "@media screen { .wrap { margin: 0 !important; }\n");
    assert_not_contains(&output, "} }");
}

#[test]
fn should_handle_plain_rules_before_a_media_block() {
    let css = ".x { a: b }\n@media screen { .y { c: d } }\n";
    assert_eq!(
        shield_rules(css, ".wrap"),
        ".wrap .x { a: b !important; }\n@media screen { .wrap .y { c: d !important; }\n"
    );
}
