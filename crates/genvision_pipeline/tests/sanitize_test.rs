//! Tests for response sanitization.

use genvision_core::ModelResponse;
use genvision_pipeline::{sanitize, sanitize_text};

#[test]
fn test_trailing_tag_stripped_case_insensitively() {
    assert_eq!(sanitize_text("  hello world </DIV>  "), "hello world");
    assert_eq!(sanitize_text("hello</div>"), "hello");
    assert_eq!(sanitize_text("hello</Div>\n\n"), "hello");
}

#[test]
fn test_interior_tag_untouched() {
    assert_eq!(sanitize_text("hello </div> world"), "hello </div> world");
    assert_eq!(
        sanitize_text("<div><b>bold</b></div> and more"),
        "<div><b>bold</b></div> and more"
    );
}

#[test]
fn test_only_one_trailing_tag_removed() {
    assert_eq!(sanitize_text("text</div></div>"), "text</div>");
}

#[test]
fn test_other_closing_tags_untouched() {
    assert_eq!(sanitize_text("item</span>"), "item</span>");
    assert_eq!(sanitize_text("cell</divx>"), "cell</divx>");
}

#[test]
fn test_empty_and_whitespace_input() {
    assert_eq!(sanitize_text(""), "");
    assert_eq!(sanitize_text("   \n"), "");
    assert_eq!(sanitize_text("</div>"), "");
}

#[test]
fn test_idempotent_without_tag() {
    let once = sanitize_text("no tag here");
    assert_eq!(once, "no tag here");
    assert_eq!(sanitize_text(&once), once);
}

#[test]
fn test_sanitize_wraps_response() {
    let response = ModelResponse::new("A cat.</div>\n");
    let sanitized = sanitize(&response);
    assert_eq!(sanitized.display_text(), "A cat.");
    assert_eq!(sanitized.to_string(), "A cat.");
}

#[test]
fn test_markdown_passes_through() {
    let raw = "## Summary\n\n* a **cat** on a mat\n";
    assert_eq!(sanitize_text(raw), "## Summary\n\n* a **cat** on a mat");
}
