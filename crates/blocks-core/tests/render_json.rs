//! Renders CMS-shaped JSON payloads end to end.

use blocks_core::{parse_blocks, render, render_value, ContentNode};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_page_body() {
    let body = json!([
        {
            "type": "heading",
            "level": 2,
            "children": [{ "type": "text", "text": "About us" }]
        },
        {
            "type": "paragraph",
            "children": [
                { "type": "text", "text": "We build " },
                { "type": "text", "text": "websites", "bold": true },
                { "type": "text", "text": ". Read the " },
                {
                    "type": "link",
                    "url": "https://example.com/blog",
                    "children": [{ "type": "text", "text": "blog" }]
                },
                { "type": "text", "text": "." }
            ]
        },
        {
            "type": "list",
            "format": "ordered",
            "children": [
                { "type": "list-item", "children": [{ "type": "text", "text": "Design" }] },
                { "type": "list-item", "children": [{ "type": "text", "text": "Build", "bold": true }] }
            ]
        },
        {
            "type": "image",
            "image": {
                "url": "/uploads/team.jpg",
                "alternativeText": "Our team",
                "caption": "Summer 2024",
                "width": 1200,
                "height": 800
            },
            "children": [{ "type": "text", "text": "" }]
        },
        {
            "type": "quote",
            "children": [{ "type": "text", "text": "Less is more." }]
        }
    ]);

    let expected = concat!(
        "<h2>About us</h2>",
        "<p>We build <strong>websites</strong>. Read the <a href=\"https://example.com/blog\">blog</a>.</p>",
        "<ol><li>Design</li><li><strong>Build</strong></li></ol>",
        "<img src=\"/uploads/team.jpg\" alt=\"Our team\" width=\"1200\" height=\"800\" />",
        "<blockquote>Less is more.</blockquote>",
    );

    let result = render_value(&body);
    assert_eq!(result, expected);
    assert!(!result.contains("Summer 2024"));
}

#[test]
fn test_unknown_blocks_do_not_disturb_siblings() {
    let body = json!([
        { "type": "paragraph", "children": [{ "type": "text", "text": "before" }] },
        { "type": "code", "children": [{ "type": "text", "text": "let x = 1;" }] },
        { "children": [] },
        "not even an object",
        { "type": "paragraph", "children": [{ "type": "text", "text": "after" }] }
    ]);

    assert_eq!(render_value(&body), "<p>before</p><p>after</p>");
}

#[test]
fn test_order_preserved_across_split() {
    let body = json!([
        { "type": "heading", "level": 1, "children": [{ "type": "text", "text": "A" }] },
        { "type": "list", "format": "unordered", "children": [
            { "type": "list-item", "children": [{ "type": "text", "text": "a" }] },
            { "type": "list-item", "children": [{ "type": "text", "text": "b" }] }
        ] }
    ]);

    let blocks = parse_blocks(&body);
    let (first, second) = blocks.split_at(1);
    assert_eq!(render(&blocks), render(first) + &render(second));
    assert_eq!(render(second), "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn test_unknown_list_format_is_unordered() {
    let body = json!([
        { "type": "list", "format": "checklist", "children": [
            { "type": "list-item", "children": [{ "type": "text", "text": "x" }] }
        ] }
    ]);

    assert_eq!(render_value(&body), "<ul><li>x</li></ul>");
}

#[test]
fn test_links_render_in_every_child_list() {
    let body = json!([
        { "type": "link", "url": "https://x", "children": [{ "type": "text", "text": "go" }] },
        { "type": "list", "format": "unordered", "children": [
            { "type": "list-item", "children": [
                { "type": "text", "text": "See " },
                { "type": "link", "url": "https://x", "children": [{ "type": "text", "text": "docs" }] }
            ] }
        ] },
        { "type": "heading", "level": 2, "children": [
            { "type": "link", "url": "https://y", "children": [{ "type": "text", "text": "Title" }] }
        ] },
        { "type": "quote", "children": [
            { "type": "link", "url": "https://x", "children": [{ "type": "text", "text": "go" }] },
            { "type": "text", "text": " kept" }
        ] }
    ]);

    let blocks = parse_blocks(&body);
    assert!(matches!(blocks[0], ContentNode::Link(_)));
    assert_eq!(
        render(&blocks),
        concat!(
            "<ul><li>See <a href=\"https://x\">docs</a></li></ul>",
            "<h2><a href=\"https://y\">Title</a></h2>",
            "<blockquote><a href=\"https://x\">go</a> kept</blockquote>",
        )
    );
}

#[test]
fn test_bad_children_only_drop_themselves() {
    let body = json!([
        { "type": "paragraph", "children": [
            { "type": "text", "text": "kept" },
            { "text": "no type" }
        ] },
        { "type": "list", "format": null, "children": [
            { "type": "list-item", "children": [{ "type": "text", "text": "a" }] }
        ] },
        { "type": "paragraph", "children": [
            { "type": "text", "text": "x", "bold": "true" },
            { "type": "text", "text": "y" }
        ] },
        { "type": "heading", "level": 3, "children": [
            { "type": "text", "text": "T" },
            { "type": "link", "url": "https://z", "children": [
                { "type": "text", "text": 5 },
                { "type": "text", "text": "ok" }
            ] }
        ] }
    ]);

    assert_eq!(
        render_value(&body),
        concat!(
            "<p>kept</p>",
            "<ul><li>a</li></ul>",
            "<p>y</p>",
            "<h3>T<a href=\"https://z\">ok</a></h3>",
        )
    );
}

#[test]
fn test_empty_payloads() {
    assert_eq!(render_value(&json!([])), "");
    assert_eq!(render_value(&json!(null)), "");
    assert_eq!(render_value(&json!([{ "type": "paragraph", "children": [] }])), "<p></p>");
}
