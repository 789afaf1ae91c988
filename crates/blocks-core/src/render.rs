//! Block tree rendering
//!
//! Converts block nodes into a flat markup string. Text and URLs are written
//! verbatim; callers embedding the output must escape untrusted content.

use serde_json::Value;

use crate::ast::{
    parse_blocks, ContentNode, ImageData, InlineChild, ListFormat, ListItem, TextChild, TextNode,
};

/// Render a sequence of blocks to markup
pub fn render(nodes: &[ContentNode]) -> String {
    let mut output = String::new();
    for node in nodes {
        render_node(node, &mut output);
    }
    output
}

/// Decode a JSON block array and render it
pub fn render_value(value: &Value) -> String {
    render(&parse_blocks(value))
}

fn render_node(node: &ContentNode, out: &mut String) {
    match node {
        ContentNode::Heading { level, children } => {
            let level = level.to_string();
            out.push_str("<h");
            out.push_str(&level);
            out.push('>');
            render_inlines(children, out);
            out.push_str("</h");
            out.push_str(&level);
            out.push('>');
        }

        ContentNode::Paragraph { children } => {
            out.push_str("<p>");
            render_inlines(children, out);
            out.push_str("</p>");
        }

        ContentNode::List { format, items } => render_list(*format, items, out),

        ContentNode::Image { image, .. } => render_image(image, out),

        ContentNode::Quote { children } => {
            out.push_str("<blockquote>");
            render_inlines(children, out);
            out.push_str("</blockquote>");
        }

        // Links only render as children of another block
        ContentNode::Link(_) | ContentNode::Unknown => {}
    }
}

fn render_list(format: ListFormat, items: &[ListItem], out: &mut String) {
    let tag = match format {
        ListFormat::Ordered => "ol",
        ListFormat::Unordered => "ul",
    };

    out.push('<');
    out.push_str(tag);
    out.push('>');
    for item in items {
        out.push_str("<li>");
        render_inlines(&item.children, out);
        out.push_str("</li>");
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

// Caption is part of the model but never written out.
fn render_image(image: &ImageData, out: &mut String) {
    let width = image.width.map(|w| w.to_string()).unwrap_or_default();
    let height = image.height.map(|h| h.to_string()).unwrap_or_default();

    out.push_str("<img");
    push_attr("src", &image.url, out);
    push_attr("alt", &image.alternative_text, out);
    push_attr("width", &width, out);
    push_attr("height", &height, out);
    out.push_str(" />");
}

fn push_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}

fn render_inlines(children: &[InlineChild], out: &mut String) {
    for child in children {
        match child {
            InlineChild::Text(text) => render_text(text, out),

            InlineChild::Link(link) => {
                out.push_str("<a href=\"");
                out.push_str(&link.url);
                out.push_str("\">");
                render_text_children(&link.children, out);
                out.push_str("</a>");
            }

            InlineChild::Unknown => {}
        }
    }
}

fn render_text_children(children: &[TextChild], out: &mut String) {
    for child in children {
        if let TextChild::Text(text) = child {
            render_text(text, out);
        }
    }
}

fn render_text(node: &TextNode, out: &mut String) {
    if node.bold {
        out.push_str("<strong>");
        out.push_str(&node.text);
        out.push_str("</strong>");
    } else {
        out.push_str(&node.text);
    }
}
