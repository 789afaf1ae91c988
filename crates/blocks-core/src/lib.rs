//! blocks-core - Strapi rich-text blocks to markup
//!
//! This crate provides the block data model delivered by the CMS and a pure
//! renderer turning a block sequence into a single markup string. It is used
//! by `blocks-fetch` consumers and the `blocks` command-line tool.
//!
//! # Architecture
//!
//! ```text
//! CMS JSON ──parse_blocks──▶ ┌──────────────┐
//!                            │  Block Tree  │ ──render──▶ Markup String
//! Hand-built nodes ─────────▶│              │
//!                            └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use blocks_core::{render, ContentNode, InlineChild};
//!
//! let blocks = vec![
//!     ContentNode::Heading {
//!         level: 1,
//!         children: vec![InlineChild::plain("Hello World")],
//!     },
//!     ContentNode::Paragraph {
//!         children: vec![
//!             InlineChild::plain("This is "),
//!             InlineChild::bold("bold"),
//!             InlineChild::plain(" text."),
//!         ],
//!     },
//! ];
//!
//! let markup = render(&blocks);
//! assert_eq!(markup, "<h1>Hello World</h1><p>This is <strong>bold</strong> text.</p>");
//! ```
//!
//! No escaping is applied: text and URLs pass through untouched.

mod ast;
mod render;

pub use ast::{
    parse_blocks, ContentNode, ImageData, InlineChild, LinkNode, ListFormat, ListItem, TextChild,
    TextNode,
};
pub use render::{render, render_value};
