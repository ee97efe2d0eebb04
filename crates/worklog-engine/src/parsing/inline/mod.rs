//! # Inline Markup
//!
//! The workspace's rich text is plain text here, so inline markdown is
//! reduced to its visible content rather than parsed into spans.
//!
//! ## Precedence
//!
//! Constructs are rewritten in a fixed order so earlier rules cannot be
//! broken by later ones: images, links, code spans, bold, strikethrough,
//! then italic. Unmatched delimiters stay as literal characters.

pub mod strip;

pub use strip::strip_inline_markdown;
