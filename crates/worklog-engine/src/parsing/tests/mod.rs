//! Whole-document parser tests.


use pretty_assertions::assert_eq;

use crate::blocks::{
    Block, CodeLanguage, EMPTY_PLACEHOLDER, HeadingLevel, MAX_BLOCKS, RICH_TEXT_LIMIT, RichText,
    TRUNCATION_NOTICE, map_code_language,
};
use crate::parsing::{parse_markdown, parse_markdown_with_budget};

fn parse_checked(md: &str) -> Vec<Block> {
    let parsed = parse_markdown(md);
    invariants::check(&parsed.blocks);
    parsed.blocks
}

#[test]
fn heading_then_paragraph() {
    let blocks = parse_checked("# Title\n\nSome text.\n");
    assert_eq!(
        blocks,
        vec![
            Block::heading(HeadingLevel::H1, "Title"),
            Block::paragraph("Some text."),
        ]
    );
}

#[test]
fn long_fenced_block_becomes_consecutive_code_blocks() {
    let body = (0..200)
        .map(|i| format!("const value{i}: number = {i}; // padding padding"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(body.chars().count() > RICH_TEXT_LIMIT);

    let blocks = parse_checked(&format!("```ts\n{body}\n```\n"));
    assert!(blocks.len() > 1);

    let mut joined = String::new();
    for block in &blocks {
        match block {
            Block::Code { language, text } => {
                assert_eq!(language.as_str(), "typescript");
                joined.push_str(&text.plain_text());
            }
            other => panic!("expected code block, got {other:?}"),
        }
    }
    assert_eq!(joined, body);
}

#[test]
fn overflowing_document_is_truncated_at_the_cap() {
    let md = (0..=MAX_BLOCKS)
        .map(|i| format!("- item {i}"))
        .collect::<Vec<_>>()
        .join("\n");

    let parsed = parse_markdown(&md);
    invariants::check(&parsed.blocks);
    assert!(parsed.truncated);
    assert_eq!(parsed.blocks.len(), MAX_BLOCKS);
    assert_eq!(
        parsed.blocks[MAX_BLOCKS - 2],
        Block::BulletedListItem {
            text: RichText::new("item 98")
        }
    );
    assert_eq!(
        parsed.blocks[MAX_BLOCKS - 1],
        Block::paragraph(TRUNCATION_NOTICE)
    );
}

#[test]
fn document_exactly_at_the_cap_is_not_truncated() {
    let md = (0..MAX_BLOCKS)
        .map(|i| format!("{}. step {i}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    let parsed = parse_markdown(&md);
    assert!(!parsed.truncated);
    assert_eq!(parsed.blocks.len(), MAX_BLOCKS);
    assert_eq!(
        parsed.blocks[MAX_BLOCKS - 1],
        Block::NumberedListItem {
            text: RichText::new("step 99")
        }
    );
}

#[test]
fn empty_input_yields_placeholder() {
    assert_eq!(parse_checked(""), vec![Block::paragraph(EMPTY_PLACEHOLDER)]);
}

#[test]
fn whitespace_only_input_yields_placeholder() {
    assert_eq!(
        parse_checked("   \n\t\n\n"),
        vec![Block::paragraph(EMPTY_PLACEHOLDER)]
    );
}

#[test]
fn every_line_kind() {
    let md = "\
## Done
- shipped **login**
1. wrote [docs](https://example.com)
> careful with `prod`
---
#### Deep heading
plain line one
plain line two
```rust
fn main() {}
```";
    assert_eq!(
        parse_checked(md),
        vec![
            Block::heading(HeadingLevel::H2, "Done"),
            Block::BulletedListItem {
                text: RichText::new("shipped login")
            },
            Block::NumberedListItem {
                text: RichText::new("wrote docs")
            },
            Block::Quote {
                text: RichText::new("careful with prod")
            },
            Block::Divider,
            Block::heading(HeadingLevel::H3, "Deep heading"),
            Block::paragraph("plain line one\nplain line two"),
            Block::code(map_code_language("rust"), "fn main() {}"),
        ]
    );
}

#[test]
fn crlf_line_endings_are_normalized() {
    assert_eq!(
        parse_checked("# Title\r\n\r\nbody\r\n"),
        vec![
            Block::heading(HeadingLevel::H1, "Title"),
            Block::paragraph("body"),
        ]
    );
}

#[test]
fn empty_quote_and_bullet_carry_a_space() {
    let blocks = parse_checked(">\n- ");
    assert_eq!(
        blocks,
        vec![
            Block::Quote {
                text: RichText::new(" ")
            },
            Block::BulletedListItem {
                text: RichText::new(" ")
            },
        ]
    );
}

#[test]
fn heading_text_is_capped() {
    let long = "h".repeat(500);
    let blocks = parse_checked(&format!("# {long}"));
    let Block::Heading { text, .. } = &blocks[0] else {
        panic!("expected heading");
    };
    assert_eq!(text.plain_text().chars().count(), 200);
}

#[test]
fn long_paragraph_is_one_block_with_many_segments() {
    let long = "word ".repeat(1000);
    let blocks = parse_checked(&long);
    assert_eq!(blocks.len(), 1);
    let text = blocks[0].text().unwrap();
    assert_eq!(text.segments().len(), 3);
    assert_eq!(text.plain_text(), long.trim());
}

#[test]
fn unknown_fence_language_passes_through() {
    let blocks = parse_checked("```Zig\nconst x = 1;\n```");
    assert_eq!(
        blocks,
        vec![Block::Code {
            language: map_code_language("zig"),
            text: RichText::new("const x = 1;")
        }]
    );
}

#[test]
fn fence_without_language_is_plain_text() {
    let blocks = parse_checked("```\nraw\n```");
    assert_eq!(
        blocks,
        vec![Block::code(CodeLanguage::plain_text(), "raw")]
    );
}

#[test]
fn unmatched_markup_degrades_to_paragraph_text() {
    let blocks = parse_checked("an *open emphasis and [broken link(");
    assert_eq!(
        blocks,
        vec![Block::paragraph("an *open emphasis and [broken link(")]
    );
}

#[test]
fn small_budget_overwrites_last_block() {
    let parsed = parse_markdown_with_budget("# a\n# b\n# c", 2);
    assert!(parsed.truncated);
    assert_eq!(
        parsed.blocks,
        vec![
            Block::heading(HeadingLevel::H1, "a"),
            Block::paragraph(TRUNCATION_NOTICE),
        ]
    );
}

#[test]
fn unterminated_fence_at_end_of_file() {
    let blocks = parse_checked("```py\nprint(1)\n");
    assert_eq!(
        blocks,
        vec![Block::code(map_code_language("python"), "print(1)")]
    );
}

#[test]
fn zero_budget_still_yields_one_block() {
    let parsed = parse_markdown_with_budget("hello", 0);
    assert!(!parsed.truncated);
    assert_eq!(parsed.blocks, vec![Block::paragraph("hello")]);

    let parsed = parse_markdown_with_budget("- a\n- b", 0);
    assert!(parsed.truncated);
    assert_eq!(parsed.blocks, vec![Block::paragraph(TRUNCATION_NOTICE)]);

    let parsed = parse_markdown_with_budget("", 0);
    assert_eq!(parsed.blocks, vec![Block::paragraph(EMPTY_PLACEHOLDER)]);
}

#[test]
fn adversarial_inputs_respect_invariants() {
    let inputs = [
        "```".to_string(),
        "```\n".repeat(300),
        "- \n".repeat(500),
        "> \n".repeat(150),
        "x".repeat(RICH_TEXT_LIMIT * 3),
        "```\n".to_string() + &"y".repeat(RICH_TEXT_LIMIT * 150),
        "#\n# \n##\n".repeat(60),
        "***\n___\n---\n".repeat(50),
    ];
    for md in &inputs {
        let parsed = parse_markdown(md);
        invariants::check(&parsed.blocks);
    }
}
