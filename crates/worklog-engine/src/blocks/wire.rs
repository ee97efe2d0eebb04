//! Workspace API JSON shape.
//!
//! ```json
//! {"object":"block","type":"quote","quote":{"rich_text":[{"type":"text","text":{"content":"..."}}]}}
//! ```

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::{Block, CodeLanguage, RichText};

#[derive(Serialize)]
struct TextContent<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct TextSegment<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextContent<'a>,
}

#[derive(Serialize)]
struct TextPayload<'a> {
    rich_text: &'a RichText,
}

#[derive(Serialize)]
struct CodePayload<'a> {
    language: &'a CodeLanguage,
    rich_text: &'a RichText,
}

#[derive(Serialize)]
struct EmptyPayload {}

impl Serialize for RichText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.segments().len()))?;
        for content in self.segments() {
            seq.serialize_element(&TextSegment {
                kind: "text",
                text: TextContent { content },
            })?;
        }
        seq.end()
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", kind)?;
        match self {
            Block::Code { language, text } => map.serialize_entry(
                kind,
                &CodePayload {
                    language,
                    rich_text: text,
                },
            )?,
            Block::Divider => map.serialize_entry(kind, &EmptyPayload {})?,
            Block::Paragraph { text }
            | Block::Heading { text, .. }
            | Block::Quote { text }
            | Block::BulletedListItem { text }
            | Block::NumberedListItem { text } => {
                map.serialize_entry(kind, &TextPayload { rich_text: text })?
            }
        }
        map.end()
    }
}
