//! # Publishing
//!
//! Turns a [`Report`] into the block payload the workspace accepts and hands
//! it to a [`PageClient`].
//!
//! Two publish modes exist. `append` adds the report to the end of an
//! existing page, framed by a title heading and a closing divider.
//! `subpage` creates a new child page titled after the report.
//!
//! Validation of the page reference happens before the client is called,
//! so a bad reference never costs a round trip.

mod client;
mod error;

pub use client::{
    API_BASE, API_VERSION, CreatePageRequest, DEFAULT_TIMEOUT, NotionClient, NotionClientConfig,
    PageClient, PageRef, endpoint, page_ref, request_body,
};
pub use error::PublishError;

use std::fmt;
use std::str::FromStr;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::blocks::{Block, CodeLanguage, HeadingLevel, MAX_BLOCKS, TITLE_LIMIT, truncate_chars};
use crate::models::Report;
use crate::page_id::normalize_page_id;
use crate::parsing::blocks::BlockBudget;
use crate::parsing::{code_blocks, parse_markdown_with_budget};

/// Where the report lands relative to the target page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    #[default]
    Append,
    Subpage,
}

/// How the report body is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    /// Parse the markdown into structured blocks.
    #[default]
    Markdown,
    /// Keep the markdown source as-is inside code blocks.
    Code,
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SyncMode::Append => "append",
            SyncMode::Subpage => "subpage",
        })
    }
}

impl FromStr for SyncMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "append" => Ok(SyncMode::Append),
            "subpage" => Ok(SyncMode::Subpage),
            other => Err(format!("unknown sync mode '{other}' (expected append or subpage)")),
        }
    }
}

impl fmt::Display for ContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContentMode::Markdown => "markdown",
            ContentMode::Code => "code",
        })
    }
}

impl FromStr for ContentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" => Ok(ContentMode::Markdown),
            "code" | "raw" => Ok(ContentMode::Code),
            other => Err(format!(
                "unknown content mode '{other}' (expected markdown or code)"
            )),
        }
    }
}

/// Title and metadata-prefixed body of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportText {
    pub title: String,
    pub body: String,
}

/// Composes the page title and the body text for `report`.
///
/// The body opens with one metadata line each for the creation time, the
/// commit count, the projects and the branches, skipping those the report
/// does not carry, followed by a blank line and the report content.
pub fn compose_report(report: &Report) -> ReportText {
    let title = format!(
        "Weekly Report {} ~ {}",
        report.date_range.start, report.date_range.end
    );

    let mut metadata = vec![format!(
        "Generated: {}",
        report.created_at.format("%Y-%m-%d %H:%M:%S")
    )];
    if let Some(total) = report.total_commits {
        metadata.push(format!("Total commits: {total}"));
    }
    if !report.projects.is_empty() {
        metadata.push(format!("Projects: {}", report.projects.join(", ")));
    }
    if !report.branches.is_empty() {
        metadata.push(format!("Branches: {}", report.branches.join(", ")));
    }

    let body = format!("{}\n\n{}", metadata.join("\n"), report.content)
        .trim()
        .to_string();
    ReportText { title, body }
}

/// Blocks ready to send, plus the title that goes with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishPayload {
    pub title: String,
    pub mode: SyncMode,
    pub children: Vec<Block>,
    /// Whether the report body was cut short to fit one request.
    pub truncated: bool,
}

/// Builds the blocks for `report` in the given modes.
///
/// In append mode the content is framed by a level-2 title heading and a
/// trailing divider; the frame is reserved out of the block budget so the
/// whole payload still fits in one request.
pub fn build_payload(report: &Report, mode: SyncMode, content: ContentMode) -> PublishPayload {
    let text = compose_report(report);
    let title = truncate_chars(&text.title, TITLE_LIMIT).to_string();

    let budget = match mode {
        SyncMode::Append => MAX_BLOCKS - 2,
        SyncMode::Subpage => MAX_BLOCKS,
    };
    let (content_blocks, truncated) = match content {
        ContentMode::Markdown => {
            let parsed = parse_markdown_with_budget(&text.body, budget);
            (parsed.blocks, parsed.truncated)
        }
        ContentMode::Code => raw_code_blocks(&text.body, budget),
    };
    if truncated {
        warn!("Report body truncated to {} blocks", content_blocks.len());
    }

    let children = match mode {
        SyncMode::Subpage => content_blocks,
        SyncMode::Append => {
            let mut framed = Vec::with_capacity(content_blocks.len() + 2);
            framed.push(Block::heading(HeadingLevel::H2, &title));
            framed.extend(content_blocks);
            framed.push(Block::Divider);
            framed
        }
    };

    PublishPayload {
        title,
        mode,
        children,
        truncated,
    }
}

/// The trimmed markdown source as consecutive `markdown` code blocks,
/// capped at `max_blocks` (at least one).
pub fn raw_code_blocks(markdown: &str, max_blocks: usize) -> (Vec<Block>, bool) {
    let mut budget = BlockBudget::new(max_blocks.max(1));
    for block in code_blocks(markdown.trim(), CodeLanguage::markdown()) {
        if !budget.append(block) {
            break;
        }
    }
    budget.finish()
}

/// Publishes `report` under the page referenced by `parent_page`.
///
/// The reference is normalized first; an invalid one fails without calling
/// `client`. Client errors are returned unchanged.
pub fn publish_report<C: PageClient>(
    client: &C,
    report: &Report,
    parent_page: &str,
    mode: SyncMode,
    content: ContentMode,
) -> Result<PageRef, PublishError> {
    let parent_page_id = normalize_page_id(parent_page)?;
    let payload = build_payload(report, mode, content);

    let request = CreatePageRequest {
        parent_page_id,
        title: payload.title,
        mode,
        children: payload.children,
    };
    let page = client.create_page(&request)?;
    info!("Published report to {}", page.url.as_deref().unwrap_or(&page.id));
    Ok(page)
}
