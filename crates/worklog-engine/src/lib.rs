pub mod blocks;
pub mod io;
pub mod models;
pub mod page_id;
pub mod parsing;
pub mod publish;

// Re-export key types for easier usage
pub use blocks::{Block, CodeLanguage, HeadingLevel, RichText, map_code_language, split_by_length};
pub use io::{CommitSource, GitCli, GitError, LogQuery, Project, collect_commits};
pub use models::{CommitRecord, DateRange, Report};
pub use page_id::{PageIdError, normalize_page_id};
pub use parsing::{ParsedBlocks, parse_markdown, strip_inline_markdown};
pub use publish::{
    ContentMode, CreatePageRequest, NotionClient, NotionClientConfig, PageClient, PageRef,
    PublishError, PublishPayload, SyncMode, build_payload, compose_report, publish_report,
};
