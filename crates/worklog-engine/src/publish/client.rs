use std::time::Duration;

use log::{debug, info};
use reqwest::Method;
use serde::Serialize;
use serde_json::{Value, json};

use super::{PublishError, SyncMode};
use crate::blocks::{Block, RichText};

pub const API_BASE: &str = "https://api.notion.com/v1";
pub const API_VERSION: &str = "2022-06-28";
pub const PAGE_BASE: &str = "https://www.notion.so";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to create or extend one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePageRequest {
    /// Hyphenated page ID.
    pub parent_page_id: String,
    pub title: String,
    pub mode: SyncMode,
    pub children: Vec<Block>,
}

/// The page that received the blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRef {
    pub id: String,
    pub url: Option<String>,
}

/// Creates pages in the document workspace.
pub trait PageClient {
    fn create_page(&self, request: &CreatePageRequest) -> Result<PageRef, PublishError>;
}

#[derive(Debug, Clone)]
pub struct NotionClientConfig {
    pub token: String,
    pub proxy_url: Option<String>,
    pub timeout: Duration,
}

/// [`PageClient`] speaking the Notion REST API over blocking HTTP.
pub struct NotionClient {
    http: reqwest::blocking::Client,
    token: String,
}

impl NotionClient {
    pub fn new(config: NotionClientConfig) -> Result<Self, PublishError> {
        let token = config.token.trim().to_string();
        if token.is_empty() {
            return Err(PublishError::MissingToken);
        }

        let mut builder = reqwest::blocking::Client::builder().timeout(config.timeout);
        if let Some(proxy) = config.proxy_url.as_deref().map(str::trim)
            && !proxy.is_empty()
        {
            let parsed = reqwest::Proxy::all(proxy).map_err(|source| PublishError::InvalidProxy {
                proxy: proxy.to_string(),
                source,
            })?;
            debug!("Using proxy {proxy}");
            builder = builder.proxy(parsed);
        }

        let http = builder.build().map_err(PublishError::ClientBuild)?;
        Ok(Self { http, token })
    }
}

impl PageClient for NotionClient {
    fn create_page(&self, request: &CreatePageRequest) -> Result<PageRef, PublishError> {
        let endpoint = endpoint(request);
        let method = match request.mode {
            SyncMode::Subpage => Method::POST,
            SyncMode::Append => Method::PATCH,
        };
        info!(
            "Sending {} blocks to {endpoint} ({})",
            request.children.len(),
            request.mode
        );

        let response = self
            .http
            .request(method, &endpoint)
            .bearer_auth(&self.token)
            .header("Notion-Version", API_VERSION)
            .json(&request_body(request))
            .send()
            .map_err(|source| PublishError::Unreachable {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        let body: Option<Value> = response.json().ok();
        if !status.is_success() {
            return Err(PublishError::Api {
                status: status.as_u16(),
                message: error_message(body.as_ref()),
            });
        }

        page_ref(request, body.as_ref())
    }
}

/// URL the request is sent to.
pub fn endpoint(request: &CreatePageRequest) -> String {
    match request.mode {
        SyncMode::Subpage => format!("{API_BASE}/pages"),
        SyncMode::Append => format!("{API_BASE}/blocks/{}/children", request.parent_page_id),
    }
}

/// JSON body for the request.
///
/// Appending sends only the children; a new subpage also names its parent
/// and carries the title as the page's title property.
pub fn request_body(request: &CreatePageRequest) -> Value {
    match request.mode {
        SyncMode::Append => json!({ "children": request.children }),
        SyncMode::Subpage => json!({
            "parent": { "type": "page_id", "page_id": request.parent_page_id },
            "properties": {
                "title": { "title": RichText::new(&request.title) }
            },
            "children": request.children,
        }),
    }
}

fn error_message(body: Option<&Value>) -> String {
    body.and_then(|b| b.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("unknown error")
        .to_string()
}

/// Page reference for a successful response.
///
/// Appending returns the parent itself; a new subpage's ID and URL come
/// from the response body.
pub fn page_ref(request: &CreatePageRequest, body: Option<&Value>) -> Result<PageRef, PublishError> {
    match request.mode {
        SyncMode::Append => Ok(PageRef {
            id: request.parent_page_id.clone(),
            url: Some(format!(
                "{PAGE_BASE}/{}",
                request.parent_page_id.replace('-', "")
            )),
        }),
        SyncMode::Subpage => {
            let body = body.ok_or_else(|| PublishError::Decode("empty body".to_string()))?;
            let id = body
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| PublishError::Decode("response has no page id".to_string()))?;
            Ok(PageRef {
                id: id.to_string(),
                url: body.get("url").and_then(Value::as_str).map(str::to_string),
            })
        }
    }
}
