use reqwest::{Client, StatusCode};

use crate::errors::SearchError;
use crate::models::{ErrorBody, SearchResponse};
use crate::pagination::PageSize;

const USER_AGENT: &str = "github_search_page";

/// One search request, captured when a fetch starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: String,
    pub page: u32,
    pub per_page: PageSize,
}

/// Status and body exactly as the server sent them.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Thin wrapper around `GET /search/repositories`.
///
/// No retries, no caching, no input validation: one call, one request.
#[derive(Debug, Clone)]
pub struct RepositoryService {
    client: Client,
    base_url: String,
}

impl RepositoryService {
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues the GET and hands back the raw response without looking at it.
    pub async fn get_repos(
        &self,
        query: &str,
        page: u32,
        per_page: PageSize,
    ) -> Result<RawResponse, reqwest::Error> {
        tracing::debug!(query, page, per_page = per_page.get(), "requesting repositories");

        let response = self
            .client
            .get(format!("{}/search/repositories", self.base_url))
            .query(&[("q", query)])
            .query(&[("page", page), ("per_page", per_page.get())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }

    /// `get_repos` followed by `interpret`.
    pub async fn search(&self, request: &FetchRequest) -> Result<SearchResponse, SearchError> {
        let raw = self
            .get_repos(&request.query, request.page, request.per_page)
            .await?;
        let result = interpret(raw);

        match &result {
            Ok(page) => tracing::debug!(
                total = page.total_count,
                items = page.items.len(),
                "search succeeded"
            ),
            Err(err) => tracing::warn!(%err, "search failed"),
        }

        result
    }
}

/// Turns a raw response into a result page or the error it carries.
pub fn interpret(raw: RawResponse) -> Result<SearchResponse, SearchError> {
    if raw.status.is_success() {
        return Ok(serde_json::from_str(&raw.body)?);
    }

    let error: ErrorBody = serde_json::from_str(&raw.body)?;
    Err(SearchError::Api {
        status: raw.status.as_u16(),
        message: error.message,
    })
}
