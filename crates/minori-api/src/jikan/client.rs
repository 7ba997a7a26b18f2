use reqwest::Client;

use super::error::JikanError;
use super::types::JikanResponse;
use crate::types::SearchResult;

const BASE_URL: &str = "https://api.jikan.moe/v4";

/// Jikan (MyAnimeList mirror) client. No authentication required.
pub struct JikanClient {
    http: Client,
}

impl JikanClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, JikanError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "Jikan API error");
            Err(JikanError::Api {
                status,
                message: body,
            })
        }
    }

    async fn fetch(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<SearchResult>, JikanError> {
        let resp = self
            .http
            .get(format!("{BASE_URL}{path}"))
            .query(query)
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: JikanResponse = resp
            .json()
            .await
            .map_err(|e| JikanError::Parse(e.to_string()))?;

        Ok(body
            .data
            .into_iter()
            .filter_map(|item| item.into_search_result())
            .collect())
    }

    /// Search anime by free text.
    pub async fn search_anime(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>, JikanError> {
        let limit = limit.to_string();
        self.fetch("/anime", &[("q", query), ("limit", limit.as_str())])
            .await
    }

    /// One page of the top-anime listing. Backs the random-pick pool.
    pub async fn top_anime(&self, limit: u32, page: u32) -> Result<Vec<SearchResult>, JikanError> {
        let limit = limit.to_string();
        let page = page.max(1).to_string();
        self.fetch(
            "/top/anime",
            &[("limit", limit.as_str()), ("page", page.as_str())],
        )
        .await
    }
}

impl Default for JikanClient {
    fn default() -> Self {
        Self::new()
    }
}
