use minori_core::models::MediaKind;
use reqwest::Client;

use super::error::TmdbError;
use super::types::TmdbResponse;
use crate::types::SearchResult;

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB v3 client: movie and TV search, popular/discover listings.
pub struct TmdbClient {
    api_key: String,
    http: Client,
}

impl TmdbClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "TMDB API error");
            Err(TmdbError::Api {
                status,
                message: body,
            })
        }
    }

    async fn fetch(&self, path: &str, query: &[(&str, &str)]) -> Result<TmdbResponse, TmdbError> {
        let resp = self
            .http
            .get(format!("{BASE_URL}{path}"))
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        resp.json()
            .await
            .map_err(|e| TmdbError::Parse(e.to_string()))
    }

    /// Search movies. `region` biases results toward a release region
    /// (e.g. `"IN"`).
    pub async fn search_movies(
        &self,
        query: &str,
        region: Option<&str>,
    ) -> Result<Vec<SearchResult>, TmdbError> {
        let mut params = vec![("query", query)];
        if let Some(region) = region {
            params.push(("region", region));
        }
        let body = self.fetch("/search/movie", &params).await?;
        Ok(collect(body, MediaKind::Movie))
    }

    /// Search TV shows.
    pub async fn search_tv(&self, query: &str) -> Result<Vec<SearchResult>, TmdbError> {
        let body = self.fetch("/search/tv", &[("query", query)]).await?;
        Ok(collect(body, MediaKind::Tv))
    }

    /// One page of a popularity-sorted discover listing, optionally
    /// filtered to a genre. Backs the random-pick pool.
    pub async fn discover(
        &self,
        kind: MediaKind,
        genre_id: Option<u32>,
        page: u32,
    ) -> Result<Vec<SearchResult>, TmdbError> {
        let path = match kind {
            MediaKind::Tv => "/discover/tv",
            _ => "/discover/movie",
        };
        let page = page.max(1).to_string();
        let genre = genre_id.map(|id| id.to_string());
        let mut params = vec![
            ("sort_by", "popularity.desc"),
            ("page", page.as_str()),
        ];
        if let Some(genre) = genre.as_deref() {
            params.push(("with_genres", genre));
        }
        let body = self.fetch(path, &params).await?;
        Ok(collect(body, kind))
    }
}

fn collect(body: TmdbResponse, kind: MediaKind) -> Vec<SearchResult> {
    body.results
        .into_iter()
        .filter_map(|item| item.into_search_result(kind))
        .collect()
}
