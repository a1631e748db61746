//! Confluence search engine implementation
//!
//! Uses the Confluence REST search endpoint (`/rest/api/search`) with a CQL
//! full-text expression restricted to pages.

use super::traits::*;
use crate::config::{ApiToken, ConfluenceSettings};
use crate::error::RelayError;
use crate::query::build_cql;
use crate::results::SearchResult;
use crate::SEARCH_LIMIT;
use serde::Deserialize;
use tracing::warn;

/// Longest slice of an upstream error body written to the log
const LOGGED_BODY_LIMIT: usize = 500;

/// Confluence wiki search engine
pub struct Confluence {
    base_url: String,
    token: Option<ApiToken>,
}

impl Confluence {
    pub fn new(base_url: impl Into<String>, token: Option<ApiToken>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    pub fn from_settings(settings: &ConfluenceSettings) -> Self {
        Self::new(settings.base_url.clone(), settings.token.clone())
    }

    fn search_url(&self) -> String {
        format!("{}/rest/api/search", self.base_url.trim_end_matches('/'))
    }

    fn token(&self) -> Result<&ApiToken, RelayError> {
        self.token.as_ref().ok_or(RelayError::MissingCredential)
    }
}

#[derive(Debug, Deserialize)]
struct ApiSearchResponse {
    #[serde(default)]
    results: Vec<ApiResult>,
    #[serde(rename = "_links", default)]
    links: Option<ApiLinks>,
}

#[derive(Debug, Deserialize)]
struct ApiResult {
    title: Option<String>,
    excerpt: Option<String>,
    #[serde(rename = "_links", default)]
    links: Option<ApiLinks>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiLinks {
    base: Option<String>,
    webui: Option<String>,
}

impl ApiResult {
    fn into_result(
        self,
        index: usize,
        fallback_base: Option<&str>,
    ) -> Result<SearchResult, RelayError> {
        let title = self
            .title
            .ok_or_else(|| RelayError::Mapping(format!("result {} has no title", index)))?;

        let links = self.links.unwrap_or_default();
        let base = links
            .base
            .as_deref()
            .or(fallback_base)
            .ok_or_else(|| RelayError::Mapping(format!("result {} has no _links.base", index)))?;
        let webui = links
            .webui
            .ok_or_else(|| RelayError::Mapping(format!("result {} has no _links.webui", index)))?;

        Ok(SearchResult {
            title,
            url: format!("{}{}", base, webui),
            snippet: self.excerpt.unwrap_or_default(),
        })
    }
}

impl Engine for Confluence {
    fn name(&self) -> &str {
        "confluence"
    }

    fn validate(&self) -> Result<(), RelayError> {
        self.token().map(|_| ())
    }

    fn request(&self, params: &RequestParams) -> Result<EngineRequest, RelayError> {
        let token = self.token()?;

        let request = EngineRequest::get(self.search_url())
            .param("cql", build_cql(&params.query))
            .param("limit", SEARCH_LIMIT.to_string())
            .header("Authorization", format!("Bearer {}", token.expose()))
            .header("Accept", "application/json");

        Ok(request)
    }

    fn response(&self, response: EngineResponse) -> Result<Vec<SearchResult>, RelayError> {
        if response.is_error() {
            let body: String = response.text.chars().take(LOGGED_BODY_LIMIT).collect();
            warn!(status = response.status, body = %body, "Confluence search failed");
            return Err(RelayError::Upstream {
                status: response.status,
            });
        }

        let parsed: ApiSearchResponse = response.json()?;
        let fallback_base = parsed.links.as_ref().and_then(|l| l.base.as_deref());

        parsed
            .results
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.into_result(index, fallback_base))
            .collect()
    }
}
