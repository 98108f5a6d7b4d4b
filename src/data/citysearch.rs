use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    data::{http_client, join_url},
    domain::weather::CityMatch,
};

pub const CITYSEARCH_URL: &str = "http://geodb-free-service.wirefreethought.com";
const SUGGESTION_LIMIT: &str = "5";

#[derive(Debug, Clone)]
pub struct CitySearchClient {
    client: Client,
    base_url: String,
}

impl Default for CitySearchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CitySearchClient {
    pub fn new() -> Self {
        Self::with_base_url(CITYSEARCH_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(Duration::from_secs(8)),
            base_url: base_url.into(),
        }
    }

    /// Most populous cities whose name starts with `prefix`.
    pub async fn search(&self, prefix: &str) -> Result<Vec<CityMatch>> {
        let payload: CitySearchResponse = self
            .client
            .get(join_url(&self.base_url, "v1/geo/cities"))
            .query(&[
                ("namePrefix", prefix),
                ("limit", SUGGESTION_LIMIT),
                ("sort", "-population"),
            ])
            .send()
            .await
            .context("city search request failed")?
            .error_for_status()
            .context("city search returned non-success status")?
            .json()
            .await
            .context("failed to decode city search payload")?;

        Ok(payload.data.into_iter().map(CityMatch::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct CitySearchResponse {
    data: Vec<CitySearchResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CitySearchResult {
    city: String,
    country_code: String,
}

impl From<CitySearchResult> for CityMatch {
    fn from(result: CitySearchResult) -> Self {
        Self {
            name: result.city,
            country: result.country_code,
        }
    }
}
