//! HTTP client for TheMealDB

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use mealplan_core::prelude::*;
use mealplan_core::{Category, RecipeDetail, RecipeSummary};

use crate::protocol::{CategoriesEnvelope, MealsEnvelope};
use crate::source::RecipeSource;

/// Public TheMealDB v1 endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Thin typed wrapper over the five TheMealDB endpoints.
///
/// No retries and no caching: each call is one GET, and any transport,
/// status or decoding failure is returned to the caller.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: Client,
    base_url: Url,
}

impl MealDbClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // A trailing slash makes `Url::join` append instead of replacing the
        // last path segment
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| Error::config_invalid(format!("api.base_url {base_url:?}: {e}")))?;

        let http = ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url })
    }

    /// Client for the public API with the default timeout
    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the URL for `endpoint`, percent-encoding the query value
    pub fn endpoint_url(&self, endpoint: &str, query: Option<(&str, &str)>) -> Result<Url> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| Error::api(format!("bad endpoint {endpoint}: {e}")))?;
        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Option<(&str, &str)>,
    ) -> Result<T> {
        let url = self.endpoint_url(endpoint, query)?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::api_status(status.as_u16(), endpoint));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        serde_json::from_str(&body)
            .map_err(|e| Error::api(format!("unexpected response from {endpoint}: {e}")))
    }

    async fn get_meals(&self, endpoint: &str, query: Option<(&str, &str)>) -> Result<MealsEnvelope> {
        self.get_json(endpoint, query).await
    }
}

impl RecipeSource for MealDbClient {
    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        let envelope = self.get_meals("search.php", Some(("s", query))).await?;
        let results: Vec<RecipeSummary> = envelope
            .into_meals()
            .into_iter()
            .map(|m| m.into_summary())
            .collect();
        trace!("search {:?} -> {} results", query, results.len());
        Ok(results)
    }

    async fn get_recipe_by_id(&self, id: &str) -> Result<Option<RecipeDetail>> {
        let envelope = self.get_meals("lookup.php", Some(("i", id))).await?;
        Ok(envelope
            .into_meals()
            .into_iter()
            .next()
            .map(|m| m.into_detail()))
    }

    async fn get_categories(&self) -> Result<Vec<Category>> {
        let envelope: CategoriesEnvelope = self.get_json("categories.php", None).await?;
        Ok(envelope.into_categories())
    }

    async fn get_recipes_by_category(&self, category: &str) -> Result<Vec<RecipeSummary>> {
        let envelope = self.get_meals("filter.php", Some(("c", category))).await?;
        Ok(envelope
            .into_meals()
            .into_iter()
            .map(|m| m.into_filtered_summary(category))
            .collect())
    }

    async fn get_random_recipe(&self) -> Result<Option<RecipeDetail>> {
        let envelope = self.get_meals("random.php", None).await?;
        Ok(envelope
            .into_meals()
            .into_iter()
            .next()
            .map(|m| m.into_detail()))
    }
}
