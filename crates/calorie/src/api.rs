use calorie_core::food::{parse_stats, CategoriesResponse, FoodItem, SearchParams, StatsData};
use calorie_core::queries::{self, QueryPairs};
use calorie_core::view::CategorySelection;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::Error;

/// HTTP client for the food API
///
/// Every call is a plain GET. Non-2xx answers, transport failures and bodies
/// that do not decode are all reported as [`Error`].
#[derive(Debug, Clone)]
pub struct FoodApi {
    client: reqwest::Client,
    base_url: Url,
}

impl FoodApi {
    pub fn new(config: &ApiConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, config.base_url.clone()))
    }

    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// `GET /api/foods`
    pub async fn foods(&self, params: Option<&SearchParams>) -> Result<Vec<FoodItem>, Error> {
        self.get_json(&queries::foods_path(), &queries::foods_query(params))
            .await
    }

    /// `GET /api/foods/{id}`
    pub async fn food(&self, id: &str) -> Result<FoodItem, Error> {
        self.get_json(&queries::food_path(id), &QueryPairs::new())
            .await
    }

    /// `GET /api/foods/search`
    pub async fn search(
        &self,
        query: &str,
        selection: &CategorySelection,
    ) -> Result<Vec<FoodItem>, Error> {
        self.get_json(
            &queries::search_path(),
            &queries::search_query(query, selection),
        )
        .await
    }

    /// `GET /api/foods/category/{category}`
    pub async fn foods_by_category(&self, category: &str) -> Result<Vec<FoodItem>, Error> {
        self.get_json(
            &queries::category_foods_path(category),
            &queries::category_foods_query(),
        )
        .await
    }

    /// `GET /api/categories`
    pub async fn categories(&self) -> Result<CategoriesResponse, Error> {
        self.get_json(&queries::categories_path(), &QueryPairs::new())
            .await
    }

    /// `GET /api/stats`, `None` when the backend has no data yet
    pub async fn stats(&self) -> Result<Option<StatsData>, Error> {
        let (url, value) = self
            .get_value(&queries::stats_path(), &QueryPairs::new())
            .await?;

        parse_stats(value).map_err(|e| Error::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn endpoint(&self, segments: &[String]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::InvalidConfig(format!("API URL '{}' cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[String],
        query: &QueryPairs,
    ) -> Result<T, Error> {
        let (url, value) = self.get_value(segments, query).await?;

        serde_json::from_value(value).map_err(|e| Error::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    async fn get_value(
        &self,
        segments: &[String],
        query: &QueryPairs,
    ) -> Result<(Url, serde_json::Value), Error> {
        let url = self.endpoint(segments)?;
        log::debug!("GET {url} {query:?}");

        let response = self
            .client
            .get(url.clone())
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to reach {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response from {url}: {e}")))?;

        let value = serde_json::from_slice(&bytes).map_err(|e| Error::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok((url, value))
    }
}
