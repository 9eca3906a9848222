use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::config::{ApiConfig, QueryConfig};
use crate::models::{Breed, Cat, FavoriteId, FavoriteRecord};

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Serialize)]
struct NewFavorite<'a> {
    image_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_id: Option<&'a str>,
}

#[derive(Deserialize)]
struct CreatedFavorite {
    id: u64,
}

/// Typed client for `images/search`, `favourites` and `breeds`.
///
/// No retries: every call is a single request and its failure is returned
/// to the caller as-is.
#[derive(Debug, Clone)]
pub struct CatApiClient {
    http: reqwest::Client,
    base_url: Url,
    sub_id: Option<String>,
    order: String,
    has_breeds: bool,
}

impl CatApiClient {
    pub fn new(api: &ApiConfig, query: &QueryConfig) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&api.base_url)?;

        let mut headers = HeaderMap::new();
        if let Some(key) = api.api_key.as_deref().filter(|key| !key.is_empty()) {
            let mut value = HeaderValue::from_str(key).map_err(|_| ApiError::InvalidApiKey)?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(u64::from(api.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(api.connect_timeout_seconds)))
            .user_agent(concat!("catgallery/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::Client { source })?;

        Ok(Self {
            http,
            base_url,
            sub_id: api.sub_id.clone().filter(|id| !id.is_empty()),
            order: query.order.clone(),
            has_breeds: query.has_breeds,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch one page of images. `page_size` is sent as the `limit` parameter.
    pub async fn get_cats(&self, page_size: u32) -> Result<Vec<Cat>, ApiError> {
        let endpoint = "images/search";
        let mut url = self.endpoint(endpoint)?;
        url.query_pairs_mut()
            .append_pair("limit", &page_size.to_string())
            .append_pair("order", &self.order)
            .append_pair("has_breeds", if self.has_breeds { "1" } else { "0" });
        self.get_json(endpoint, url).await
    }

    pub async fn get_favorites(&self) -> Result<Vec<FavoriteRecord>, ApiError> {
        let endpoint = "favourites";
        let mut url = self.endpoint(endpoint)?;
        if let Some(sub_id) = &self.sub_id {
            url.query_pairs_mut().append_pair("sub_id", sub_id);
        }
        self.get_json(endpoint, url).await
    }

    pub async fn get_breeds(&self) -> Result<Vec<Breed>, ApiError> {
        let endpoint = "breeds";
        let url = self.endpoint(endpoint)?;
        self.get_json(endpoint, url).await
    }

    /// Mark `image_id` as a favorite and return the created record.
    pub async fn add_favorite(&self, image_id: &str) -> Result<FavoriteId, ApiError> {
        let endpoint = "favourites";
        let url = self.endpoint(endpoint)?;
        let body = NewFavorite {
            image_id,
            sub_id: self.sub_id.as_deref(),
        };
        tracing::debug!(%url, image_id, "POST");
        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        let created: CreatedFavorite = decode(endpoint, response).await?;
        Ok(FavoriteId::new(created.id, image_id))
    }

    pub async fn remove_favorite(&self, favorite_id: u64) -> Result<(), ApiError> {
        let endpoint = format!("favourites/{}", favorite_id);
        let url = self.endpoint(&endpoint)?;
        tracing::debug!(%url, "DELETE");
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;
        check_status(&endpoint, &response)?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                message: err.to_string(),
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, url: Url) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        decode(endpoint, response).await
    }
}

/// Parse the configured base URL, forcing a trailing slash so relative
/// endpoints join under it instead of replacing its last segment.
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    Url::parse(&normalized).map_err(|err| ApiError::InvalidUrl {
        url: raw.to_string(),
        message: err.to_string(),
    })
}

fn check_status(endpoint: &str, response: &Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    tracing::warn!(endpoint, status = status.as_u16(), "Image API returned an error status");
    Err(ApiError::Status {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
    })
}

async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T, ApiError> {
    check_status(endpoint, &response)?;
    response.json::<T>().await.map_err(|source| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}
