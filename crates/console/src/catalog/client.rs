//! HTTP implementation of [`CatalogApi`].

use std::sync::Arc;

use async_trait::async_trait;
use pkart_core::{Product, ProductDraft, ProductId, SortKey};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use url::Url;

use super::{AdminCredential, CatalogApi, CatalogError};
use crate::config::CatalogConfig;

/// Longest error body kept in [`CatalogError::Api`].
const MAX_ERROR_BODY: usize = 512;

/// Catalog service client over `reqwest`.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct HttpCatalogClient {
    inner: Arc<HttpCatalogClientInner>,
}

struct HttpCatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpCatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &config.api_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|e| CatalogError::Parse(format!("Invalid API token format: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            inner: Arc::new(HttpCatalogClientInner {
                client: builder.build()?,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Resolve an endpoint path beneath the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        Ok(self.inner.base_url.join(path)?)
    }

    fn product_endpoint(&self, id: ProductId) -> Result<Url, CatalogError> {
        self.endpoint(&format!("products/{id}"))
    }

    /// Execute a GET request and parse the JSON body.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let response = self.inner.client.get(url).send().await?;
        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("Failed to parse response: {e}")))
    }

    /// Map non-success statuses to errors, passing successful responses through.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().path().to_string();
        let mut message = response.text().await.unwrap_or_default();
        if message.len() > MAX_ERROR_BODY {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|i| message.is_char_boundary(*i))
                .unwrap_or(0);
            message.truncate(cut);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(url));
        }

        Err(CatalogError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    #[tracing::instrument(skip(self))]
    async fn list_admins(&self) -> Result<Vec<AdminCredential>, CatalogError> {
        self.get(self.endpoint("admins")?).await
    }

    #[tracing::instrument(skip(self), fields(sort = sort.code()))]
    async fn list_products(&self, sort: SortKey) -> Result<Vec<Product>, CatalogError> {
        let mut url = self.endpoint("products")?;
        url.query_pairs_mut()
            .append_pair("sort", &sort.code().to_string());
        self.get(url).await
    }

    #[tracing::instrument(skip(self), fields(product_id = %id))]
    async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        let response = self
            .inner
            .client
            .delete(self.product_endpoint(id)?)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create_product(&self, draft: &ProductDraft) -> Result<(), CatalogError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("products")?)
            .json(draft)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, draft), fields(product_id = %id))]
    async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<(), CatalogError> {
        let body = serde_json::json!({
            "product_id": id,
            "product_name": draft.name,
            "price": draft.price,
            "image_url": draft.image_url,
        });

        let response = self
            .inner
            .client
            .put(self.product_endpoint(id)?)
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpCatalogClient {
        HttpCatalogClient::new(&CatalogConfig::new(base).unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_joins_under_base_path() {
        let client = client("http://catalog.internal/api/v1");
        assert_eq!(
            client.endpoint("products").unwrap().as_str(),
            "http://catalog.internal/api/v1/products"
        );
        assert_eq!(
            client.product_endpoint(ProductId::new(9)).unwrap().as_str(),
            "http://catalog.internal/api/v1/products/9"
        );
    }

    #[test]
    fn test_api_error_message_names_status() {
        let err = CatalogError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with status code 500");
    }
}
