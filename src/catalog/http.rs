//! HTTP catalog backed by a Fake Store style REST API.
//!
//! `GET {base_url}/products` returns a JSON array of items.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::catalog::{CatalogError, CatalogProvider, Item};

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://fakestoreapi.com";

pub struct HttpCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalog {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_items(&self) -> Result<Vec<Item>, CatalogError> {
        let url = self.products_url();
        info!("Fetching catalog from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalog API error: {} - {}", status, message);
            return Err(CatalogError::Api { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let items: Vec<Item> =
            serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        info!("Catalog returned {} items", items.len());
        Ok(items)
    }
}
