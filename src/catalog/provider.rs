use std::fmt;

use async_trait::async_trait;

use super::types::Item;

/// Errors that can occur while fetching the catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The API answered with a non-success status.
    Api { status: u16, message: String },
    /// The body wasn't a list of items.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches the full item list, preserving the API's order.
    async fn fetch_items(&self) -> Result<Vec<Item>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Api {
            status: 503,
            message: "down".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 503): down");
        assert_eq!(
            CatalogError::Network("refused".to_string()).to_string(),
            "network error: refused"
        );
    }
}
