//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::catalog::{CatalogError, CatalogProvider, Item};
use crate::core::state::App;
use crate::location::{Coordinate, LocationError, LocationProvider, PermissionStatus};

/// A catalog that answers with a canned result after an optional delay.
pub struct ScriptedCatalog {
    pub result: Result<Vec<Item>, String>,
    pub delay: Duration,
}

#[async_trait]
impl CatalogProvider for ScriptedCatalog {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch_items(&self) -> Result<Vec<Item>, CatalogError> {
        tokio::time::sleep(self.delay).await;
        self.result.clone().map_err(CatalogError::Network)
    }
}

/// A locator with a canned permission answer and position.
pub struct ScriptedLocator {
    pub permission: PermissionStatus,
    pub position: Result<Coordinate, String>,
    pub delay: Duration,
}

#[async_trait]
impl LocationProvider for ScriptedLocator {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn request_permission(&self) -> Result<PermissionStatus, LocationError> {
        Ok(self.permission)
    }

    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        tokio::time::sleep(self.delay).await;
        self.position.clone().map_err(LocationError::Unavailable)
    }
}

pub fn sample_items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            title: "Shirt".to_string(),
            price: 19.999,
            description: "Slim-fit cotton shirt".to_string(),
            image: "http://x/y.png".to_string(),
        },
        Item {
            id: 2,
            title: "Backpack".to_string(),
            price: 109.95,
            description: "Fits 15 inch laptops".to_string(),
            image: "http://x/bag.png".to_string(),
        },
    ]
}

/// Creates a test App whose providers succeed immediately.
pub fn test_app() -> App {
    App::new(
        Arc::new(ScriptedCatalog {
            result: Ok(sample_items()),
            delay: Duration::ZERO,
        }),
        Arc::new(ScriptedLocator {
            permission: PermissionStatus::Granted,
            position: Ok(Coordinate {
                latitude: -23.5505,
                longitude: -46.6333,
            }),
            delay: Duration::ZERO,
        }),
    )
}
