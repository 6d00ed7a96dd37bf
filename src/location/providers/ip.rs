//! IP geolocation provider.
//!
//! Uses an ip-api.com compatible endpoint: `GET {base_url}/json` answers
//! `{"status":"success","lat":..,"lon":..}` or
//! `{"status":"fail","message":".."}`.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::location::{
    Coordinate, LocationError, LocationProvider, PermissionPolicy, PermissionStatus,
};

pub const DEFAULT_IP_LOCATION_BASE_URL: &str = "http://ip-api.com";

#[derive(Deserialize, Debug)]
struct IpLookupResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    message: Option<String>,
}

impl IpLookupResponse {
    fn into_coordinate(self) -> Result<Coordinate, LocationError> {
        if self.status != "success" {
            return Err(LocationError::Unavailable(
                self.message.unwrap_or_else(|| self.status.clone()),
            ));
        }
        match (self.lat, self.lon) {
            (Some(latitude), Some(longitude)) => Ok(Coordinate {
                latitude,
                longitude,
            }),
            _ => Err(LocationError::Parse("response is missing lat/lon".to_string())),
        }
    }
}

pub struct IpLocator {
    base_url: String,
    policy: PermissionPolicy,
    client: reqwest::Client,
}

impl IpLocator {
    pub fn new(base_url: Option<String>, policy: PermissionPolicy) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_IP_LOCATION_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            base_url,
            policy,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LocationProvider for IpLocator {
    fn name(&self) -> &str {
        "ip"
    }

    async fn request_permission(&self) -> Result<PermissionStatus, LocationError> {
        let status = self.policy.status();
        info!("Location permission: {:?}", status);
        Ok(status)
    }

    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        let url = format!("{}/json", self.base_url);
        info!("Looking up position via {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LocationError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("IP lookup error: {} - {}", status, message);
            return Err(LocationError::Api { status, message });
        }

        let lookup: IpLookupResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Parse(e.to_string()))?;
        debug!("IP lookup response: {:?}", lookup);

        lookup.into_coordinate()
    }
}
