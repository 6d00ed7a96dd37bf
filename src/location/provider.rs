use std::fmt;

use async_trait::async_trait;

use super::types::{Coordinate, PermissionStatus};

/// Errors that can occur while locating the device.
#[derive(Debug)]
pub enum LocationError {
    Network(String),
    Api { status: u16, message: String },
    Parse(String),
    /// The service answered but couldn't produce a position.
    Unavailable(String),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::Network(msg) => write!(f, "network error: {msg}"),
            LocationError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            LocationError::Parse(msg) => write!(f, "parse error: {msg}"),
            LocationError::Unavailable(msg) => write!(f, "location unavailable: {msg}"),
        }
    }
}

impl std::error::Error for LocationError {}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Asks for foreground location access.
    async fn request_permission(&self) -> Result<PermissionStatus, LocationError>;

    /// Queries the current position. Only meaningful after a granted request.
    async fn current_position(&self) -> Result<Coordinate, LocationError>;
}
