//! Static position taken from the config file.

use async_trait::async_trait;
use log::debug;

use crate::location::{
    Coordinate, LocationError, LocationProvider, PermissionPolicy, PermissionStatus,
};

pub struct FixedLocator {
    coordinate: Coordinate,
    policy: PermissionPolicy,
}

impl FixedLocator {
    pub fn new(coordinate: Coordinate, policy: PermissionPolicy) -> Self {
        Self { coordinate, policy }
    }
}

#[async_trait]
impl LocationProvider for FixedLocator {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn request_permission(&self) -> Result<PermissionStatus, LocationError> {
        Ok(self.policy.status())
    }

    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        debug!("Fixed position: {:?}", self.coordinate);
        Ok(self.coordinate)
    }
}
