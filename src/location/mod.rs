//! Device location subsystem.
//!
//! A terminal has no GPS and no OS permission prompt, so both halves are
//! modelled explicitly: `PermissionPolicy` answers the foreground permission
//! request, and a `LocationProvider` produces the position.

pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{LocationError, LocationProvider};
pub use providers::{FixedLocator, IpLocator};
pub use types::{Coordinate, PermissionPolicy, PermissionStatus};
