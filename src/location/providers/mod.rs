pub mod fixed;
pub mod ip;

pub use fixed::FixedLocator;
pub use ip::IpLocator;
