use serde::Deserialize;

/// A single catalog entry as returned by the remote API.
///
/// Unknown fields (`category`, `rating`, ...) are ignored on decode.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    /// Image URI. Terminals can't draw it, so the card shows the link.
    pub image: String,
}
