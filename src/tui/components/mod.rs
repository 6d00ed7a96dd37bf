//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status line
//! - `ProductCard`: One catalog item
//! - `LocationCard`: The current coordinate
//! - `AlertDialog`: Modal error/permission message
//!
//! ### Stateful Components
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrowing it is
//! created each frame:
//! - `ProductList` / `ProductListState`: Scrollable card list
//! - `ButtonBar` / `ButtonBarState`: The two action buttons, with click
//!   hit-testing against the rects cached at render time
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs
//! ├── product_card.rs   (card widget, price and star formatting)
//! ├── product_list.rs
//! ├── location_card.rs
//! ├── button_bar.rs
//! └── alert.rs
//! ```

pub mod alert;
pub mod button_bar;
pub mod location_card;
pub mod product_card;
pub mod product_list;
mod title_bar;

pub use alert::AlertDialog;
pub use button_bar::{ButtonBar, ButtonBarState, ButtonPress};
pub use location_card::LocationCard;
pub use product_card::ProductCard;
pub use product_list::{ProductList, ProductListState};
pub use title_bar::TitleBar;
