//! # Application State
//!
//! ```text
//! App
//! ├── catalog: Arc<dyn CatalogProvider>    // remote item API
//! ├── locator: Arc<dyn LocationProvider>   // permission + position
//! ├── items: Vec<Item>                     // last fetched catalog
//! ├── location: Option<Coordinate>         // last fetched position
//! ├── display_mode: DisplayMode            // which dataset is on screen
//! ├── alert: Option<Alert>                 // modal message, if any
//! └── status_message: String               // title bar text
//! ```
//!
//! `items` and `location` are never both populated by a successful fetch:
//! each success clears the other slot. State changes only happen through
//! `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::catalog::{CatalogProvider, Item};
use crate::location::{Coordinate, LocationProvider};

/// Which dataset the screen shows. Set as soon as a button is pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    None,
    Items,
    Location,
}

/// A modal message the user has to dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn items_failed() -> Self {
        Self::new("Erro", "Não foi possível carregar os dados.")
    }

    pub fn permission_denied() -> Self {
        Self::new("Permissão negada", "Não foi possível acessar a localização.")
    }

    pub fn location_failed() -> Self {
        Self::new("Erro", "Não foi possível obter a localização.")
    }
}

pub struct App {
    pub catalog: Arc<dyn CatalogProvider>,
    pub locator: Arc<dyn LocationProvider>,
    pub items: Vec<Item>,
    pub location: Option<Coordinate>,
    pub display_mode: DisplayMode,
    pub alert: Option<Alert>,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<dyn CatalogProvider>, locator: Arc<dyn LocationProvider>) -> Self {
        Self {
            catalog,
            locator,
            items: Vec::new(),
            location: None,
            display_mode: DisplayMode::None,
            alert: None,
            status_message: String::from("Escolha uma opção"),
        }
    }

    /// The coordinate to draw, if the location card should be visible.
    pub fn visible_location(&self) -> Option<Coordinate> {
        match self.display_mode {
            DisplayMode::Location => self.location,
            _ => None,
        }
    }

    pub fn shows_items(&self) -> bool {
        self.display_mode == DisplayMode::Items
    }
}
