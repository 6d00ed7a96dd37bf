//! # Actions
//!
//! Everything that can happen on the screen becomes an `Action`.
//! User presses the items button? That's `Action::LoadItems`.
//! Catalog responds? That's `Action::ItemsLoaded(items)`.
//!
//! `update()` mutates the state and returns an `Effect` telling the TUI
//! which I/O to start. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Result actions are applied in arrival order. Two overlapping taps each
//! spawn their own request and whichever resolves last overwrites the data.

use chrono::Local;
use log::{debug, info, warn};

use crate::catalog::Item;
use crate::core::state::{Alert, App, DisplayMode};
use crate::location::Coordinate;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Items button pressed.
    LoadItems,
    /// Location button pressed.
    LoadLocation,
    ItemsLoaded(Vec<Item>),
    ItemsFailed(String),
    PermissionDenied,
    LocationLoaded(Coordinate),
    LocationFailed(String),
    DismissAlert,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchItems,
    FetchLocation,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::LoadItems => {
            app.display_mode = DisplayMode::Items;
            app.status_message = String::from("Carregando itens...");
            Effect::FetchItems
        }
        Action::LoadLocation => {
            app.display_mode = DisplayMode::Location;
            app.status_message = String::from("Obtendo localização...");
            Effect::FetchLocation
        }
        Action::ItemsLoaded(items) => {
            info!("Loaded {} items", items.len());
            app.status_message = format!(
                "{} itens carregados às {}",
                items.len(),
                Local::now().format("%H:%M:%S")
            );
            app.items = items;
            app.location = None;
            Effect::None
        }
        Action::ItemsFailed(reason) => {
            warn!("Item fetch failed: {}", reason);
            app.status_message = String::from("Falha ao carregar itens");
            app.alert = Some(Alert::items_failed());
            Effect::None
        }
        Action::PermissionDenied => {
            info!("Location permission denied");
            app.status_message = String::from("Permissão de localização negada");
            app.alert = Some(Alert::permission_denied());
            Effect::None
        }
        Action::LocationLoaded(coordinate) => {
            debug!("Location loaded: {:?}", coordinate);
            app.status_message = format!(
                "Localização obtida às {}",
                Local::now().format("%H:%M:%S")
            );
            app.location = Some(coordinate);
            app.items.clear();
            Effect::None
        }
        Action::LocationFailed(reason) => {
            warn!("Location lookup failed: {}", reason);
            app.status_message = String::from("Falha ao obter localização");
            app.alert = Some(Alert::location_failed());
            Effect::None
        }
        Action::DismissAlert => {
            app.alert = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
