//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Background requests
//!
//! Each button press spawns a tokio task that talks to a provider and sends
//! the outcome back as an `Action` over an `std::sync::mpsc` channel. The
//! loop drains that channel every iteration. Nothing is cancelled or
//! de-duplicated: pressing a button twice runs two requests, and results
//! are applied in the order they arrive.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::catalog::{CatalogProvider, HttpCatalog};
use crate::core::action::{Action, Effect, update};
use crate::core::config::{LocationSource, ResolvedConfig};
use crate::core::state::App;
use crate::location::{FixedLocator, IpLocator, LocationProvider, PermissionStatus};
use crate::tui::component::EventHandler;
use crate::tui::components::{ButtonBarState, ButtonPress, ProductListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long the loop sleeps waiting for input before checking for results.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub product_list: ProductListState,
    pub button_bar: ButtonBarState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the catalog client from a resolved config.
pub fn build_catalog(config: &ResolvedConfig) -> Arc<dyn CatalogProvider> {
    Arc::new(HttpCatalog::new(Some(config.catalog_base_url.clone())))
}

/// Build the location provider from a resolved config.
pub fn build_locator(config: &ResolvedConfig) -> Arc<dyn LocationProvider> {
    match config.location_source {
        LocationSource::Fixed => Arc::new(FixedLocator::new(
            config.fixed_coordinate,
            config.permission,
        )),
        LocationSource::Ip => Arc::new(IpLocator::new(
            Some(config.location_base_url.clone()),
            config.permission,
        )),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(build_catalog(&config), build_locator(&config));
    let mut tui = TuiState::new();
    info!(
        "Providers: catalog={}, location={}",
        app.catalog.name(),
        app.locator.name()
    );

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut needs_redraw = true; // Force first frame

    let result = (|| -> std::io::Result<()> {
        loop {
            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
                needs_redraw = false;
            }

            // Process first event + drain ALL pending events before next draw
            let mut should_quit = false;
            let mut next = poll_event_timeout(IDLE_POLL)?;
            while let Some(event) = next {
                needs_redraw = true;
                let effect = handle_event(&mut app, &mut tui, event);
                if run_effect(effect, &app, &tx) {
                    should_quit = true;
                    break;
                }
                next = poll_event_immediate()?;
            }

            if should_quit {
                return Ok(());
            }

            // Handle background task results
            while let Ok(action) = rx.try_recv() {
                needs_redraw = true;
                debug!("Event loop received: {:?}", action);
                if matches!(action, Action::ItemsLoaded(_)) {
                    tui.product_list.reset();
                }
                let effect = update(&mut app, action);
                if run_effect(effect, &app, &tx) {
                    return Ok(());
                }
            }
        }
    })();

    ratatui::restore();
    result
}

/// Routes one terminal event. Returns the effect produced by the reducer,
/// if the event reached it.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }

    // An open alert swallows everything except dismissal
    if app.alert.is_some() {
        return match event {
            TuiEvent::Confirm | TuiEvent::Escape => update(app, Action::DismissAlert),
            _ => Effect::None,
        };
    }

    if let Some(press) = tui.button_bar.handle_event(&event) {
        let action = match press {
            ButtonPress::Items => Action::LoadItems,
            ButtonPress::Location => Action::LoadLocation,
        };
        return update(app, action);
    }

    match event {
        TuiEvent::Quit | TuiEvent::Escape => update(app, Action::Quit),
        TuiEvent::LoadItems => update(app, Action::LoadItems),
        TuiEvent::LoadLocation => update(app, Action::LoadLocation),
        _ => {
            if app.shows_items() {
                tui.product_list.handle_event(&event);
            }
            Effect::None
        }
    }
}

/// Starts whatever I/O the effect asks for. Returns true on quit.
fn run_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::Quit => return true,
        Effect::FetchItems => {
            spawn_items_fetch(app.catalog.clone(), tx.clone());
        }
        Effect::FetchLocation => {
            spawn_location_fetch(app.locator.clone(), tx.clone());
        }
        Effect::None => {}
    }
    false
}

pub fn spawn_items_fetch(
    catalog: Arc<dyn CatalogProvider>,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning catalog request ({})", catalog.name());
    tokio::spawn(async move {
        let action = match catalog.fetch_items().await {
            Ok(items) => Action::ItemsLoaded(items),
            Err(e) => Action::ItemsFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send catalog result: receiver dropped");
        }
    })
}

pub fn spawn_location_fetch(
    locator: Arc<dyn LocationProvider>,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning location request ({})", locator.name());
    tokio::spawn(async move {
        let action = match locator.request_permission().await {
            Ok(PermissionStatus::Denied) => Action::PermissionDenied,
            Ok(PermissionStatus::Granted) => match locator.current_position().await {
                Ok(coordinate) => Action::LocationLoaded(coordinate),
                Err(e) => Action::LocationFailed(e.to_string()),
            },
            Err(e) => Action::LocationFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send location result: receiver dropped");
        }
    })
}
