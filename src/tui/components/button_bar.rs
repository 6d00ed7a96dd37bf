//! # ButtonBar Component
//!
//! The two action buttons at the bottom of the screen. The button matching
//! the current display mode is drawn as active.
//!
//! Follows the persistent state + transient wrapper pattern: the rects of
//! the last render are cached in `ButtonBarState` so mouse clicks can be
//! hit-tested between frames.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::state::DisplayMode;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const ITEMS_LABEL: &str = "Carregar Itens";
pub const LOCATION_LABEL: &str = "Obter Localização";

const ACTIVE_COLOR: Color = Color::Rgb(0, 123, 255);
const INACTIVE_BG: Color = Color::Rgb(233, 236, 239);
const INACTIVE_BORDER: Color = Color::Rgb(206, 212, 218);

/// Height of the bar: a bordered single-line button.
pub const BUTTON_BAR_HEIGHT: u16 = 3;

/// Which button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPress {
    Items,
    Location,
}

#[derive(Debug, Default)]
pub struct ButtonBarState {
    pub items_rect: Rect,
    pub location_rect: Rect,
}

impl ButtonBarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<ButtonPress> {
        let position = Position::new(column, row);
        if self.items_rect.contains(position) {
            Some(ButtonPress::Items)
        } else if self.location_rect.contains(position) {
            Some(ButtonPress::Location)
        } else {
            None
        }
    }
}

impl EventHandler for ButtonBarState {
    type Event = ButtonPress;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ButtonPress> {
        match *event {
            TuiEvent::MouseClick(column, row) => self.hit_test(column, row),
            _ => None,
        }
    }
}

pub struct ButtonBar<'a> {
    pub state: &'a mut ButtonBarState,
    pub display_mode: DisplayMode,
}

impl<'a> ButtonBar<'a> {
    pub fn new(state: &'a mut ButtonBarState, display_mode: DisplayMode) -> Self {
        Self {
            state,
            display_mode,
        }
    }

    fn button(label: &str, shortcut: char, active: bool) -> Paragraph<'_> {
        let (style, border) = if active {
            (
                Style::default()
                    .fg(Color::White)
                    .bg(ACTIVE_COLOR)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(ACTIVE_COLOR),
            )
        } else {
            (
                Style::default()
                    .fg(Color::Black)
                    .bg(INACTIVE_BG)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(INACTIVE_BORDER),
            )
        };

        Paragraph::new(format!("{label} [{shortcut}]"))
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            )
    }
}

impl<'a> Component for ButtonBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [items_rect, location_rect] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .spacing(1)
                .areas(area);

        self.state.items_rect = items_rect;
        self.state.location_rect = location_rect;

        frame.render_widget(
            Self::button(ITEMS_LABEL, 'i', self.display_mode == DisplayMode::Items),
            items_rect,
        );
        frame.render_widget(
            Self::button(LOCATION_LABEL, 'l', self.display_mode == DisplayMode::Location),
            location_rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::ui::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &mut ButtonBarState, mode: DisplayMode) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, BUTTON_BAR_HEIGHT)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                ButtonBar::new(state, mode).render(f, area);
            })
            .unwrap();
        terminal
    }

    #[test]
    fn renders_both_labels() {
        let mut state = ButtonBarState::new();
        let terminal = render(&mut state, DisplayMode::None);
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Carregar Itens [i]"));
        assert!(text.contains("Obter Localização [l]"));
    }

    #[test]
    fn active_button_uses_active_color() {
        let mut state = ButtonBarState::new();
        let terminal = render(&mut state, DisplayMode::Location);
        let buffer = terminal.backend().buffer();

        let inside_location = Position::new(state.location_rect.x + 2, state.location_rect.y + 1);
        let inside_items = Position::new(state.items_rect.x + 2, state.items_rect.y + 1);
        assert_eq!(buffer[inside_location].bg, ACTIVE_COLOR);
        assert_eq!(buffer[inside_items].bg, INACTIVE_BG);
    }

    #[test]
    fn clicks_are_hit_tested_against_rendered_rects() {
        let mut state = ButtonBarState::new();
        render(&mut state, DisplayMode::None);

        assert_eq!(
            state.handle_event(&TuiEvent::MouseClick(5, 1)),
            Some(ButtonPress::Items)
        );
        assert_eq!(
            state.handle_event(&TuiEvent::MouseClick(55, 1)),
            Some(ButtonPress::Location)
        );
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(5, 10)), None);
        assert_eq!(state.handle_event(&TuiEvent::Confirm), None);
    }

    #[test]
    fn nothing_is_hit_before_first_render() {
        let state = ButtonBarState::new();
        assert_eq!(state.hit_test(0, 0), None);
    }
}
