use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::button_bar::BUTTON_BAR_HEIGHT;
use crate::tui::components::{AlertDialog, ButtonBar, LocationCard, ProductList, TitleBar};

const HINTS: &str = "i itens • l localização • ↑/↓ rolar • q sair";

/// Splits the frame into title, main, button bar and hint rows.
pub fn screen_layout(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(BUTTON_BAR_HEIGHT), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [title_area, main_area, button_area, hint_area] = screen_layout(frame.area());

    TitleBar::new(app.status_message.clone()).render(frame, title_area);

    if app.shows_items() {
        ProductList::new(&mut tui.product_list, &app.items).render(frame, main_area);
    } else if let Some(coordinate) = app.visible_location() {
        LocationCard::new(coordinate).render(frame, main_area);
    }

    ButtonBar::new(&mut tui.button_bar, app.display_mode).render(frame, button_area);

    frame.render_widget(
        Line::styled(HINTS, Style::default().fg(Color::DarkGray)).centered(),
        hint_area,
    );

    // Modal goes last so it covers everything else
    if let Some(alert) = &app.alert {
        let full = frame.area();
        AlertDialog::new(alert).render(frame, full);
    }
}

/// Flattens a test buffer into one string, row after row.
#[cfg(test)]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::location::Coordinate;
    use crate::test_support::{sample_items, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn initial_screen_shows_only_buttons() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Carregar Itens"));
        assert!(text.contains("Obter Localização"));
        assert!(!text.contains("Localização Atual"));
        assert!(!text.contains("Nenhum item carregado"));
    }

    #[test]
    fn items_mode_shows_cards() {
        let mut app = test_app();
        update(&mut app, Action::LoadItems);
        update(&mut app, Action::ItemsLoaded(sample_items()));
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Shirt"));
        assert!(text.contains("$ 20.00"));
        assert!(!text.contains("Localização Atual"));
    }

    #[test]
    fn location_mode_shows_card_only_with_a_coordinate() {
        let mut app = test_app();
        update(&mut app, Action::LoadLocation);
        let mut tui = TuiState::new();
        assert!(!draw(&app, &mut tui).contains("Localização Atual"));

        update(
            &mut app,
            Action::LocationLoaded(Coordinate {
                latitude: -23.5505,
                longitude: -46.6333,
            }),
        );
        let text = draw(&app, &mut tui);
        assert!(text.contains("Localização Atual"));
        assert!(text.contains("Latitude: -23.5505"));
        assert!(text.contains("Longitude: -46.6333"));
    }

    #[test]
    fn alert_is_drawn_over_the_screen() {
        let mut app = test_app();
        update(&mut app, Action::LoadItems);
        update(&mut app, Action::ItemsFailed("offline".to_string()));
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Não foi possível carregar os dados."));
    }

    #[test]
    fn button_rects_are_cached_for_hit_testing() {
        let app = test_app();
        let mut tui = TuiState::new();
        draw(&app, &mut tui);
        let [_, _, button_area, _] = screen_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(tui.button_bar.items_rect.y, button_area.y);
        assert_eq!(tui.button_bar.location_rect.height, BUTTON_BAR_HEIGHT);
    }
}
