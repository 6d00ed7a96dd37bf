//! # LocationCard Component
//!
//! Centered card with the current coordinate, placed a little above the
//! middle of the main area.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::location::Coordinate;
use crate::tui::component::Component;

const HEADER_BG: Color = Color::Rgb(0, 123, 255);
const TEXT_COLOR: Color = Color::Rgb(173, 181, 189);
/// Header + latitude + longitude + borders.
const CARD_HEIGHT: u16 = 5;

pub struct LocationCard {
    pub coordinate: Coordinate,
}

impl LocationCard {
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }

    /// 80% of the width, top edge at 40% of the height.
    pub fn card_area(area: Rect) -> Rect {
        let [_, row, _] = Layout::vertical([
            Constraint::Percentage(40),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area);
        let [_, card, _] = Layout::horizontal([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .areas(row);
        card
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let text_style = Style::default().fg(TEXT_COLOR);
        vec![
            Line::styled(
                "Localização Atual",
                Style::default()
                    .fg(Color::White)
                    .bg(HEADER_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(format!("Latitude: {}", self.coordinate.latitude), text_style),
            Line::styled(format!("Longitude: {}", self.coordinate.longitude), text_style),
        ]
    }
}

impl Component for LocationCard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let card = Self::card_area(area);
        frame.render_widget(Clear, card);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let paragraph = Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(paragraph, card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::ui::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn coordinates_use_shortest_float_form() {
        let card = LocationCard::new(Coordinate {
            latitude: -23.5505,
            longitude: 10.0,
        });
        let lines: Vec<String> = card.lines().iter().map(|l| l.to_string()).collect();
        assert_eq!(lines[0], "Localização Atual");
        assert_eq!(lines[1], "Latitude: -23.5505");
        assert_eq!(lines[2], "Longitude: 10");
    }

    #[test]
    fn card_sits_inside_main_area() {
        let area = Rect::new(0, 1, 100, 20);
        let card = LocationCard::card_area(area);
        assert_eq!(card.height, CARD_HEIGHT);
        assert_eq!(card.width, 80);
        assert_eq!(card.x, 10);
        assert_eq!(card.y, 9);
    }

    #[test]
    fn renders_coordinate() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut card = LocationCard::new(Coordinate {
            latitude: 52.52,
            longitude: 13.405,
        });
        terminal
            .draw(|f| {
                let area = f.area();
                card.render(f, area);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Localização Atual"));
        assert!(text.contains("Latitude: 52.52"));
        assert!(text.contains("Longitude: 13.405"));
    }
}
