//! # AlertDialog Component
//!
//! Modal message box drawn over the rest of the screen. While it is up the
//! event loop only accepts Enter/Esc (dismiss) and Ctrl+C.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::core::state::Alert;
use crate::tui::component::Component;

const DIALOG_WIDTH: u16 = 48;

pub struct AlertDialog<'a> {
    pub alert: &'a Alert,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }

    fn dialog_area(&self, area: Rect) -> Rect {
        let width = DIALOG_WIDTH.min(area.width);
        let inner_width = width.saturating_sub(4).max(1) as usize;
        let message_rows = textwrap::wrap(&self.alert.message, inner_width).len() as u16;
        // borders 2 + message + blank + hint
        let height = (message_rows + 4).min(area.height);

        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, dialog, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .areas(row);
        dialog
    }
}

impl<'a> Component for AlertDialog<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dialog = self.dialog_area(area);
        frame.render_widget(Clear, dialog);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" {} ", self.alert.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1));

        let text = vec![
            Line::from(self.alert.message.as_str()),
            Line::default(),
            Line::styled("OK [Enter]", Style::default().fg(Color::DarkGray)).centered(),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, dialog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::ui::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn renders_title_and_message() {
        let alert = Alert::permission_denied();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                AlertDialog::new(&alert).render(f, area);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Permissão negada"));
        assert!(text.contains("Não foi possível acessar a localização."));
        assert!(text.contains("OK [Enter]"));
    }

    #[test]
    fn dialog_is_centered_and_bounded() {
        let alert = Alert::items_failed();
        let dialog = AlertDialog::new(&alert).dialog_area(Rect::new(0, 0, 100, 30));
        assert_eq!(dialog.width, DIALOG_WIDTH);
        assert_eq!(dialog.x, 26);
        assert_eq!(dialog.height, 5);

        let small = AlertDialog::new(&alert).dialog_area(Rect::new(0, 0, 20, 4));
        assert!(small.width <= 20);
        assert!(small.height <= 4);
    }
}
