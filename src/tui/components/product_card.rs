//! # ProductCard Component
//!
//! Fixed-layout card for one catalog item:
//!
//! ```text
//! ╭──────────────────────────────────────╮
//! │ [img] http://x/y.png                 │
//! │ Shirt                                │
//! │ $ 20.00                              │
//! │ Slim-fit cotton shirt                │
//! │ ★★★★★ 4.5 (100 reviews)              │
//! ╰──────────────────────────────────────╯
//! ```
//!
//! The rating row is not derived from the item: every card shows the same
//! constant rating and review count.
//!
//! Title and description are pre-wrapped with `textwrap` and rendered without
//! Paragraph wrapping, so [`ProductCard::calculate_height`] is exact and the
//! parent list can lay out the scroll canvas before rendering anything.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::catalog::Item;
use crate::tui::component::Component;

/// Rating shown on every card.
pub const STATIC_RATING: f64 = 4.5;
/// Review count shown next to the rating.
pub const STATIC_REVIEW_COUNT: u32 = 100;
pub const STAR_COUNT: usize = 5;

const STAR_FILLED: &str = "★";
const STAR_EMPTY: &str = "☆";
const STAR_COLOR: Color = Color::Rgb(255, 215, 0);
const PRICE_COLOR: Color = Color::Rgb(76, 175, 80);

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Image, price and rating rows.
const FIXED_ROWS: u16 = 3;

/// Rounds half up, matching JavaScript's `Math.round` (4.5 → 5, -4.5 → -4).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Star `i` (1-based) is filled when `i <= round(rating)`.
pub fn star_states(rating: f64) -> [bool; STAR_COUNT] {
    let rounded = round_half_up(rating);
    std::array::from_fn(|i| (i + 1) as f64 <= rounded)
}

pub fn format_price(price: f64) -> String {
    format!("$ {price:.2}")
}

pub fn rating_label(rating: f64, reviews: u32) -> String {
    format!("{rating} ({reviews} reviews)")
}

fn wrap_options(width: usize) -> textwrap::Options<'static> {
    textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return vec![String::new()];
    }
    textwrap::wrap(text, wrap_options(width as usize))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// A stateless component that renders a single item card.
#[derive(Clone, Copy)]
pub struct ProductCard<'a> {
    pub item: &'a Item,
}

impl<'a> ProductCard<'a> {
    pub fn new(item: &'a Item) -> Self {
        Self { item }
    }

    /// Height of the card at the given outer width, borders included.
    pub fn calculate_height(item: &Item, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            return 1;
        }

        let rows = |text: &str| {
            u16::try_from(wrap_lines(text, content_width).len()).unwrap_or(u16::MAX)
        };
        (FIXED_ROWS + VERTICAL_OVERHEAD)
            .saturating_add(rows(&item.title))
            .saturating_add(rows(&item.description))
    }

    fn rating_line() -> Line<'static> {
        let mut spans: Vec<Span<'static>> = star_states(STATIC_RATING)
            .iter()
            .map(|&filled| {
                Span::styled(
                    if filled { STAR_FILLED } else { STAR_EMPTY },
                    Style::default().fg(STAR_COLOR),
                )
            })
            .collect();
        spans.push(Span::styled(
            format!(" {}", rating_label(STATIC_RATING, STATIC_REVIEW_COUNT)),
            Style::default().fg(Color::Gray),
        ));
        Line::from(spans)
    }

    fn lines(&self, content_width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled("[img] ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.item.image.clone(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ])];

        let title_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        lines.extend(
            wrap_lines(&self.item.title, content_width)
                .into_iter()
                .map(|l| Line::styled(l, title_style)),
        );

        lines.push(Line::styled(
            format_price(self.item.price),
            Style::default().fg(PRICE_COLOR).add_modifier(Modifier::BOLD),
        ));

        let description_style = Style::default().fg(Color::Gray);
        lines.extend(
            wrap_lines(&self.item.description, content_width)
                .into_iter()
                .map(|l| Line::styled(l, description_style)),
        );

        lines.push(Self::rating_line());
        lines
    }
}

impl<'a> Widget for ProductCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines(inner_area.width)).render(inner_area, buf);
    }
}

impl<'a> Component for ProductCard<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
