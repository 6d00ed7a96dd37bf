//! # ProductList Component
//!
//! Scrollable column of [`ProductCard`]s.
//!
//! `ProductList` is a transient component (created each frame) that wraps
//! `&'a mut ProductListState` (persistent state) and the item slice (props).
//! Card heights are measured up front so the `ScrollView` canvas has the
//! right size before anything is drawn.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::catalog::Item;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::product_card::ProductCard;
use crate::tui::event::TuiEvent;

/// Blank rows between two cards.
const CARD_GAP: u16 = 1;

/// Scroll state for the product list. Persisted in `TuiState`.
#[derive(Default)]
pub struct ProductListState {
    pub scroll_state: ScrollViewState,
    /// Measured card heights from the last render.
    pub heights: Vec<u16>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl ProductListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total canvas rows, saturating at `u16::MAX` for very long lists.
    pub fn content_height(&self) -> u16 {
        let gaps = u16::try_from(self.heights.len().saturating_sub(1))
            .unwrap_or(u16::MAX)
            .saturating_mul(CARD_GAP);
        self.heights
            .iter()
            .fold(gaps, |acc, &height| acc.saturating_add(height))
    }

    /// Top row of each card on the canvas. Saturates like `content_height`.
    pub fn card_offsets(&self) -> Vec<u16> {
        self.heights
            .iter()
            .scan(0u16, |top, &height| {
                let this = *top;
                *top = top.saturating_add(height).saturating_add(CARD_GAP);
                Some(this)
            })
            .collect()
    }

    /// Indices of the cards overlapping the viewport, plus half a screen of
    /// buffer on each side.
    pub fn visible_range(&self, offsets: &[u16]) -> Range<usize> {
        let scroll_offset = self.scroll_state.offset().y;
        let buffer = self.viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(self.viewport_height)
            .saturating_add(buffer);

        let start = offsets
            .iter()
            .zip(&self.heights)
            .position(|(&top, &height)| top.saturating_add(height) > buffered_start)
            .unwrap_or(offsets.len());
        let end = offsets.partition_point(|&top| top < buffered_end);
        start..end.max(start)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Back to the first card, e.g. after a new list arrives.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for ProductListState {
    /// The new vertical offset, when the event scrolled the list.
    type Event = u16;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<u16> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::ScrollToTop => self.scroll_state.scroll_to_top(),
            TuiEvent::ScrollToBottom => {
                let max_y = self.content_height().saturating_sub(self.viewport_height);
                self.scroll_state.set_offset(Position { x: 0, y: max_y });
            }
            _ => return None,
        }
        self.clamp_scroll();
        Some(self.scroll_state.offset().y)
    }
}

pub struct ProductList<'a> {
    pub state: &'a mut ProductListState,
    pub items: &'a [Item],
}

impl<'a> ProductList<'a> {
    pub fn new(state: &'a mut ProductListState, items: &'a [Item]) -> Self {
        Self { state, items }
    }
}

impl<'a> Component for ProductList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.items.is_empty() {
            self.state.heights.clear();
            let empty = Paragraph::new("Nenhum item carregado")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        self.state.heights = self
            .items
            .iter()
            .map(|item| ProductCard::calculate_height(item, content_width))
            .collect();
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, self.state.content_height()))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let offsets = self.state.card_offsets();
        for i in self.state.visible_range(&offsets) {
            let (top, height) = (offsets[i], self.state.heights[i]);
            // Cards past the end of a saturated canvas cannot be placed
            if top.checked_add(height).is_none() {
                break;
            }
            let card_rect = Rect::new(0, top, content_width, height);
            scroll_view.render_widget(ProductCard::new(&self.items[i]), card_rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
