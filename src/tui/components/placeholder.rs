//! # Placeholder Screens
//!
//! Two screens without a real feature behind them yet:
//!
//! - `TripsEmptyState`: shown on the Trips tab when no plan exists. Its
//!   button sends the user to the planner.
//! - `DestinationsPlaceholder`: a grid of the catalog city names.
//!
//! Both share the same centered layout: icon, title, wrapped description,
//! then a body (button or grid).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::i18n::Translate;
use crate::planner::destinations;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{BRAND, centered_columns, contains, display_width};
use crate::tui::event::TuiEvent;

const HORIZONTAL_PADDING: u16 = 4;
const BUTTON_HEIGHT: u16 = 3;
const TILE_HEIGHT: u16 = 3;

/// Vertical slots of a placeholder screen.
struct PlaceholderAreas {
    icon: Rect,
    title: Rect,
    description: Rect,
    body: Rect,
}

fn placeholder_areas(area: Rect, description: &str, body_height: u16) -> PlaceholderAreas {
    let [padded] = Layout::horizontal([Constraint::Min(0)])
        .horizontal_margin(HORIZONTAL_PADDING)
        .areas(area);

    let wrap_width = padded.width.max(1) as usize;
    let description_height = textwrap::wrap(description, wrap_width).len().max(1) as u16;

    let [icon, _, title, description, _, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(description_height),
        Constraint::Length(1),
        Constraint::Length(body_height),
    ])
    .flex(Flex::Center)
    .areas(padded);

    PlaceholderAreas {
        icon,
        title,
        description,
        body,
    }
}

fn render_heading(frame: &mut Frame, areas: &PlaceholderAreas, icon: &str, title: &str, description: &str) {
    frame.render_widget(Paragraph::new(icon).alignment(Alignment::Center), areas.icon);
    frame.render_widget(
        Paragraph::new(title.to_string())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        areas.title,
    );
    let wrapped = textwrap::wrap(description, areas.description.width.max(1) as usize).join("\n");
    frame.render_widget(
        Paragraph::new(wrapped)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        areas.description,
    );
}

// ============================================================================
// Trips empty state
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyStateEvent {
    /// The call to action: go plan a trip.
    PlanFirst,
}

pub struct TripsEmptyState<'a> {
    t: &'a dyn Translate,
}

impl<'a> TripsEmptyState<'a> {
    pub fn new(t: &'a dyn Translate) -> Self {
        Self { t }
    }

    fn button_label(&self) -> String {
        self.t.t("planFirst").into_owned()
    }

    /// Where the call-to-action button is drawn within `area`.
    pub fn button_area(&self, area: Rect) -> Rect {
        let description = self.t.t("noActiveTripsDesc");
        let areas = placeholder_areas(area, &description, BUTTON_HEIGHT);
        centered_columns(areas.body, display_width(&self.button_label()) + 6)
    }

    /// Mouse hit test against the button.
    pub fn handle_click(&self, area: Rect, column: u16, row: u16) -> Option<EmptyStateEvent> {
        contains(self.button_area(area), column, row).then_some(EmptyStateEvent::PlanFirst)
    }
}

impl Component for TripsEmptyState<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let description = self.t.t("noActiveTripsDesc");
        let areas = placeholder_areas(area, &description, BUTTON_HEIGHT);
        render_heading(frame, &areas, "🏜", &self.t.t("noActiveTrips"), &description);

        let button = Paragraph::new(self.button_label())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(BRAND)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::bordered().border_type(BorderType::Rounded));
        frame.render_widget(button, self.button_area(area));
    }
}

impl EventHandler for TripsEmptyState<'_> {
    type Event = EmptyStateEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit => Some(EmptyStateEvent::PlanFirst),
            _ => None,
        }
    }
}

// ============================================================================
// Destinations placeholder
// ============================================================================

pub struct DestinationsPlaceholder<'a> {
    t: &'a dyn Translate,
}

impl<'a> DestinationsPlaceholder<'a> {
    pub fn new(t: &'a dyn Translate) -> Self {
        Self { t }
    }
}

impl Component for DestinationsPlaceholder<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cities: Vec<&str> = destinations::names().collect();
        let rows = cities.len().div_ceil(2) as u16;
        let description = self.t.t("exploreDestDesc");
        let areas = placeholder_areas(area, &description, rows * TILE_HEIGHT);
        render_heading(frame, &areas, "🏛", &self.t.t("exploreDest"), &description);

        let row_areas = Layout::vertical((0..rows).map(|_| Constraint::Length(TILE_HEIGHT))).split(areas.body);
        for (row_area, pair) in row_areas.iter().zip(cities.chunks(2)) {
            let columns = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .spacing(2)
                .split(*row_area);
            // Grid flows from the start edge
            let mut cells: Vec<Rect> = columns.to_vec();
            if self.t.is_rtl() {
                cells.reverse();
            }
            for (cell, city) in cells.into_iter().zip(pair) {
                let tile = Paragraph::new(*city)
                    .alignment(Alignment::Center)
                    .style(Style::default().add_modifier(Modifier::BOLD))
                    .block(
                        Block::bordered()
                            .border_type(BorderType::Rounded)
                            .border_style(Style::default().fg(Color::DarkGray)),
                    );
                frame.render_widget(tile, cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, LanguageContext};
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_empty_state_shows_copy_and_button() {
        let ctx = LanguageContext::new(Language::English);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| TripsEmptyState::new(&ctx).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("No active trips"));
        assert!(text.contains("Plan your first trip"));
    }

    #[test]
    fn test_empty_state_enter_is_call_to_action() {
        let ctx = LanguageContext::new(Language::English);
        let mut empty = TripsEmptyState::new(&ctx);
        assert_eq!(
            empty.handle_event(&TuiEvent::Submit),
            Some(EmptyStateEvent::PlanFirst)
        );
        assert_eq!(empty.handle_event(&TuiEvent::CursorDown), None);
    }

    #[test]
    fn test_empty_state_click_hits_button_only() {
        let ctx = LanguageContext::new(Language::English);
        let empty = TripsEmptyState::new(&ctx);
        let area = Rect::new(0, 0, 60, 20);
        let button = empty.button_area(area);

        assert_eq!(
            empty.handle_click(area, button.x + 1, button.y + 1),
            Some(EmptyStateEvent::PlanFirst)
        );
        assert_eq!(empty.handle_click(area, 0, 0), None);
    }

    #[test]
    fn test_destinations_lists_all_cities() {
        let ctx = LanguageContext::new(Language::English);
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal
            .draw(|f| DestinationsPlaceholder::new(&ctx).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Explore destinations"));
        for city in ["Riyadh", "Jeddah", "AlUla", "NEOM", "Taif", "Abha"] {
            assert!(text.contains(city), "missing {city}");
        }
    }

    #[test]
    fn test_arabic_empty_state() {
        let ctx = LanguageContext::new(Language::Arabic);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| TripsEmptyState::new(&ctx).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("لا توجد رحلات نشطة"));
    }
}
