//! # Trip Details Component
//!
//! Shows a generated plan: a summary block, the day-by-day itinerary in a
//! scroll view, and a back button that discards the plan.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TripDetailsState` (scroll position) lives in `TuiState`
//! - `TripDetails` is created each frame with the plan and borrowed state
//!
//! Card heights are predicted with `textwrap` using the same options as
//! ratatui's `Paragraph` wrapping, so the scroll view can be sized before
//! anything is rendered.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use uuid::Uuid;

use crate::i18n::Translate;
use crate::planner::{DayPlan, TripPlan};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{BRAND, contains, display_width, start_alignment};
use crate::tui::event::TuiEvent;

/// Borders (1 + 1) and padding (1 + 1).
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top and bottom border.
const VERTICAL_OVERHEAD: u16 = 2;
const SUMMARY_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripDetailsEvent {
    /// Return to the planner, discarding the plan.
    Back,
}

#[derive(Default)]
pub struct TripDetailsState {
    pub scroll_state: ScrollViewState,
    plan_id: Option<Uuid>,
}

impl TripDetailsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset scrolling when a different plan is shown.
    pub fn sync(&mut self, plan_id: Uuid) {
        if self.plan_id != Some(plan_id) {
            self.plan_id = Some(plan_id);
            self.scroll_state.scroll_to_top();
        }
    }
}

impl EventHandler for TripDetailsState {
    type Event = TripDetailsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Back => Some(TripDetailsEvent::Back),
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                None
            }
            _ => None,
        }
    }
}

fn day_lines(day: &DayPlan) -> Vec<String> {
    day.activities.iter().map(|a| format!("• {a}")).collect()
}

/// Predicted rendered height of a day card at the given width.
pub fn card_height(day: &DayPlan, width: u16) -> u16 {
    let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
    if content_width == 0 {
        return 1;
    }
    let options = textwrap::Options::new(content_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    let lines: usize = day_lines(day)
        .iter()
        .map(|line| textwrap::wrap(line, &options).len().max(1))
        .sum();
    (lines as u16).max(1) + VERTICAL_OVERHEAD
}

fn shell_areas(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(SUMMARY_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Transient render wrapper for a plan.
pub struct TripDetails<'a> {
    plan: &'a TripPlan,
    state: &'a mut TripDetailsState,
    t: &'a dyn Translate,
}

impl<'a> TripDetails<'a> {
    pub fn new(plan: &'a TripPlan, state: &'a mut TripDetailsState, t: &'a dyn Translate) -> Self {
        Self { plan, state, t }
    }

    fn back_label(t: &dyn Translate) -> String {
        let arrow = if t.is_rtl() { "→" } else { "←" };
        format!("{arrow} {}", t.t("tripBack"))
    }

    /// Where the back button is drawn within `area`.
    pub fn back_button_area(area: Rect, t: &dyn Translate) -> Rect {
        let [_, _, footer] = shell_areas(area);
        let width = display_width(&Self::back_label(t)).min(footer.width);
        if t.is_rtl() {
            Rect::new(footer.right().saturating_sub(width), footer.y, width, footer.height)
        } else {
            Rect::new(footer.x, footer.y, width, footer.height)
        }
    }

    /// Mouse hit test against the back button.
    pub fn handle_click(area: Rect, t: &dyn Translate, column: u16, row: u16) -> Option<TripDetailsEvent> {
        contains(Self::back_button_area(area, t), column, row).then_some(TripDetailsEvent::Back)
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let t = self.t;
        let plan = self.plan;
        let lines = vec![
            Line::from(Span::styled(
                format!("{} {}", t.t("tripTitle"), plan.destination),
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "{} {} · {}",
                plan.day_count(),
                t.t("tripDays"),
                t.t(plan.budget.label_key())
            )),
            Line::from(Span::styled(
                format!(
                    "{}: {} {}",
                    t.t("tripEstimatedCost"),
                    plan.estimated_cost_sar,
                    t.t("currency")
                ),
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(start_alignment(t.direction())),
            area,
        );
    }

    fn render_itinerary(&mut self, frame: &mut Frame, area: Rect) {
        // Leave a column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let heights: Vec<u16> = self
            .plan
            .days
            .iter()
            .map(|day| card_height(day, content_width))
            .collect();
        let total_height: u16 = heights.iter().sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let alignment = start_alignment(self.t.direction());
        let mut y_offset: u16 = 0;
        for (day, height) in self.plan.days.iter().zip(heights) {
            let title = format!(" {} {} · {} ", self.t.t("tripDay"), day.day, day.title);
            let card = Paragraph::new(day_lines(day).join("\n"))
                .alignment(alignment)
                .wrap(Wrap { trim: false })
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::DarkGray))
                        .title(Line::from(title).alignment(alignment))
                        .padding(Padding::horizontal(1)),
                );
            scroll_view.render_widget(card, Rect::new(0, y_offset, content_width, height));
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl Component for TripDetails<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.plan.id);
        let [summary, itinerary, _] = shell_areas(area);

        self.render_summary(frame, summary);
        self.render_itinerary(frame, itinerary);

        let button = Self::back_button_area(area, self.t);
        frame.render_widget(
            Paragraph::new(Self::back_label(self.t))
                .style(Style::default().fg(BRAND).add_modifier(Modifier::BOLD)),
            button,
        );

        let [_, _, footer] = shell_areas(area);
        let hint_width = footer.width.saturating_sub(button.width);
        let (hint_area, hint_alignment) = if self.t.is_rtl() {
            (Rect::new(footer.x, footer.y, hint_width, 1), Alignment::Left)
        } else {
            (Rect::new(button.right(), footer.y, hint_width, 1), Alignment::Right)
        };
        frame.render_widget(
            Paragraph::new(self.t.t("tripHint").into_owned())
                .style(Style::default().add_modifier(Modifier::DIM))
                .alignment(hint_alignment),
            hint_area,
        );
    }
}
