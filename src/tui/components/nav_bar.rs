//! # Navigation Bar
//!
//! Bottom tab bar. Receives the active tab and emits `NavEvent::Select`;
//! it is how the user moves between screens. In right-to-left mode the
//! tab order is mirrored so Home sits on the right.
//!
//! The row under the labels carries the global key hints.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::tab::Tab;
use crate::i18n::{Direction, Translate};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{BRAND, contains, truncate_str};
use crate::tui::event::TuiEvent;

/// Height of the bar including its top border.
pub const NAV_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Select(Tab),
}

pub struct NavBar {
    pub active: Tab,
    /// Labels in `Tab::ALL` order.
    pub labels: Vec<String>,
    pub direction: Direction,
    pub hint: String,
}

impl NavBar {
    pub fn new(active: Tab, t: &dyn Translate) -> Self {
        Self {
            active,
            labels: Tab::ALL.iter().map(|tab| t.t(tab.label_key()).into_owned()).collect(),
            direction: t.direction(),
            hint: t.t("quitHint").into_owned(),
        }
    }

    /// Tabs in on-screen order, left to right.
    fn visual_order(direction: Direction) -> Vec<Tab> {
        let mut tabs = Tab::ALL.to_vec();
        if direction.is_rtl() {
            tabs.reverse();
        }
        tabs
    }

    fn slots(area: Rect, direction: Direction) -> Vec<(Tab, Rect)> {
        let inner = Block::default().borders(Borders::TOP).inner(area);
        let count = Tab::ALL.len() as u32;
        let columns = Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count))).split(inner);
        Self::visual_order(direction)
            .into_iter()
            .zip(columns.iter().copied())
            .collect()
    }

    /// Which tab, if any, is under the given screen position.
    pub fn tab_at(area: Rect, direction: Direction, column: u16, row: u16) -> Option<Tab> {
        if !contains(area, column, row) {
            return None;
        }
        Self::slots(area, direction)
            .into_iter()
            .find(|(_, slot)| column >= slot.left() && column < slot.right())
            .map(|(tab, _)| tab)
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(block, area);

        for (tab, slot) in Self::slots(area, self.direction) {
            let label = self.labels.get(tab.index()).map(String::as_str).unwrap_or(tab.id());
            let text = format!("{} {}", tab.index() + 1, label);
            let text = truncate_str(&text, slot.width as usize);

            let style = if tab == self.active {
                Style::default()
                    .fg(Color::White)
                    .bg(BRAND)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let [line_area, _] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(slot);
            frame.render_widget(
                Paragraph::new(Line::from(text)).style(style).alignment(Alignment::Center),
                line_area,
            );
        }

        if area.height >= NAV_HEIGHT {
            let hint_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
            frame.render_widget(
                Paragraph::new(truncate_str(&self.hint, area.width as usize))
                    .style(Style::default().add_modifier(Modifier::DIM))
                    .alignment(Alignment::Center),
                hint_area,
            );
        }
    }
}

impl EventHandler for NavBar {
    type Event = NavEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::SelectIndex(i) => Tab::from_index(*i).map(NavEvent::Select),
            TuiEvent::NextTab => Some(NavEvent::Select(self.active.next())),
            TuiEvent::PrevTab => Some(NavEvent::Select(self.active.prev())),
            _ => None,
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

    fn nav(active: Tab, language: Language) -> NavBar {
        NavBar::new(active, &LanguageContext::new(language))
    }

    #[test]
    fn test_number_keys_select_tabs_in_bar_order() {
        let mut bar = nav(Tab::Home, Language::English);
        assert_eq!(
            bar.handle_event(&TuiEvent::SelectIndex(3)),
            Some(NavEvent::Select(Tab::Trips))
        );
        assert_eq!(bar.handle_event(&TuiEvent::SelectIndex(9)), None);
    }

    #[test]
    fn test_tab_cycling_from_active() {
        let mut bar = nav(Tab::Profile, Language::English);
        assert_eq!(
            bar.handle_event(&TuiEvent::NextTab),
            Some(NavEvent::Select(Tab::Home))
        );
        assert_eq!(
            bar.handle_event(&TuiEvent::PrevTab),
            Some(NavEvent::Select(Tab::Trips))
        );
    }

    #[test]
    fn test_ignores_other_events() {
        let mut bar = nav(Tab::Home, Language::English);
        assert_eq!(bar.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_tab_at_mirrors_in_rtl() {
        let area = Rect::new(0, 20, 50, NAV_HEIGHT);
        assert_eq!(NavBar::tab_at(area, Direction::Ltr, 1, 21), Some(Tab::Home));
        assert_eq!(NavBar::tab_at(area, Direction::Rtl, 1, 21), Some(Tab::Profile));
        assert_eq!(NavBar::tab_at(area, Direction::Rtl, 49, 21), Some(Tab::Home));
        assert_eq!(NavBar::tab_at(area, Direction::Ltr, 1, 5), None);
    }

    #[test]
    fn test_renders_all_labels() {
        let mut terminal = Terminal::new(TestBackend::new(80, NAV_HEIGHT)).unwrap();
        let mut bar = nav(Tab::Planner, Language::English);
        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        for label in ["Home", "Explore", "Planner", "Trips", "Budget"] {
            assert!(text.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_key_hint_on_bottom_row() {
        let mut terminal = Terminal::new(TestBackend::new(80, NAV_HEIGHT)).unwrap();
        let mut bar = nav(Tab::Home, Language::English);
        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let bottom: String = (0..80u16)
            .map(|x| buffer[(x, NAV_HEIGHT - 1)].symbol())
            .collect();
        assert!(bottom.contains("q quit"), "bottom row: {bottom:?}");
    }
}
