//! # Header Component
//!
//! Single-line bar at the top of every screen: app title and tagline on the
//! start edge, language badge on the end edge. Clicking the badge toggles
//! the language.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::i18n::{Direction, Language, Translate};
use crate::tui::component::Component;
use crate::tui::components::{BRAND, display_width, start_alignment};

pub struct Header {
    pub title: String,
    pub tagline: String,
    pub language: Language,
    pub direction: Direction,
}

impl Header {
    pub fn new(t: &dyn Translate, language: Language) -> Self {
        Self {
            title: t.t("appTitle").into_owned(),
            tagline: t.t("appTagline").into_owned(),
            language,
            direction: t.direction(),
        }
    }

    fn badge_text(language: Language) -> String {
        format!("[{}]", language.badge())
    }

    /// Split the header into (title, badge) areas.
    fn areas(area: Rect, language: Language, direction: Direction) -> (Rect, Rect) {
        let badge_width = display_width(&Self::badge_text(language)) + 1;
        if direction.is_rtl() {
            let [badge, title] =
                Layout::horizontal([Constraint::Length(badge_width), Constraint::Min(0)]).areas(area);
            (title, badge)
        } else {
            let [title, badge] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(badge_width)]).areas(area);
            (title, badge)
        }
    }

    /// Where the language badge is drawn, for click hit-testing.
    pub fn badge_area(area: Rect, language: Language, direction: Direction) -> Rect {
        Self::areas(area, language, direction).1
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (title_area, badge_area) = Self::areas(area, self.language, self.direction);

        let title = Line::from(vec![
            Span::styled(
                self.title.clone(),
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                self.tagline.clone(),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(title).alignment(start_alignment(self.direction)),
            title_area,
        );

        let badge_alignment = if self.direction.is_rtl() {
            Alignment::Left
        } else {
            Alignment::Right
        };
        frame.render_widget(
            Paragraph::new(Self::badge_text(self.language))
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(badge_alignment),
            badge_area,
        );
    }
}
