//! # Home Screen
//!
//! Welcome copy and the featured destinations from the planner catalog.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::i18n::Translate;
use crate::planner::destinations::CATALOG;
use crate::tui::component::Component;
use crate::tui::components::{BRAND, start_alignment};

pub struct HomeScreen<'a> {
    t: &'a dyn Translate,
}

impl<'a> HomeScreen<'a> {
    pub fn new(t: &'a dyn Translate) -> Self {
        Self { t }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let t = self.t;
        let mut lines = vec![
            Line::from(Span::styled(
                t.t("homeWelcome").into_owned(),
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                t.t("homeSubtitle").into_owned(),
                Style::default().fg(Color::Gray),
            )),
            Line::default(),
            Line::from(Span::styled(
                t.t("homeFeatured").into_owned(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        for dest in CATALOG {
            let entry = if t.is_rtl() {
                format!("{} · {}  •", dest.region, dest.name)
            } else {
                format!("•  {} · {}", dest.name, dest.region)
            };
            lines.push(Line::from(entry));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            t.t("homeHint").into_owned(),
            Style::default().add_modifier(Modifier::DIM),
        )));
        lines
    }
}

impl Component for HomeScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let height = lines.len() as u16;

        let [content] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [content] = Layout::horizontal([Constraint::Min(0)])
            .horizontal_margin(2)
            .areas(content);

        let paragraph = Paragraph::new(lines)
            .alignment(start_alignment(self.t.direction()))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, content);
    }
}
