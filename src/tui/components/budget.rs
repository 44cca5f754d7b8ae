//! # Budget Screen
//!
//! Splits the configured trip budget across spending categories and shows
//! one gauge per category.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Gauge, Paragraph};

use crate::i18n::Translate;
use crate::tui::component::Component;
use crate::tui::components::{BRAND, start_alignment};

/// Category translation keys and their share of the total, in percent.
pub const CATEGORIES: [(&str, u32); 4] = [
    ("budgetAccommodation", 40),
    ("budgetTransport", 25),
    ("budgetFood", 20),
    ("budgetActivities", 15),
];

const GAUGE_HEIGHT: u16 = 3;

/// Amount per category. The last category absorbs rounding so the parts
/// always add up to `total`.
pub fn allocations(total: u32) -> Vec<(&'static str, u32)> {
    let mut remaining = total;
    CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, (key, percent))| {
            let amount = if i == CATEGORIES.len() - 1 {
                remaining
            } else {
                (u64::from(total) * u64::from(*percent) / 100) as u32
            };
            remaining -= amount;
            (*key, amount)
        })
        .collect()
}

pub struct BudgetScreen<'a> {
    pub total_sar: u32,
    t: &'a dyn Translate,
}

impl<'a> BudgetScreen<'a> {
    pub fn new(total_sar: u32, t: &'a dyn Translate) -> Self {
        Self { total_sar, t }
    }
}

impl Component for BudgetScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let t = self.t;
        let [content] = Layout::horizontal([Constraint::Min(0)])
            .horizontal_margin(2)
            .areas(area);

        let mut constraints = vec![Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)];
        constraints.extend(CATEGORIES.iter().map(|_| Constraint::Length(GAUGE_HEIGHT)));
        let rows = Layout::vertical(constraints).split(content);

        frame.render_widget(
            Paragraph::new(Span::styled(
                t.t("budgetTitle").into_owned(),
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ))
            .alignment(start_alignment(t.direction())),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(format!(
                "{}: {} {}",
                t.t("budgetTotal"),
                self.total_sar,
                t.t("currency")
            ))
            .alignment(start_alignment(t.direction())),
            rows[1],
        );

        for ((key, amount), row) in allocations(self.total_sar).into_iter().zip(rows.iter().skip(3)) {
            let ratio = if self.total_sar == 0 {
                0.0
            } else {
                f64::from(amount) / f64::from(self.total_sar)
            };
            let gauge = Gauge::default()
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::DarkGray))
                        .title(format!(" {} ", t.t(key))),
                )
                .gauge_style(Style::default().fg(BRAND).bg(Color::Black))
                .ratio(ratio.clamp(0.0, 1.0))
                .label(format!("{amount} {}", t.t("currency")));
            frame.render_widget(gauge, *row);
        }
    }
}
