//! # Shell Layout
//!
//! Lays out the persistent header, the active screen, and the navigation
//! bar, and runs the screen through the transition layer.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Header                  [EN] │  1 row
//! ├──────────────────────────────┤
//! │      ┌──────────────┐        │
//! │      │   screen     │        │  content, at most CONTENT_MAX_WIDTH wide
//! │      └──────────────┘        │
//! ├──────────────────────────────┤
//! │ 1 Home  2 Explore  3 ...     │  NAV_HEIGHT rows
//! └──────────────────────────────┘
//! ```
//!
//! This is the only place that asks the core which screen to draw.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::screen::{Screen, resolve_screen};
use crate::core::state::App;
use crate::core::tab::Tab;
use crate::i18n::{Language, LanguageContext, Translate};
use crate::planner::TripPlan;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::nav_bar::NAV_HEIGHT;
use crate::tui::components::{
    BudgetScreen, DestinationsPlaceholder, Header, HomeScreen, NavBar, PlannerForm, TripDetails,
    TripsEmptyState, centered_columns, contains,
};
use crate::tui::transition::{self, Phase};

/// Screens are laid out like a phone: narrow and centered.
pub const CONTENT_MAX_WIDTH: u16 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAreas {
    pub header: Rect,
    pub content: Rect,
    pub nav: Rect,
}

pub fn shell_layout(area: Rect) -> ShellAreas {
    let [header, main, nav] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(NAV_HEIGHT),
    ])
    .areas(area);
    ShellAreas {
        header,
        content: centered_columns(main, CONTENT_MAX_WIDTH),
        nav,
    }
}

pub fn draw_ui(
    frame: &mut Frame,
    app: &App<TripPlan>,
    tui: &mut TuiState,
    now: Instant,
    spinner_frame: usize,
) {
    let areas = shell_layout(frame.area());
    let TuiState {
        language,
        planner,
        trip_details,
        transition,
        budget_total_sar,
    } = tui;
    let language: &LanguageContext = language;

    Header::new(language, language.language()).render(frame, areas.header);

    let screen = resolve_screen(app);
    let step = transition.observe(screen.tab(), language.direction(), now);

    let painted_exit =
        step.phase == Phase::Exiting && transition.paint_snapshot(frame.buffer_mut(), areas.content);
    if !painted_exit {
        match screen {
            Screen::Home => HomeScreen::new(language).render(frame, areas.content),
            Screen::Planner => {
                PlannerForm::new(planner, language, spinner_frame).render(frame, areas.content)
            }
            Screen::TripDetails(plan) => {
                TripDetails::new(plan, trip_details, language).render(frame, areas.content)
            }
            Screen::TripsEmpty => TripsEmptyState::new(language).render(frame, areas.content),
            Screen::Budget => BudgetScreen::new(*budget_total_sar, language).render(frame, areas.content),
            Screen::Destinations => {
                DestinationsPlaceholder::new(language).render(frame, areas.content)
            }
        }
        transition.capture(frame.buffer_mut(), areas.content);
    }
    transition::apply(step, frame.buffer_mut(), areas.content);

    NavBar::new(app.active_tab(), language).render(frame, areas.nav);
}

/// Something clickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    LanguageToggle,
    Nav(Tab),
    PlanFirst,
    BackToPlanner,
}

/// Hit test: given a screen position, find what (if anything) was clicked.
pub fn hit_test(
    column: u16,
    row: u16,
    frame_area: Rect,
    screen: &Screen<'_, TripPlan>,
    t: &dyn Translate,
    language: Language,
) -> Option<ClickTarget> {
    let areas = shell_layout(frame_area);

    let badge = Header::badge_area(areas.header, language, t.direction());
    if contains(badge, column, row) {
        return Some(ClickTarget::LanguageToggle);
    }

    if let Some(tab) = NavBar::tab_at(areas.nav, t.direction(), column, row) {
        return Some(ClickTarget::Nav(tab));
    }

    match screen {
        Screen::TripsEmpty => TripsEmptyState::new(t)
            .handle_click(areas.content, column, row)
            .map(|_| ClickTarget::PlanFirst),
        Screen::TripDetails(_) => TripDetails::handle_click(areas.content, t, column, row)
            .map(|_| ClickTarget::BackToPlanner),
        Screen::Home | Screen::Planner | Screen::Budget | Screen::Destinations => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, sample_plan, test_tui};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App<TripPlan>, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| draw_ui(f, app, tui, Instant::now(), 0))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_shell_layout_reserves_header_and_nav() {
        let areas = shell_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(areas.header.height, 1);
        assert_eq!(areas.nav.height, NAV_HEIGHT);
        assert_eq!(areas.content.width, CONTENT_MAX_WIDTH);
        assert_eq!(areas.content.x, (100 - CONTENT_MAX_WIDTH) / 2);
    }

    #[test]
    fn test_each_tab_draws_its_screen() {
        let cases = [
            (Tab::Home, "Welcome, traveler"),
            (Tab::Planner, "Plan a trip"),
            (Tab::Trips, "No active trips"),
            (Tab::Profile, "Trip budget"),
            (Tab::Destinations, "Explore destinations"),
        ];
        for (tab, marker) in cases {
            let app: App<TripPlan> = App::new(tab);
            let mut tui = test_tui();
            let text = draw(&app, &mut tui);
            assert!(text.contains(marker), "{tab} should show {marker:?}");
            assert!(text.contains("Safar"));
            for (other, other_marker) in cases.iter().filter(|(other, _)| *other != tab) {
                assert!(
                    !text.contains(other_marker),
                    "{tab} should not show the {other} screen ({other_marker:?})"
                );
            }
        }
    }

    #[test]
    fn test_trips_with_plan_draws_details_not_empty_state() {
        let mut app: App<TripPlan> = App::new(Tab::Planner);
        update(&mut app, Action::PlanGenerated(sample_plan()));
        let mut tui = test_tui();

        let text = draw(&app, &mut tui);
        assert!(text.contains("Your trip to Riyadh"));
        assert!(!text.contains("No active trips"));
    }

    #[test]
    fn test_hit_test_targets() {
        let ctx = LanguageContext::default();
        let frame_area = Rect::new(0, 0, 80, 30);
        let areas = shell_layout(frame_area);

        assert_eq!(
            hit_test(79, 0, frame_area, &Screen::Home, &ctx, ctx.language()),
            Some(ClickTarget::LanguageToggle)
        );
        assert_eq!(
            hit_test(1, areas.nav.y + 1, frame_area, &Screen::Home, &ctx, ctx.language()),
            Some(ClickTarget::Nav(Tab::Home))
        );

        let button = TripsEmptyState::new(&ctx).button_area(areas.content);
        assert_eq!(
            hit_test(button.x + 1, button.y + 1, frame_area, &Screen::TripsEmpty, &ctx, ctx.language()),
            Some(ClickTarget::PlanFirst)
        );
        assert_eq!(
            hit_test(button.x + 1, button.y + 1, frame_area, &Screen::Home, &ctx, ctx.language()),
            None
        );
    }
}
