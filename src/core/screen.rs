//! # Screen Dispatch
//!
//! Maps the current state to the screen that should be drawn. Pure: the
//! same `App` always resolves to the same `Screen`.
//!
//! ```text
//! Home         → Home
//! Planner      → Planner
//! Trips        → TripDetails(&plan) | TripsEmpty
//! Profile      → Budget
//! Destinations → Destinations
//! ```
//!
//! `TripDetails` borrows the plan, so a details screen without a plan
//! cannot be constructed.

use crate::core::state::App;
use crate::core::tab::Tab;

#[derive(Debug, PartialEq)]
pub enum Screen<'a, P> {
    Home,
    Planner,
    TripDetails(&'a P),
    /// `Trips` selected with no plan: empty state with a call to action.
    TripsEmpty,
    Budget,
    Destinations,
}

impl<P> Screen<'_, P> {
    /// The tab this screen belongs to. Transitions are keyed on this.
    pub fn tab(&self) -> Tab {
        match self {
            Screen::Home => Tab::Home,
            Screen::Planner => Tab::Planner,
            Screen::TripDetails(_) | Screen::TripsEmpty => Tab::Trips,
            Screen::Budget => Tab::Profile,
            Screen::Destinations => Tab::Destinations,
        }
    }
}

pub fn resolve_screen<P>(app: &App<P>) -> Screen<'_, P> {
    match app.active_tab() {
        Tab::Home => Screen::Home,
        Tab::Planner => Screen::Planner,
        Tab::Trips => match app.plan() {
            Some(plan) => Screen::TripDetails(plan),
            None => Screen::TripsEmpty,
        },
        Tab::Profile => Screen::Budget,
        Tab::Destinations => Screen::Destinations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use serde_json::{Value, json};

    #[test]
    fn test_each_tab_resolves_to_its_screen() {
        let expected: [(Tab, Screen<'_, Value>); 4] = [
            (Tab::Home, Screen::Home),
            (Tab::Planner, Screen::Planner),
            (Tab::Profile, Screen::Budget),
            (Tab::Destinations, Screen::Destinations),
        ];
        for (tab, screen) in expected {
            let app: App<Value> = App::new(tab);
            assert_eq!(resolve_screen(&app), screen);
        }
    }

    #[test]
    fn test_trips_without_plan_is_empty_state() {
        let app: App<Value> = App::new(Tab::Trips);
        assert_eq!(resolve_screen(&app), Screen::TripsEmpty);
    }

    #[test]
    fn test_trips_with_plan_is_details() {
        let mut app: App<Value> = App::new(Tab::Planner);
        update(&mut app, Action::PlanGenerated(json!({"id": 1})));
        assert_eq!(resolve_screen(&app), Screen::TripDetails(&json!({"id": 1})));
    }

    #[test]
    fn test_plan_is_kept_but_hidden_on_other_tabs() {
        let mut app: App<Value> = App::new(Tab::Planner);
        update(&mut app, Action::PlanGenerated(json!({"id": 1})));
        update(&mut app, Action::SelectTab(Tab::Home));
        assert_eq!(resolve_screen(&app), Screen::Home);

        update(&mut app, Action::SelectTab(Tab::Trips));
        assert_eq!(resolve_screen(&app), Screen::TripDetails(&json!({"id": 1})));
    }

    #[test]
    fn test_screen_tab_matches_active_tab() {
        for tab in Tab::ALL {
            let app: App<Value> = App::new(tab);
            assert_eq!(resolve_screen(&app).tab(), tab);
        }
    }
}
