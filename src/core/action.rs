//! # Actions
//!
//! Everything that can change navigation becomes an `Action`.
//! User taps a tab? That's `Action::SelectTab(tab)`.
//! Planner finishes? That's `Action::PlanGenerated(plan)`.
//!
//! The `update()` function applies an action to the state in place and
//! returns an `Effect` telling the adapter what to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Both fields are written inside a single `update()` call, so the renderer
//! never sees a new tab paired with a stale plan.

use log::debug;

use crate::core::state::App;
use crate::core::tab::Tab;

#[derive(Debug, Clone, PartialEq)]
pub enum Action<P> {
    /// Show the given tab. The plan is left alone.
    SelectTab(Tab),
    /// The planner produced a plan: store it and jump to `Trips`.
    PlanGenerated(P),
    /// Leave trip details: discard the plan and return to `Planner`.
    BackToPlanner,
    Quit,
}

impl<P> Action<P> {
    /// Short name for logging. Plans can be large, so they are never printed.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectTab(_) => "SelectTab",
            Action::PlanGenerated(_) => "PlanGenerated",
            Action::BackToPlanner => "BackToPlanner",
            Action::Quit => "Quit",
        }
    }
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// State did not change.
    None,
    /// State changed; draw a new frame.
    Redraw,
    Quit,
}

pub fn update<P>(app: &mut App<P>, action: Action<P>) -> Effect {
    debug!(
        "update: {} (tab={}, has_plan={})",
        action.name(),
        app.active_tab,
        app.generated_plan.is_some()
    );

    match action {
        Action::SelectTab(tab) => {
            if app.active_tab == tab {
                return Effect::None;
            }
            app.active_tab = tab;
            Effect::Redraw
        }
        Action::PlanGenerated(plan) => {
            app.generated_plan = Some(plan);
            app.active_tab = Tab::Trips;
            Effect::Redraw
        }
        Action::BackToPlanner => {
            app.generated_plan = None;
            app.active_tab = Tab::Planner;
            Effect::Redraw
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn app_at(tab: Tab) -> App<Value> {
        App::new(tab)
    }

    #[test]
    fn test_select_tab_sets_active_tab_only() {
        let mut app = app_at(Tab::Home);
        app.generated_plan = Some(json!({"id": 7}));

        let effect = update(&mut app, Action::SelectTab(Tab::Profile));

        assert_eq!(effect, Effect::Redraw);
        assert_eq!(app.active_tab(), Tab::Profile);
        assert_eq!(app.plan(), Some(&json!({"id": 7})));
    }

    #[test]
    fn test_select_tab_is_idempotent() {
        let mut once = app_at(Tab::Home);
        update(&mut once, Action::SelectTab(Tab::Destinations));

        let mut twice = app_at(Tab::Home);
        update(&mut twice, Action::SelectTab(Tab::Destinations));
        let second = update(&mut twice, Action::SelectTab(Tab::Destinations));

        assert_eq!(second, Effect::None);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_plan_generated_forces_trips_from_every_tab() {
        for tab in Tab::ALL {
            let mut app = app_at(tab);
            let effect = update(&mut app, Action::PlanGenerated(json!({"id": 1})));

            assert_eq!(effect, Effect::Redraw);
            assert_eq!(app.active_tab(), Tab::Trips);
            assert_eq!(app.plan(), Some(&json!({"id": 1})));
        }
    }

    #[test]
    fn test_plan_generated_replaces_previous_plan() {
        let mut app = app_at(Tab::Planner);
        update(&mut app, Action::PlanGenerated(json!({"id": 1})));
        update(&mut app, Action::PlanGenerated(json!({"id": 2})));
        assert_eq!(app.plan(), Some(&json!({"id": 2})));
    }

    #[test]
    fn test_back_to_planner_clears_plan_from_every_state() {
        for tab in Tab::ALL {
            for plan in [None, Some(json!({"id": 3}))] {
                let mut app = app_at(tab);
                app.generated_plan = plan;

                let effect = update(&mut app, Action::BackToPlanner);

                assert_eq!(effect, Effect::Redraw);
                assert_eq!(app.active_tab(), Tab::Planner);
                assert!(app.plan().is_none());
            }
        }
    }

    #[test]
    fn test_quit_leaves_state_untouched() {
        let mut app = app_at(Tab::Trips);
        app.generated_plan = Some(json!({"id": 9}));
        let before = app.clone();

        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert_eq!(app, before);
    }

    #[test]
    fn test_action_names() {
        assert_eq!(Action::<Value>::SelectTab(Tab::Home).name(), "SelectTab");
        assert_eq!(Action::PlanGenerated(json!(null)).name(), "PlanGenerated");
        assert_eq!(Action::<Value>::BackToPlanner.name(), "BackToPlanner");
        assert_eq!(Action::<Value>::Quit.name(), "Quit");
    }
}
