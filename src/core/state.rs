//! # Application State
//!
//! The navigation state: which tab is active and which plan, if any, has
//! been handed from the planner to the trip-details screen.
//!
//! ```text
//! App<P>
//! ├── active_tab: Tab            // which screen renders
//! └── generated_plan: Option<P>  // opaque plan, at most one
//! ```
//!
//! `P` is whatever the planner produces. The core never looks inside it.
//! Fields are only writable from `core`, so every change goes through
//! `update(state, action)` in action.rs.

use crate::core::tab::Tab;

#[derive(Debug, Clone, PartialEq)]
pub struct App<P> {
    pub(super) active_tab: Tab,
    pub(super) generated_plan: Option<P>,
}

impl<P> App<P> {
    pub fn new(start_tab: Tab) -> Self {
        Self {
            active_tab: start_tab,
            generated_plan: None,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn plan(&self) -> Option<&P> {
        self.generated_plan.as_ref()
    }

    pub fn has_plan(&self) -> bool {
        self.generated_plan.is_some()
    }
}

impl<P> Default for App<P> {
    fn default() -> Self {
        Self::new(Tab::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app: App<u32> = App::default();
        assert_eq!(app.active_tab(), Tab::Home);
        assert!(app.plan().is_none());
        assert!(!app.has_plan());
    }

    #[test]
    fn test_app_respects_start_tab() {
        let app: App<u32> = App::new(Tab::Destinations);
        assert_eq!(app.active_tab(), Tab::Destinations);
        assert!(!app.has_plan());
    }
}
