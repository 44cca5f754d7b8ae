//! # Core Navigation Logic
//!
//! The view-selection state machine and the plan hand-off between the
//! planner and the trip-details screen. It knows nothing about terminals,
//! translations, or how plans are produced.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (tab + plan)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • resolve_screen()     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Planner   │      │  Config    │
//!     │  Adapter   │      │ (produces  │      │ (start tab,│
//!     │ (ratatui)  │      │   plans)   │      │  language) │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`tab`]: The `Tab` enum, the closed set of screens
//! - [`state`]: The `App` struct, the two pieces of navigation state
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`screen`]: Pure dispatch from state to the screen that should render
//! - [`config`]: Settings with defaults → file → env → CLI resolution

pub mod action;
pub mod config;
pub mod screen;
pub mod state;
pub mod tab;
