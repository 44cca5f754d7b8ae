//! # Trip Planner
//!
//! Produces `TripPlan` values for the navigation core to hand to the
//! trip-details screen. The core treats plans as opaque; only the planner
//! and the details screen read their fields.
//!
//! - [`types`]: `PlanRequest`, `TripPlan`, `BudgetTier`
//! - [`generator`]: The `PlanGenerator` trait and `PlanError`
//! - [`destinations`]: Built-in destination catalog
//! - [`template`]: `TemplatePlanner`, an offline generator over the catalog

pub mod destinations;
pub mod generator;
pub mod template;
pub mod types;

pub use generator::{PlanError, PlanGenerator};
pub use template::TemplatePlanner;
pub use types::{BudgetTier, DayPlan, PlanRequest, TripPlan};

/// Longest trip the planner accepts.
pub const MAX_TRIP_DAYS: u8 = 14;
