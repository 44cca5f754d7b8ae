//! # Template Planner
//!
//! Offline generator: walks the destination's highlights in order and lays
//! them out over the requested number of days. Arrival and departure days
//! get one highlight each, days in between get two.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use super::destinations::{self, Destination};
use super::generator::{PlanError, PlanGenerator};
use super::types::{DayPlan, PlanRequest, TripPlan};
use super::MAX_TRIP_DAYS;

pub struct TemplatePlanner {
    /// Artificial delay before the plan is returned.
    latency: Duration,
}

impl TemplatePlanner {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    fn validate(request: &PlanRequest) -> Result<&'static Destination, PlanError> {
        if request.days == 0 || request.days > MAX_TRIP_DAYS {
            return Err(PlanError::InvalidRequest(format!(
                "trip length must be between 1 and {MAX_TRIP_DAYS} days, got {}",
                request.days
            )));
        }
        destinations::find(&request.destination)
            .ok_or_else(|| PlanError::UnknownDestination(request.destination.clone()))
    }

    fn build(destination: &Destination, request: &PlanRequest) -> TripPlan {
        let mut highlights = destination.highlights.iter().cycle();
        let mut next_highlight = || highlights.next().copied().unwrap_or(destination.name).to_string();

        let days = (1..=request.days)
            .map(|day| {
                if day == 1 {
                    DayPlan {
                        day,
                        title: format!("Arrival in {}", destination.name),
                        activities: vec!["Check in and settle".to_string(), next_highlight()],
                    }
                } else if day == request.days {
                    DayPlan {
                        day,
                        title: "Departure".to_string(),
                        activities: vec![next_highlight(), "Souvenir shopping".to_string()],
                    }
                } else {
                    DayPlan {
                        day,
                        title: format!("Exploring {}", destination.name),
                        activities: vec![next_highlight(), next_highlight()],
                    }
                }
            })
            .collect();

        let daily = destination.base_daily_sar * request.budget.cost_percent() / 100;

        TripPlan {
            id: Uuid::new_v4(),
            destination: destination.name.to_string(),
            budget: request.budget,
            days,
            estimated_cost_sar: daily * u32::from(request.days),
            created_at: Utc::now(),
        }
    }
}

impl Default for TemplatePlanner {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl PlanGenerator for TemplatePlanner {
    fn name(&self) -> &str {
        "template"
    }

    async fn generate(&self, request: PlanRequest) -> Result<TripPlan, PlanError> {
        let destination = Self::validate(&request)?;
        debug!("Generating {}-day plan for {}", request.days, destination.name);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let plan = Self::build(destination, &request);
        info!(
            "Generated plan {} for {} ({} days, {} SAR)",
            plan.id,
            plan.destination,
            plan.day_count(),
            plan.estimated_cost_sar
        );
        Ok(plan)
    }
}
