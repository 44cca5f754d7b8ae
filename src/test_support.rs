//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::time::Duration;

use chrono::{TimeZone, Utc};
use ratatui::buffer::Buffer;
use uuid::Uuid;

use crate::core::config::ResolvedConfig;
use crate::core::tab::Tab;
use crate::i18n::Language;
use crate::planner::{BudgetTier, DayPlan, TripPlan};
use crate::tui::TuiState;

/// Flatten a buffer's symbols into one string for `contains` checks.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect::<String>()
}

/// A two-day Riyadh plan.
pub fn sample_plan() -> TripPlan {
    TripPlan {
        id: Uuid::new_v4(),
        destination: "Riyadh".to_string(),
        budget: BudgetTier::Standard,
        days: vec![
            DayPlan {
                day: 1,
                title: "Arrival in Riyadh".to_string(),
                activities: vec!["Hotel check-in".to_string(), "Masmak Fortress".to_string()],
            },
            DayPlan {
                day: 2,
                title: "Departure".to_string(),
                activities: vec!["Kingdom Centre Sky Bridge".to_string(), "Souvenir shopping".to_string()],
            },
        ],
        estimated_cost_sar: 1300,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap(),
    }
}

/// Config with animations off so renders are deterministic.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        language: Language::English,
        start_tab: Tab::Home,
        animations: false,
        transition: Duration::from_millis(300),
        default_days: 3,
        default_budget: BudgetTier::Standard,
        planner_latency: Duration::ZERO,
        budget_total_sar: 5000,
    }
}

pub fn test_tui() -> TuiState {
    TuiState::new(&test_config())
}
