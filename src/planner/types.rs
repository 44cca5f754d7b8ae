use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Spending level for a trip. Scales the daily cost estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Economy,
    #[default]
    Standard,
    Luxury,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 3] = [BudgetTier::Economy, BudgetTier::Standard, BudgetTier::Luxury];

    fn position(self) -> usize {
        BudgetTier::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Cycles Economy → Standard → Luxury → Economy
    pub fn next(self) -> Self {
        BudgetTier::ALL[(self.position() + 1) % BudgetTier::ALL.len()]
    }

    pub fn prev(self) -> Self {
        BudgetTier::ALL[(self.position() + BudgetTier::ALL.len() - 1) % BudgetTier::ALL.len()]
    }

    /// Percentage applied to a destination's base daily cost.
    pub fn cost_percent(self) -> u32 {
        match self {
            BudgetTier::Economy => 60,
            BudgetTier::Standard => 100,
            BudgetTier::Luxury => 250,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            BudgetTier::Economy => "budgetEconomy",
            BudgetTier::Standard => "budgetStandard",
            BudgetTier::Luxury => "budgetLuxury",
        }
    }
}

/// What the user asked the planner for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub destination: String,
    pub days: u8,
    pub budget: BudgetTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u8,
    pub title: String,
    pub activities: Vec<String>,
}

/// A generated itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPlan {
    pub id: Uuid,
    pub destination: String,
    pub budget: BudgetTier,
    pub days: Vec<DayPlan>,
    pub estimated_cost_sar: u32,
    pub created_at: DateTime<Utc>,
}

impl TripPlan {
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_tier_cycles() {
        for tier in BudgetTier::ALL {
            assert_eq!(tier.next().prev(), tier);
        }
        assert_eq!(BudgetTier::Economy.next(), BudgetTier::Standard);
        assert_eq!(BudgetTier::Luxury.next(), BudgetTier::Economy);
        assert_eq!(BudgetTier::Economy.prev(), BudgetTier::Luxury);
    }

    #[test]
    fn test_budget_tier_costs_increase() {
        assert!(BudgetTier::Economy.cost_percent() < BudgetTier::Standard.cost_percent());
        assert!(BudgetTier::Standard.cost_percent() < BudgetTier::Luxury.cost_percent());
    }

    #[test]
    fn test_budget_tier_serde() {
        let tier: BudgetTier = serde_json::from_str("\"luxury\"").unwrap();
        assert_eq!(tier, BudgetTier::Luxury);
    }
}
