use safar::planner::destinations::CATALOG;
use safar::planner::{BudgetTier, PlanError, PlanGenerator, PlanRequest, TemplatePlanner};
use std::sync::Arc;
use std::time::Duration;

fn request(destination: &str, days: u8, budget: BudgetTier) -> PlanRequest {
    PlanRequest {
        destination: destination.to_string(),
        days,
        budget,
    }
}

#[tokio::test]
async fn test_every_catalog_destination_plans() {
    let planner = TemplatePlanner::default();
    for destination in CATALOG.iter() {
        let plan = planner
            .generate(request(destination.name, 4, BudgetTier::Economy))
            .await
            .unwrap();
        assert_eq!(plan.destination, destination.name);
        assert_eq!(plan.day_count(), 4);
        assert!(plan.estimated_cost_sar > 0);
    }
}

#[tokio::test]
async fn test_generator_behind_trait_object() {
    let generator: Arc<dyn PlanGenerator> = Arc::new(TemplatePlanner::new(Duration::from_millis(5)));
    let plan = generator
        .generate(request("Jeddah", 2, BudgetTier::Luxury))
        .await
        .unwrap();
    assert_eq!(plan.days.len(), 2);
    assert_eq!(plan.budget, BudgetTier::Luxury);
}

#[tokio::test]
async fn test_errors_are_reported_not_panicked() {
    let planner = TemplatePlanner::default();
    let err = planner
        .generate(request("Atlantis", 3, BudgetTier::Standard))
        .await
        .unwrap_err();
    assert_eq!(err, PlanError::UnknownDestination("Atlantis".to_string()));
    assert_eq!(err.to_string(), "unknown destination: Atlantis");
}
