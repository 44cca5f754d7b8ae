use std::fmt;

use async_trait::async_trait;

use super::types::{PlanRequest, TripPlan};

/// Errors that can occur while generating a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Request failed validation (e.g. trip length out of range).
    InvalidRequest(String),
    /// The destination is not one the generator knows.
    UnknownDestination(String),
    /// The UI dropped the receiver before the plan was delivered.
    ChannelClosed,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
            PlanError::UnknownDestination(name) => write!(f, "unknown destination: {name}"),
            PlanError::ChannelClosed => write!(f, "channel closed"),
        }
    }
}

impl std::error::Error for PlanError {}

#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Returns the name of the generator.
    fn name(&self) -> &str;

    /// Builds a plan for the request.
    async fn generate(&self, request: PlanRequest) -> Result<TripPlan, PlanError>;
}
