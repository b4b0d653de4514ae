// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{RoleSkillSpec, Decision, FitTier, Criterion, CriteriaOutcome, EvaluationResult};
pub use requests::EvaluateRequest;
pub use responses::{EvaluateResponse, RolesResponse, HealthResponse, ErrorResponse};
