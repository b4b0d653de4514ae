//! Resume Screen - skill-based resume triage service
//!
//! This library provides the resume evaluation engine: a validated skill
//! taxonomy, case-insensitive containment matching, a truncated percentage
//! score, an OR-combined SELECT/REJECT policy and fit-tier classification.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Evaluator, Taxonomy, ScreeningError, TaxonomyError};
pub use models::{RoleSkillSpec, EvaluationResult, Decision, FitTier, Criterion, CriteriaOutcome, EvaluateRequest, EvaluateResponse};
