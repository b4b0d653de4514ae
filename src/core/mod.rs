// Core algorithm exports
pub mod error;
pub mod evaluator;
pub mod matching;
pub mod scoring;
pub mod taxonomy;

pub use error::{ScreeningError, TaxonomyError};
pub use evaluator::Evaluator;
pub use matching::{contains_skill, match_skills, normalize_text, SkillMatch};
pub use scoring::{calculate_score, classify_fit, decide, evaluate_criteria};
pub use taxonomy::Taxonomy;
