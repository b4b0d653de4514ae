use std::sync::Arc;

use crate::core::{
    error::ScreeningError,
    matching::{contains_skill, match_skills, normalize_text},
    scoring::{calculate_score, classify_fit, decide, evaluate_criteria},
    taxonomy::Taxonomy,
};
use crate::models::{EvaluationResult, RoleSkillSpec};

/// Resume evaluation engine
///
/// # Pipeline Stages
/// 1. Role lookup
/// 2. Text normalization
/// 3. Skill matching
/// 4. Scoring
/// 5. Decision and fit classification
///
/// Cheap to clone; the taxonomy is shared, never copied.
#[derive(Debug, Clone)]
pub struct Evaluator {
    taxonomy: Arc<Taxonomy>,
}

impl Evaluator {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    /// Evaluator over the built-in role table
    pub fn with_builtin_taxonomy() -> Result<Self, ScreeningError> {
        Ok(Self::new(Arc::new(Taxonomy::builtin()?)))
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn list_roles(&self) -> Vec<String> {
        self.taxonomy.list_roles()
    }

    pub fn role(&self, role_name: &str) -> Result<&RoleSkillSpec, ScreeningError> {
        self.taxonomy.lookup(role_name)
    }

    /// Evaluate resume text against a role
    ///
    /// # Arguments
    /// * `resume_text` - Already-extracted plain text, possibly empty
    /// * `role_name` - Exact role name as returned by `list_roles`
    ///
    /// # Returns
    /// The full evaluation, or `UnknownRole` before any work is done
    pub fn evaluate(
        &self,
        resume_text: &str,
        role_name: &str,
    ) -> Result<EvaluationResult, ScreeningError> {
        let spec = self.taxonomy.lookup(role_name)?;

        let text = normalize_text(resume_text);
        let skills = match_skills(&text, &spec.required_skills);
        let score = calculate_score(skills.matched_count(), spec.required_count());

        // Checked against the text itself, not the matched list
        let main_skill_present = contains_skill(&text, &spec.main_skill);

        let criteria = evaluate_criteria(main_skill_present, skills.matched_count(), score);
        let decision = decide(&criteria);
        let fit_tier = classify_fit(decision, score);
        let reasons = criteria
            .satisfied()
            .into_iter()
            .map(|c| c.label().to_string())
            .collect();

        tracing::debug!(
            "Evaluated role '{}': {}/{} skills, score {}, {:?}/{:?}",
            role_name,
            skills.matched_count(),
            spec.required_count(),
            score,
            decision,
            fit_tier
        );

        Ok(EvaluationResult {
            score,
            decision,
            fit_tier,
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            reasons,
            criteria,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Decision, FitTier};

    fn evaluator() -> Evaluator {
        Evaluator::with_builtin_taxonomy().unwrap()
    }

    #[test]
    fn test_main_skill_alone_selects() {
        let result = evaluator().evaluate("Experienced in Python", "Python Developer").unwrap();

        assert_eq!(result.matched_skills, vec!["python"]);
        assert_eq!(result.score, 20);
        assert_eq!(result.decision, Decision::Select);
        assert_eq!(result.fit_tier, FitTier::ModerateFit);
        assert_eq!(result.reasons, vec!["Main skill detected"]);
    }

    #[test]
    fn test_unknown_role() {
        let err = evaluator().evaluate("python", "Astronaut").unwrap_err();
        assert_eq!(err, ScreeningError::UnknownRole("Astronaut".to_string()));
    }

    #[test]
    fn test_empty_resume_rejects() {
        let result = evaluator().evaluate("", "Java Developer").unwrap();

        assert_eq!(result.score, 0);
        assert_eq!(result.decision, Decision::Reject);
        assert_eq!(result.fit_tier, FitTier::LowFit);
        assert!(result.reasons.is_empty());
        assert_eq!(result.missing_skills.len(), 5);
    }

    #[test]
    fn test_main_skill_found_inside_longer_word() {
        let taxonomy = Taxonomy::new(vec![RoleSkillSpec::new("Data", "sql", &["sql", "etl"])]).unwrap();
        let evaluator = Evaluator::new(Arc::new(taxonomy));

        let result = evaluator.evaluate("PostgreSQL", "Data").unwrap();
        assert!(result.criteria.main_skill_present);
        assert_eq!(result.matched_skills, vec!["sql"]);
    }
}
