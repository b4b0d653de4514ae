// Integration tests for Resume Screen

use resume_screen::core::{Evaluator, Taxonomy};
use resume_screen::models::{Decision, FitTier, RoleSkillSpec};
use std::sync::Arc;

fn evaluator() -> Evaluator {
    Evaluator::with_builtin_taxonomy().expect("builtin taxonomy is valid")
}

#[test]
fn test_integration_main_skill_only() {
    let result = evaluator()
        .evaluate("Backend engineer with 5 years of Python", "Python Developer")
        .unwrap();

    assert_eq!(result.matched_skills, vec!["python"]);
    assert_eq!(result.score, 20);
    assert!(result.criteria.main_skill_present);
    assert_eq!(result.decision, Decision::Select);
    assert_eq!(result.fit_tier, FitTier::ModerateFit);
    assert_eq!(result.reasons, vec!["Main skill detected"]);
}

#[test]
fn test_integration_two_skills_without_main() {
    let result = evaluator()
        .evaluate("Built web apps with Django and Flask", "Python Developer")
        .unwrap();

    assert_eq!(result.matched_skills, vec!["django", "flask"]);
    assert_eq!(result.score, 40);
    assert!(!result.criteria.main_skill_present);
    assert_eq!(result.decision, Decision::Select);
    assert_eq!(result.fit_tier, FitTier::ModerateFit);
    assert_eq!(result.reasons, vec!["Two or more required skills matched"]);
}

#[test]
fn test_integration_high_fit() {
    let result = evaluator()
        .evaluate("python, django, flask, sql", "Python Developer")
        .unwrap();

    assert_eq!(result.score, 80);
    assert_eq!(result.missing_skills, vec!["oops"]);
    assert_eq!(result.decision, Decision::Select);
    assert_eq!(result.fit_tier, FitTier::HighFit);
    assert_eq!(
        result.reasons,
        vec![
            "Main skill detected",
            "Two or more required skills matched",
            "Skill match of 50% or higher",
        ]
    );
}

#[test]
fn test_integration_no_skills() {
    let result = evaluator()
        .evaluate("Chef with ten years of pastry experience", "Python Developer")
        .unwrap();

    assert_eq!(result.score, 0);
    assert!(result.matched_skills.is_empty());
    assert_eq!(result.decision, Decision::Reject);
    assert_eq!(result.fit_tier, FitTier::LowFit);
    assert!(result.reasons.is_empty());
}

#[test]
fn test_integration_javascript_counts_as_java() {
    let result = evaluator()
        .evaluate("javascript developer", "Java Developer")
        .unwrap();

    assert!(result.criteria.main_skill_present);
    assert_eq!(result.matched_skills, vec!["java"]);
    assert_eq!(result.decision, Decision::Select);
}

#[test]
fn test_integration_machine_learning_role() {
    let result = evaluator()
        .evaluate(
            "Machine Learning engineer: Python, Pandas, NumPy, scikit-learn",
            "Machine Learning Engineer",
        )
        .unwrap();

    assert_eq!(result.score, 100);
    assert!(result.missing_skills.is_empty());
    assert_eq!(result.fit_tier, FitTier::HighFit);
}

#[test]
fn test_integration_score_alone_selects() {
    let taxonomy = Taxonomy::new(vec![RoleSkillSpec::new("Shell Scripter", "bash", &["bash"])]).unwrap();
    let evaluator = Evaluator::new(Arc::new(taxonomy));

    let result = evaluator.evaluate("BASH", "Shell Scripter").unwrap();
    assert_eq!(result.score, 100);
    assert!(!result.criteria.two_or_more_matched);
    assert_eq!(result.fit_tier, FitTier::HighFit);
}

#[test]
fn test_integration_idempotent() {
    let evaluator = evaluator();
    let text = "Spring Boot, SQL, Data Structures";

    let first = evaluator.evaluate(text, "Java Developer").unwrap();
    let second = evaluator.evaluate(text, "Java Developer").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_integration_parallel_evaluations() {
    let evaluator = evaluator();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let evaluator = evaluator.clone();
            std::thread::spawn(move || {
                let text = if i % 2 == 0 { "python django" } else { "" };
                evaluator.evaluate(text, "Python Developer").unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        let expected = if i % 2 == 0 { Decision::Select } else { Decision::Reject };
        assert_eq!(result.decision, expected);
    }
}

#[test]
fn test_integration_result_serialization() {
    let result = evaluator().evaluate("python", "Python Developer").unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["score"], 20);
    assert_eq!(json["decision"], "SELECT");
    assert_eq!(json["fitTier"], "MODERATE_FIT");
    assert_eq!(json["matchedSkills"][0], "python");
    assert_eq!(json["criteria"]["mainSkillPresent"], true);
}
