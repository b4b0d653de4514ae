use crate::models::{CriteriaOutcome, Decision, FitTier};

/// Minimum number of matched skills that selects on its own
pub const MIN_MATCHED_FOR_SELECT: usize = 2;

/// Score (percent) that selects on its own
pub const SELECT_SCORE_THRESHOLD: u8 = 50;

/// Score (percent) a selected candidate needs for `HIGH_FIT`
pub const HIGH_FIT_SCORE_THRESHOLD: u8 = 70;

/// Percentage of required skills matched, truncated toward zero
///
/// Integer arithmetic keeps the truncation exact: `floor(100 * matched / required)`.
///
/// # Panics
/// `required` must be non-zero and `matched` at most `required`. The taxonomy
/// rejects roles without required skills at construction, so `evaluate`
/// never breaks either precondition.
#[inline]
pub fn calculate_score(matched: usize, required: usize) -> u8 {
    assert!(required > 0, "score requires at least one required skill");
    debug_assert!(
        matched <= required,
        "matched {} exceeds required {}",
        matched,
        required
    );
    ((matched * 100) / required) as u8
}

/// Evaluate the three independent selection criteria
pub fn evaluate_criteria(main_skill_present: bool, matched: usize, score: u8) -> CriteriaOutcome {
    CriteriaOutcome {
        main_skill_present,
        two_or_more_matched: matched >= MIN_MATCHED_FOR_SELECT,
        score_at_least_50: score >= SELECT_SCORE_THRESHOLD,
    }
}

/// Any single satisfied criterion selects the candidate
#[inline]
pub fn decide(criteria: &CriteriaOutcome) -> Decision {
    if criteria.any() {
        Decision::Select
    } else {
        Decision::Reject
    }
}

/// Refine a decision into a fit tier
///
/// A selection below the high-fit threshold stays moderate, whichever
/// criterion selected it.
#[inline]
pub fn classify_fit(decision: Decision, score: u8) -> FitTier {
    match decision {
        Decision::Reject => FitTier::LowFit,
        Decision::Select if score >= HIGH_FIT_SCORE_THRESHOLD => FitTier::HighFit,
        Decision::Select => FitTier::ModerateFit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_truncates() {
        assert_eq!(calculate_score(1, 3), 33);
        assert_eq!(calculate_score(2, 3), 66);
        assert_eq!(calculate_score(1, 5), 20);
        assert_eq!(calculate_score(4, 5), 80);
        assert_eq!(calculate_score(5, 5), 100);
        assert_eq!(calculate_score(0, 5), 0);
    }

    #[test]
    #[should_panic(expected = "at least one required skill")]
    fn test_score_zero_required_panics() {
        calculate_score(0, 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "exceeds required")]
    fn test_score_more_matched_than_required_panics() {
        calculate_score(7, 5);
    }

    #[test]
    fn test_criteria_thresholds() {
        let outcome = evaluate_criteria(false, 1, 49);
        assert!(!outcome.two_or_more_matched);
        assert!(!outcome.score_at_least_50);

        let outcome = evaluate_criteria(false, 2, 50);
        assert!(outcome.two_or_more_matched);
        assert!(outcome.score_at_least_50);
    }

    #[test]
    fn test_decide_is_or_of_criteria() {
        let none = evaluate_criteria(false, 0, 0);
        assert_eq!(decide(&none), Decision::Reject);

        let main_only = evaluate_criteria(true, 0, 0);
        assert_eq!(decide(&main_only), Decision::Select);

        // One of one skill: score 100 without two matches
        let score_only = evaluate_criteria(false, 1, 100);
        assert_eq!(decide(&score_only), Decision::Select);
    }

    #[test]
    fn test_classify_fit() {
        assert_eq!(classify_fit(Decision::Reject, 0), FitTier::LowFit);
        assert_eq!(classify_fit(Decision::Select, 0), FitTier::ModerateFit);
        assert_eq!(classify_fit(Decision::Select, 69), FitTier::ModerateFit);
        assert_eq!(classify_fit(Decision::Select, 70), FitTier::HighFit);
        assert_eq!(classify_fit(Decision::Select, 100), FitTier::HighFit);
    }
}
