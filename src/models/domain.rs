use serde::{Deserialize, Serialize};

/// Hiring requirements for one job role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSkillSpec {
    #[serde(rename = "roleName")]
    pub role_name: String,
    #[serde(rename = "mainSkill")]
    pub main_skill: String,
    #[serde(rename = "requiredSkills")]
    pub required_skills: Vec<String>,
}

impl RoleSkillSpec {
    pub fn new<S: Into<String>>(role_name: S, main_skill: S, required_skills: &[&str]) -> Self {
        Self {
            role_name: role_name.into(),
            main_skill: main_skill.into(),
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn required_count(&self) -> usize {
        self.required_skills.len()
    }
}

/// Binary screening outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Select,
    Reject,
}

impl Decision {
    pub fn is_select(self) -> bool {
        matches!(self, Decision::Select)
    }
}

/// Triage bucket derived from the decision and the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitTier {
    HighFit,
    ModerateFit,
    LowFit,
}

impl FitTier {
    /// Lowercase label used in summaries ("high fit", ...)
    pub fn label(self) -> &'static str {
        match self {
            FitTier::HighFit => "high fit",
            FitTier::ModerateFit => "moderate fit",
            FitTier::LowFit => "low fit",
        }
    }
}

/// One of the three independent selection criteria, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    MainSkillPresent,
    TwoOrMoreMatched,
    ScoreAtLeast50,
}

impl Criterion {
    pub const ALL: [Criterion; 3] = [
        Criterion::MainSkillPresent,
        Criterion::TwoOrMoreMatched,
        Criterion::ScoreAtLeast50,
    ];

    /// Human-readable label reported in `reasons`
    pub fn label(self) -> &'static str {
        match self {
            Criterion::MainSkillPresent => "Main skill detected",
            Criterion::TwoOrMoreMatched => "Two or more required skills matched",
            Criterion::ScoreAtLeast50 => "Skill match of 50% or higher",
        }
    }
}

/// Outcome of each selection criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaOutcome {
    #[serde(rename = "mainSkillPresent")]
    pub main_skill_present: bool,
    #[serde(rename = "twoOrMoreMatched")]
    pub two_or_more_matched: bool,
    #[serde(rename = "scoreAtLeast50")]
    pub score_at_least_50: bool,
}

impl CriteriaOutcome {
    pub fn holds(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::MainSkillPresent => self.main_skill_present,
            Criterion::TwoOrMoreMatched => self.two_or_more_matched,
            Criterion::ScoreAtLeast50 => self.score_at_least_50,
        }
    }

    pub fn any(&self) -> bool {
        self.main_skill_present || self.two_or_more_matched || self.score_at_least_50
    }

    /// Satisfied criteria in fixed order
    pub fn satisfied(&self) -> Vec<Criterion> {
        Criterion::ALL
            .into_iter()
            .filter(|c| self.holds(*c))
            .collect()
    }
}

/// Engine output for one (resume text, role) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub score: u8,
    pub decision: Decision,
    #[serde(rename = "fitTier")]
    pub fit_tier: FitTier,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
    pub reasons: Vec<String>,
    pub criteria: CriteriaOutcome,
}

impl EvaluationResult {
    pub fn required_count(&self) -> usize {
        self.matched_skills.len() + self.missing_skills.len()
    }

    /// One-line rationale for recruiters
    pub fn summary(&self) -> String {
        let verdict = if self.decision.is_select() { "selected" } else { "rejected" };

        format!(
            "Candidate {} ({}): {} of {} required skills matched ({}%)",
            verdict,
            self.fit_tier.label(),
            self.matched_skills.len(),
            self.required_count(),
            self.score,
        )
    }
}
