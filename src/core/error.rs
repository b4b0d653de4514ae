use thiserror::Error;

/// Taxonomy validation failures, raised while the taxonomy is built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    #[error("role name must not be empty")]
    EmptyRoleName,

    #[error("duplicate role: {0}")]
    DuplicateRole(String),

    #[error("role '{0}' has no required skills")]
    NoRequiredSkills(String),

    #[error("role '{role}' has an empty skill token")]
    EmptySkill { role: String },

    #[error("role '{role}' lists skill '{skill}' more than once")]
    DuplicateSkill { role: String, skill: String },

    #[error("role '{role}': main skill '{main_skill}' is not a required skill")]
    MainSkillNotRequired { role: String, main_skill: String },
}

/// Errors surfaced by the screening engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreeningError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] TaxonomyError),
}
