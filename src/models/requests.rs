use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to evaluate a resume against a role
///
/// `resume_text` is already-extracted plain text; an empty string is a
/// valid resume with no matching skills.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EvaluateRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "role_name", alias = "roleName")]
    pub role: String,
    #[serde(alias = "resume_text", rename = "resumeText")]
    pub resume_text: String,
}

impl EvaluateRequest {
    /// Check the resume against the configured size limit
    ///
    /// Counts characters, not bytes, so multi-byte text is not penalised.
    pub fn exceeds_limit(&self, max_resume_chars: usize) -> bool {
        self.resume_text.chars().count() > max_resume_chars
    }
}
