/// Skills from a required list, partitioned by presence in the resume text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkillMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl SkillMatch {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

/// Fold resume text to the canonical (lowercase) case
///
/// Whitespace and punctuation are left untouched.
#[inline]
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
}

/// Containment test on normalized text
///
/// Plain substring search without word boundaries, so "java" is found in
/// "javascript" and "sql" in "mysql".
#[inline]
pub fn contains_skill(normalized_text: &str, skill: &str) -> bool {
    normalized_text.contains(skill)
}

/// Partition `required_skills` into matched and missing, keeping their order
pub fn match_skills(normalized_text: &str, required_skills: &[String]) -> SkillMatch {
    let (matched, missing) = required_skills
        .iter()
        .cloned()
        .partition(|skill| contains_skill(normalized_text, skill));

    SkillMatch { matched, missing }
}
