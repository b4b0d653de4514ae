use std::collections::HashMap;

use crate::core::error::{ScreeningError, TaxonomyError};
use crate::core::matching::normalize_text;
use crate::models::RoleSkillSpec;

/// Immutable role → skill specification registry
///
/// Built once at startup through [`Taxonomy::new`], which validates every
/// spec and lowercases its skill tokens. Nothing mutates it afterwards, so a
/// shared reference can be read from any number of threads.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    specs: Vec<RoleSkillSpec>,
    index: HashMap<String, usize>,
}

impl Taxonomy {
    /// Validate and index the given specs, keeping their order for `list_roles`
    pub fn new(specs: Vec<RoleSkillSpec>) -> Result<Self, TaxonomyError> {
        let mut validated = Vec::with_capacity(specs.len());
        let mut index = HashMap::with_capacity(specs.len());

        for spec in specs {
            let spec = validate_spec(spec)?;
            if index.contains_key(&spec.role_name) {
                return Err(TaxonomyError::DuplicateRole(spec.role_name));
            }
            index.insert(spec.role_name.clone(), validated.len());
            validated.push(spec);
        }

        tracing::debug!("Taxonomy built with {} roles", validated.len());

        Ok(Self {
            specs: validated,
            index,
        })
    }

    /// The roles shipped with the service
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::new(builtin_specs())
    }

    pub fn lookup(&self, role_name: &str) -> Result<&RoleSkillSpec, ScreeningError> {
        self.index
            .get(role_name)
            .map(|&i| &self.specs[i])
            .ok_or_else(|| ScreeningError::UnknownRole(role_name.to_string()))
    }

    /// Role names in the order they were supplied
    pub fn list_roles(&self) -> Vec<String> {
        self.specs.iter().map(|s| s.role_name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

fn builtin_specs() -> Vec<RoleSkillSpec> {
    vec![
        RoleSkillSpec::new(
            "Java Developer",
            "java",
            &["java", "spring", "sql", "oops", "data structures"],
        ),
        RoleSkillSpec::new(
            "Python Developer",
            "python",
            &["python", "django", "flask", "sql", "oops"],
        ),
        RoleSkillSpec::new(
            "Machine Learning Engineer",
            "machine learning",
            &["python", "machine learning", "pandas", "numpy", "scikit-learn"],
        ),
    ]
}

/// Lowercase the tokens, then check the spec's invariants
fn validate_spec(spec: RoleSkillSpec) -> Result<RoleSkillSpec, TaxonomyError> {
    if spec.role_name.is_empty() {
        return Err(TaxonomyError::EmptyRoleName);
    }

    let role = spec.role_name;
    let main_skill = normalize_text(&spec.main_skill);
    let mut required_skills: Vec<String> = Vec::with_capacity(spec.required_skills.len());

    if spec.required_skills.is_empty() {
        return Err(TaxonomyError::NoRequiredSkills(role));
    }

    for skill in &spec.required_skills {
        let skill = normalize_text(skill);
        if skill.is_empty() {
            return Err(TaxonomyError::EmptySkill { role });
        }
        if required_skills.contains(&skill) {
            return Err(TaxonomyError::DuplicateSkill { role, skill });
        }
        required_skills.push(skill);
    }

    if !required_skills.contains(&main_skill) {
        return Err(TaxonomyError::MainSkillNotRequired { role, main_skill });
    }

    Ok(RoleSkillSpec {
        role_name: role,
        main_skill,
        required_skills,
    })
}
