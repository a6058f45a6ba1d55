//! Survey draft held by the wizard until submission.
//!
//! Mirrors the checks the wizard runs before letting the user advance, so a
//! client can refuse to submit a draft the server would accept but the
//! survey would not.

mod catalog;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::{SkillEntry, SkillType};

pub use catalog::{
    CAREER_CATEGORIES, CLASS_YEARS, CareerCategory, GOAL_OPTIONS, GoalOption, interest_label,
    suggested_skills,
};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PersonalInfo,
    CareerInterests,
    Skills,
    Goals,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::PersonalInfo,
        WizardStep::CareerInterests,
        WizardStep::Skills,
        WizardStep::Goals,
    ];

    /// Step label shown by the wizard.
    pub fn label(self) -> &'static str {
        match self {
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::CareerInterests => "Career Interests",
            WizardStep::Skills => "Skills",
            WizardStep::Goals => "Goals",
        }
    }

    /// The following step, if any.
    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::PersonalInfo => Some(WizardStep::CareerInterests),
            WizardStep::CareerInterests => Some(WizardStep::Skills),
            WizardStep::Skills => Some(WizardStep::Goals),
            WizardStep::Goals => None,
        }
    }
}

/// Reasons a draft cannot leave a step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please fill in all required fields")]
    MissingPersonalInfo,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please select at least one career interest")]
    NoInterests,
    #[error("Please add at least one skill")]
    NoSkills,
    #[error("Please select at least one goal")]
    NoGoals,
}

impl DraftError {
    /// Step the error belongs to.
    pub fn step(&self) -> WizardStep {
        match self {
            DraftError::MissingPersonalInfo | DraftError::InvalidEmail => WizardStep::PersonalInfo,
            DraftError::NoInterests => WizardStep::CareerInterests,
            DraftError::NoSkills => WizardStep::Skills,
            DraftError::NoGoals => WizardStep::Goals,
        }
    }
}

/// Survey answers not yet submitted. Serializes to the submission body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub class_year: String,
    pub interests: Vec<String>,
    pub skills: Vec<SkillEntry>,
    pub goals: Vec<String>,
}

impl ProfileDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the draft may leave `step`.
    pub fn validate_step(&self, step: WizardStep) -> Result<(), DraftError> {
        match step {
            WizardStep::PersonalInfo => {
                if self.email.is_empty() || self.first_name.is_empty() || self.class_year.is_empty()
                {
                    return Err(DraftError::MissingPersonalInfo);
                }
                if !is_valid_email(&self.email) {
                    return Err(DraftError::InvalidEmail);
                }
            }
            WizardStep::CareerInterests if self.interests.is_empty() => {
                return Err(DraftError::NoInterests);
            }
            WizardStep::Skills if self.skills.is_empty() => return Err(DraftError::NoSkills),
            WizardStep::Goals if self.goals.is_empty() => return Err(DraftError::NoGoals),
            _ => {}
        }
        Ok(())
    }

    /// Check every step in order; the first failure wins.
    pub fn validate(&self) -> Result<(), DraftError> {
        WizardStep::ALL
            .iter()
            .try_for_each(|step| self.validate_step(*step))
    }

    /// Select the interest if absent, deselect it otherwise.
    pub fn toggle_interest(&mut self, interest: &str) {
        toggle(&mut self.interests, interest);
    }

    /// Select the goal if absent, deselect it otherwise.
    pub fn toggle_goal(&mut self, goal: &str) {
        toggle(&mut self.goals, goal);
    }

    /// Add a skill unless it is blank or already present ignoring case.
    ///
    /// Returns whether the skill was added.
    pub fn add_skill(&mut self, skill: &str, kind: SkillType) -> bool {
        let skill = skill.trim();
        if skill.is_empty() {
            return false;
        }

        let lowered = skill.to_lowercase();
        if self
            .skills
            .iter()
            .any(|s| s.skill.to_lowercase() == lowered)
        {
            return false;
        }

        self.skills.push(SkillEntry::new(skill, kind));
        true
    }

    /// Remove every skill whose label matches exactly.
    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s.skill != skill);
    }
}

fn toggle(items: &mut Vec<String>, value: &str) {
    if let Some(pos) = items.iter().position(|i| i == value) {
        items.remove(pos);
    } else {
        items.push(value.to_string());
    }
}

/// Loose `local@domain.tld` check used by the wizard.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProfileDraft {
        let mut draft = ProfileDraft {
            email: "jane.doe@harvard.edu".to_string(),
            first_name: "Jane".to_string(),
            class_year: CLASS_YEARS[2].to_string(),
            ..Default::default()
        };
        draft.toggle_interest(&interest_label("Tech", "Data Science"));
        draft.add_skill("SQL", SkillType::Technical);
        draft.toggle_goal(GOAL_OPTIONS[0].label);
        draft
    }

    #[test]
    fn test_filled_draft_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_personal_info_requirements() {
        let mut draft = filled();
        draft.first_name.clear();
        assert_eq!(
            draft.validate_step(WizardStep::PersonalInfo),
            Err(DraftError::MissingPersonalInfo)
        );

        let mut draft = filled();
        draft.last_name.clear();
        assert_eq!(draft.validate_step(WizardStep::PersonalInfo), Ok(()));

        let mut draft = filled();
        draft.email = "jane@localhost".to_string();
        assert_eq!(draft.validate(), Err(DraftError::InvalidEmail));
    }

    #[test]
    fn test_validate_reports_first_failing_step() {
        let mut draft = filled();
        draft.skills.clear();
        draft.goals.clear();

        let err = draft.validate().unwrap_err();
        assert_eq!(err, DraftError::NoSkills);
        assert_eq!(err.step(), WizardStep::Skills);
    }

    #[test]
    fn test_toggle_interest_and_goal() {
        let mut draft = ProfileDraft::new();
        draft.toggle_interest("Law - Policy");
        draft.toggle_interest("Law - Policy");
        assert!(draft.interests.is_empty());

        draft.toggle_goal("Networking");
        draft.toggle_goal("Internship");
        draft.toggle_goal("Networking");
        assert_eq!(draft.goals, vec!["Internship"]);
    }

    #[test]
    fn test_add_skill_dedups_case_insensitively() {
        let mut draft = ProfileDraft::new();
        assert!(draft.add_skill("  Python ", SkillType::Technical));
        assert!(!draft.add_skill("python", SkillType::Technical));
        assert!(!draft.add_skill("PYTHON", SkillType::Soft));
        assert!(!draft.add_skill("   ", SkillType::Soft));
        assert!(draft.add_skill("Teamwork", SkillType::Soft));

        assert_eq!(
            draft.skills,
            vec![
                SkillEntry::new("Python", SkillType::Technical),
                SkillEntry::new("Teamwork", SkillType::Soft),
            ]
        );

        draft.remove_skill("Python");
        assert_eq!(draft.skills.len(), 1);
    }

    #[test]
    fn test_draft_serializes_as_submission_body() {
        let value = serde_json::to_value(filled()).unwrap();
        assert_eq!(value["classYear"], "Junior");
        assert_eq!(value["firstName"], "Jane");
        assert_eq!(value["skills"][0]["type"], "technical");

        let request: crate::profile::SaveProfileRequest = serde_json::from_value(value).unwrap();
        assert_eq!(request.email.as_deref(), Some("jane.doe@harvard.edu"));
    }

    #[test]
    fn test_step_order() {
        let mut step = WizardStep::PersonalInfo;
        let mut labels = vec![step.label()];
        while let Some(next) = step.next() {
            labels.push(next.label());
            step = next;
        }
        assert_eq!(labels, vec!["Personal Info", "Career Interests", "Skills", "Goals"]);
    }
}
