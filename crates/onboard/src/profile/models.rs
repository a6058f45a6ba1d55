//! Profile data models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fields a submission must carry, in the order they are reported back.
pub const REQUIRED_FIELDS: [&str; 5] = ["email", "classYear", "interests", "skills", "goals"];

/// Skill category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    Technical,
    Soft,
}

impl std::fmt::Display for SkillType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillType::Technical => write!(f, "technical"),
            SkillType::Soft => write!(f, "soft"),
        }
    }
}

impl std::str::FromStr for SkillType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technical" => Ok(SkillType::Technical),
            "soft" => Ok(SkillType::Soft),
            _ => Err(format!("unknown skill type: {}", s)),
        }
    }
}

/// A stored profile row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Profile {
    /// Store-assigned identifier.
    pub id: i64,
    /// Unique key of the profile.
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Free-form class year, e.g. "Junior".
    pub class_year: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A skill label with its type tag, as it travels over the wire.
///
/// The type is kept as a plain string so that unknown tags reach the
/// service and are reported there instead of failing JSON extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillEntry {
    pub skill: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl SkillEntry {
    pub fn new(skill: impl Into<String>, kind: SkillType) -> Self {
        Self {
            skill: skill.into(),
            kind: kind.to_string(),
        }
    }
}

/// A profile together with its child collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileDetail {
    #[serde(flatten)]
    pub profile: Profile,
    pub interests: Vec<String>,
    pub skills: Vec<SkillEntry>,
    pub goals: Vec<String>,
}

/// Request body of a profile submission.
///
/// Every field is optional at the deserialization layer so that missing
/// fields are reported with the documented 400 body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfileRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub class_year: Option<String>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub skills: Option<Vec<SkillEntry>>,
    #[serde(default)]
    pub goals: Option<Vec<String>>,
}

/// A submission that passed validation and is ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub class_year: String,
    pub interests: Vec<String>,
    pub skills: Vec<SkillEntry>,
    pub goals: Vec<String>,
}

/// Result of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// Identifier of the created or updated profile.
    pub id: i64,
    /// Whether the profile row was created by this submission.
    pub created: bool,
}

/// Response body of a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfileResponse {
    pub success: bool,
    pub message: String,
    pub user_id: i64,
}

impl From<UpsertOutcome> for SaveProfileResponse {
    fn from(outcome: UpsertOutcome) -> Self {
        Self {
            success: true,
            message: "Profile saved successfully".to_string(),
            user_id: outcome.id,
        }
    }
}
