//! Profile management module.
//!
//! Stores onboarding survey submissions: one profile per email plus its
//! interests, skills and goals.

mod models;
mod repository;
mod service;

pub use models::{
    NewProfile, Profile, ProfileDetail, REQUIRED_FIELDS, SaveProfileRequest, SaveProfileResponse,
    SkillEntry, SkillType, UpsertOutcome,
};
pub use repository::ProfileRepository;
pub use service::{ProfileError, ProfileService};
