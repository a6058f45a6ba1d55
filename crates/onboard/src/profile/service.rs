//! Profile service for business logic.

use anyhow::Result;
use thiserror::Error;
use tracing::{info, instrument};

use super::models::{
    NewProfile, Profile, ProfileDetail, SaveProfileRequest, SkillEntry, SkillType, UpsertOutcome,
};
use super::repository::ProfileRepository;

/// Errors surfaced by a profile submission.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid skill type '{kind}' for skill '{skill}'. Must be 'technical' or 'soft'.")]
    InvalidSkillType { skill: String, kind: String },

    #[error("Failed to save profile: {0:#}")]
    Storage(#[source] anyhow::Error),
}

/// Service for profile operations.
#[derive(Debug, Clone)]
pub struct ProfileService {
    repo: ProfileRepository,
}

impl ProfileService {
    /// Create a new profile service.
    pub fn new(repo: ProfileRepository) -> Self {
        Self { repo }
    }

    /// Validate a submission and upsert it.
    #[instrument(skip(self, request))]
    pub async fn save_profile(
        &self,
        request: SaveProfileRequest,
    ) -> Result<UpsertOutcome, ProfileError> {
        let profile = validate(request)?;

        let outcome = self
            .repo
            .upsert(&profile)
            .await
            .map_err(ProfileError::Storage)?;

        if outcome.created {
            info!(profile_id = outcome.id, email = %profile.email, "Created profile");
        } else {
            info!(profile_id = outcome.id, email = %profile.email, "Updated profile");
        }

        Ok(outcome)
    }

    /// Get a profile and its child collections by email.
    #[instrument(skip(self))]
    pub async fn get_profile(&self, email: &str) -> Result<Option<ProfileDetail>> {
        self.repo.get_detail(email).await
    }

    /// List all profiles, newest first.
    #[instrument(skip(self))]
    pub async fn list_profiles(&self) -> Result<Vec<Profile>> {
        self.repo.list().await
    }
}

/// Check required fields and skill types.
///
/// Strings count as missing when absent or empty; lists only when absent,
/// so an empty list is accepted.
fn validate(request: SaveProfileRequest) -> Result<NewProfile, ProfileError> {
    let SaveProfileRequest {
        email,
        first_name,
        last_name,
        class_year,
        interests,
        skills,
        goals,
    } = request;

    let (Some(email), Some(class_year), Some(interests), Some(skills), Some(goals)) = (
        email.filter(|s| !s.is_empty()),
        class_year.filter(|s| !s.is_empty()),
        interests,
        skills,
        goals,
    ) else {
        return Err(ProfileError::MissingFields);
    };

    if let Some(bad) = skills
        .iter()
        .find(|entry| entry.kind.parse::<SkillType>().is_err())
    {
        return Err(ProfileError::InvalidSkillType {
            skill: bad.skill.clone(),
            kind: bad.kind.clone(),
        });
    }

    Ok(NewProfile {
        email,
        first_name,
        last_name,
        class_year,
        interests,
        skills,
        goals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn setup_service() -> ProfileService {
        let db = Database::in_memory().await.unwrap();
        ProfileService::new(ProfileRepository::new(db.pool().clone()))
    }

    fn complete_request() -> SaveProfileRequest {
        SaveProfileRequest {
            email: Some("ada@college.edu".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: None,
            class_year: Some("Sophomore".to_string()),
            interests: Some(vec!["Research - Academic Research".to_string()]),
            skills: Some(vec![SkillEntry::new("R", SkillType::Technical)]),
            goals: Some(vec!["Career Exploration".to_string()]),
        }
    }

    #[test]
    fn test_validate_requires_fields() {
        for case in 0..7 {
            let mut request = complete_request();
            match case {
                0 => request.email = None,
                1 => request.email = Some(String::new()),
                2 => request.class_year = None,
                3 => request.class_year = Some(String::new()),
                4 => request.interests = None,
                5 => request.skills = None,
                _ => request.goals = None,
            }
            assert!(
                matches!(validate(request), Err(ProfileError::MissingFields)),
                "case {case}"
            );
        }
    }

    #[test]
    fn test_validate_accepts_empty_lists_and_names() {
        let mut request = complete_request();
        request.first_name = None;
        request.interests = Some(vec![]);
        request.goals = Some(vec![]);

        let profile = validate(request).unwrap();
        assert!(profile.first_name.is_none());
        assert!(profile.interests.is_empty());
    }

    #[test]
    fn test_validate_rejects_unknown_skill_type() {
        let mut request = complete_request();
        request.skills = Some(vec![SkillEntry {
            skill: "Empathy".to_string(),
            kind: "people".to_string(),
        }]);

        match validate(request) {
            Err(ProfileError::InvalidSkillType { skill, kind }) => {
                assert_eq!(skill, "Empathy");
                assert_eq!(kind, "people");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_fields_touch_nothing() {
        let service = setup_service().await;

        let mut request = complete_request();
        request.class_year = None;
        assert!(service.save_profile(request).await.is_err());

        assert!(service.list_profiles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_resave() {
        let service = setup_service().await;

        let first = service.save_profile(complete_request()).await.unwrap();
        assert!(first.created);

        let mut request = complete_request();
        request.last_name = Some("Lovelace".to_string());
        let second = service.save_profile(request).await.unwrap();
        assert_eq!(second.id, first.id);
        assert!(!second.created);

        let detail = service
            .get_profile("ada@college.edu")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.profile.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(detail.skills.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_submissions_all_commit() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(&dir.path().join("onboard.db"), 5)
            .await
            .unwrap();
        let service = ProfileService::new(ProfileRepository::new(db.pool().clone()));

        let handles: Vec<_> = (0..40)
            .map(|i| {
                let service = service.clone();
                let mut request = complete_request();
                request.email = Some(format!("student{i}@college.edu"));
                tokio::spawn(async move { service.save_profile(request).await })
            })
            .collect();

        for handle in handles {
            let outcome = handle.await.unwrap();
            assert!(outcome.is_ok(), "{:?}", outcome.err());
        }

        assert_eq!(service.list_profiles().await.unwrap().len(), 40);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_resubmissions_keep_one_profile() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(&dir.path().join("onboard.db"), 5)
            .await
            .unwrap();
        let service = ProfileService::new(ProfileRepository::new(db.pool().clone()));

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.save_profile(complete_request()).await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        assert_eq!(service.list_profiles().await.unwrap().len(), 1);
        let detail = service
            .get_profile("ada@college.edu")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.interests.len(), 1);
        assert_eq!(detail.skills.len(), 1);
        assert_eq!(detail.goals.len(), 1);
    }
}
