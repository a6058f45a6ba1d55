//! Profile repository for database operations.

use anyhow::{Context, Result};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, instrument};

use super::models::{NewProfile, Profile, ProfileDetail, SkillEntry, UpsertOutcome};

/// Repository for profile database operations.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create or update the profile for `profile.email` and replace its
    /// interests, skills and goals.
    ///
    /// Runs in a single transaction; on any error nothing is written. The
    /// write lock is taken up front so concurrent submissions wait on the
    /// busy timeout instead of failing a read-to-write upgrade.
    #[instrument(skip(self, profile), fields(email = %profile.email))]
    pub async fn upsert(&self, profile: &NewProfile) -> Result<UpsertOutcome> {
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .context("starting transaction")?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM profiles WHERE email = ?")
            .bind(&profile.email)
            .fetch_optional(&mut *tx)
            .await
            .context("looking up profile by email")?;

        let outcome = match existing {
            Some(id) => {
                debug!("Updating profile {}", id);

                sqlx::query(
                    r#"
                    UPDATE profiles
                    SET first_name = ?, last_name = ?, class_year = ?, updated_at = datetime('now')
                    WHERE id = ?
                    "#,
                )
                .bind(&profile.first_name)
                .bind(&profile.last_name)
                .bind(&profile.class_year)
                .bind(id)
                .execute(&mut *tx)
                .await
                .context("updating profile")?;

                clear_children(&mut *tx, id).await?;

                UpsertOutcome { id, created: false }
            }
            None => {
                let id = sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO profiles (email, first_name, last_name, class_year)
                    VALUES (?, ?, ?, ?)
                    RETURNING id
                    "#,
                )
                .bind(&profile.email)
                .bind(&profile.first_name)
                .bind(&profile.last_name)
                .bind(&profile.class_year)
                .fetch_one(&mut *tx)
                .await
                .context("inserting profile")?;

                debug!("Created profile {}", id);

                UpsertOutcome { id, created: true }
            }
        };

        insert_children(&mut *tx, outcome.id, profile).await?;

        tx.commit().await.context("committing profile")?;

        Ok(outcome)
    }

    /// Get a profile row by email.
    #[instrument(skip(self))]
    pub async fn get_by_email(&self, email: &str) -> Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, email, first_name, last_name, class_year, created_at, updated_at
            FROM profiles
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("fetching profile by email")?;

        Ok(profile)
    }

    /// Get a profile with its interests, skills and goals.
    #[instrument(skip(self))]
    pub async fn get_detail(&self, email: &str) -> Result<Option<ProfileDetail>> {
        let Some(profile) = self.get_by_email(email).await? else {
            return Ok(None);
        };

        let interests = sqlx::query_scalar::<_, String>(
            "SELECT interest FROM interests WHERE profile_id = ? ORDER BY id",
        )
        .bind(profile.id)
        .fetch_all(&self.pool)
        .await
        .context("fetching interests")?;

        let skills = sqlx::query_as::<_, (String, String)>(
            "SELECT skill, skill_type FROM skills WHERE profile_id = ? ORDER BY id",
        )
        .bind(profile.id)
        .fetch_all(&self.pool)
        .await
        .context("fetching skills")?
        .into_iter()
        .map(|(skill, kind)| SkillEntry { skill, kind })
        .collect();

        let goals =
            sqlx::query_scalar::<_, String>("SELECT goal FROM goals WHERE profile_id = ? ORDER BY id")
                .bind(profile.id)
                .fetch_all(&self.pool)
                .await
                .context("fetching goals")?;

        Ok(Some(ProfileDetail {
            profile,
            interests,
            skills,
            goals,
        }))
    }

    /// List all profiles, newest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Profile>> {
        let profiles = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, email, first_name, last_name, class_year, created_at, updated_at
            FROM profiles
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("listing profiles")?;

        Ok(profiles)
    }
}

async fn clear_children(conn: &mut SqliteConnection, profile_id: i64) -> Result<()> {
    for table in ["interests", "skills", "goals"] {
        sqlx::query(&format!("DELETE FROM {table} WHERE profile_id = ?"))
            .bind(profile_id)
            .execute(&mut *conn)
            .await
            .with_context(|| format!("clearing {table}"))?;
    }
    Ok(())
}

async fn insert_children(
    conn: &mut SqliteConnection,
    profile_id: i64,
    profile: &NewProfile,
) -> Result<()> {
    for interest in &profile.interests {
        sqlx::query("INSERT INTO interests (profile_id, interest) VALUES (?, ?)")
            .bind(profile_id)
            .bind(interest)
            .execute(&mut *conn)
            .await
            .context("inserting interest")?;
    }

    for entry in &profile.skills {
        sqlx::query("INSERT INTO skills (profile_id, skill, skill_type) VALUES (?, ?, ?)")
            .bind(profile_id)
            .bind(&entry.skill)
            .bind(&entry.kind)
            .execute(&mut *conn)
            .await
            .context("inserting skill")?;
    }

    for goal in &profile.goals {
        sqlx::query("INSERT INTO goals (profile_id, goal) VALUES (?, ?)")
            .bind(profile_id)
            .bind(goal)
            .execute(&mut *conn)
            .await
            .context("inserting goal")?;
    }

    Ok(())
}
