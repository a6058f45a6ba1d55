//! HTTP client for the profile API.

use anyhow::{Context, Result, anyhow};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::{ErrorResponse, HealthResponse};
use crate::draft::ProfileDraft;
use crate::profile::{Profile, ProfileDetail, SaveProfileResponse};

/// Default server the client talks to.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Client submitting survey drafts to a profile server.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    base_url: String,
    client: reqwest::Client,
}

impl ProfileClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Query the health endpoint.
    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .context("sending request to server")?;
        decode(response).await
    }

    /// Submit a complete draft; returns the profile id.
    pub async fn submit(&self, draft: &ProfileDraft) -> Result<SaveProfileResponse> {
        let response = self
            .client
            .post(self.url("/user/profile"))
            .json(draft)
            .send()
            .await
            .context("sending request to server")?;
        decode(response).await
    }

    /// Fetch a profile by email; `None` when the server has no such profile.
    pub async fn get_profile(&self, email: &str) -> Result<Option<ProfileDetail>> {
        let path = format!("/user/profile/{}", urlencoding::encode(email));
        let response = self
            .client
            .get(self.url(&path))
            .send()
            .await
            .context("sending request to server")?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(response).await.map(Some)
    }

    /// List all profiles, newest first.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>> {
        let response = self
            .client
            .get(self.url("/user/profiles"))
            .send()
            .await
            .context("sending request to server")?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.context("decoding server response");
    }

    let body = response.text().await.unwrap_or_default();
    Err(match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => {
            let mut msg = format!("server returned {}: {}", status, err.error);
            if let Some(required) = err.required {
                msg.push_str(&format!(" (required: {})", required.join(", ")));
            }
            if let Some(cause) = err.message {
                msg.push_str(&format!(" ({})", cause));
            }
            anyhow!(msg)
        }
        Err(_) => anyhow!("server returned {}: {}", status, body),
    })
}
