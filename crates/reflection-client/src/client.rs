//! HTTP client for the reflection analysis service.

use crate::error::{ReflectionError, ReflectionResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

const ANALYZE_PATH: &str = "reflections/analyze";
const HEALTH_PATH: &str = "health";

/// Body of `POST {base}/reflections/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReflectionRequest {
    pub mood_label: String,
    /// 1 (struggling) to 5 (great)
    pub mood_level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reflection_text: Option<String>,
}

impl ReflectionRequest {
    pub fn new(mood_label: impl Into<String>, mood_level: u8) -> Self {
        Self {
            mood_label: mood_label.into(),
            mood_level,
            mood_note: None,
            reflection_text: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.mood_note = Some(note.into());
        self
    }

    pub fn with_reflection(mut self, text: impl Into<String>) -> Self {
        self.reflection_text = Some(text.into());
        self
    }

    fn validate(&self) -> ReflectionResult<()> {
        if !(1..=5).contains(&self.mood_level) {
            return Err(ReflectionError::InvalidRequest(format!(
                "mood_level must be 1..=5, got {}",
                self.mood_level
            )));
        }
        Ok(())
    }
}

/// Service verdict on one reflection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodAnalysis {
    /// -1.0 (negative) to 1.0 (positive)
    pub sentiment_polarity: f64,
    pub analysis_id: String,
    pub message: String,
}

/// Client for the analysis service rooted at a base URL such as
/// `http://localhost:8000/api/v1`.
#[derive(Clone, Debug)]
pub struct ReflectionClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl ReflectionClient {
    pub fn new(base_url: Url, timeout: Duration) -> ReflectionResult<Self> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: with_trailing_slash(base_url),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ReflectionResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Send a reflection for analysis, surfacing every failure.
    pub async fn try_analyze(&self, request: &ReflectionRequest) -> ReflectionResult<MoodAnalysis> {
        request.validate()?;
        let url = self.endpoint(ANALYZE_PATH)?;

        tracing::debug!(url = %url, mood = %request.mood_label, "Sending reflection for analysis");

        let response = self.http_client.post(url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ReflectionError::ApiError {
                status,
                message: format!("upstream error (len={})", body.len()),
            });
        }

        let analysis: MoodAnalysis = response.json().await?;
        tracing::info!(
            analysis_id = %analysis.analysis_id,
            polarity = analysis.sentiment_polarity,
            "Reflection analyzed"
        );
        Ok(analysis)
    }

    /// Best-effort analysis. Any failure is logged and reported as `None`.
    pub async fn analyze_reflection(&self, request: &ReflectionRequest) -> Option<MoodAnalysis> {
        match self.try_analyze(request).await {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                tracing::warn!(error = %e, "Reflection analysis unavailable");
                None
            }
        }
    }

    /// `true` only when `GET {base}/health` answers with a success status.
    pub async fn check_health(&self) -> bool {
        let url = match self.endpoint(HEALTH_PATH) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid health URL");
                return false;
            }
        };

        match self.http_client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "Analysis service health check failed");
                false
            }
        }
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
