use std::env;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use advisor_core::{CareerGoal, QuizKind, QuizQuestion};

use crate::error::BackendError;

//
// ─── CONFIG ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("ADVISOR_API_URL").unwrap_or_else(|_| "http://localhost:8000".into());
        Self { base_url }
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

//
// ─── CONTRACT ─────────────────────────────────────────────────────────────────
//

/// A file handed to the backend unparsed (PDF/DOCX/TXT).
#[derive(Clone, Debug)]
pub struct ProfileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Result of the combined upload-and-analyze endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct CvAnalysis {
    /// Parsed CV text, returned for user review and editing.
    pub raw_text: String,
    /// Opaque analysis payload, forwarded later to the recommender.
    pub analysis: Option<Value>,
}

/// Result of persisting a normalized profile server-side.
#[derive(Clone, Debug, PartialEq)]
pub struct SavedProfile {
    pub normalized_profile: Value,
    pub saved_path: String,
}

/// The backend HTTP contract, kept behind a trait so stages and tests can
/// run against in-memory implementations.
#[async_trait]
pub trait AdvisorBackend: Send + Sync {
    /// Extracts raw text from an uploaded file.
    async fn upload_profile(&self, file: ProfileUpload) -> Result<String, BackendError>;

    /// Structures free-text profile content into an opaque analysis payload.
    async fn normalize_profile(&self, profile_text: &str) -> Result<Value, BackendError>;

    /// Persists a normalized profile server-side.
    async fn save_profile(&self, normalized: &Value) -> Result<SavedProfile, BackendError>;

    /// Parses and analyzes a CV in one round trip.
    async fn upload_and_analyze(
        &self,
        file: ProfileUpload,
        career_goal: CareerGoal,
    ) -> Result<CvAnalysis, BackendError>;

    /// Produces quiz questions scoped to the profile and career goal.
    async fn generate_quiz(
        &self,
        profile_text: &str,
        career_goal: CareerGoal,
        kind: QuizKind,
    ) -> Result<Vec<QuizQuestion>, BackendError>;

    /// Produces a ranked course payload. The shape is deliberately left
    /// loose; normalization happens in `course_service`.
    async fn recommend_courses(
        &self,
        profile_text: &str,
        career_goal: CareerGoal,
        analysis: Option<&Value>,
    ) -> Result<Value, BackendError>;

    /// Liveness probe against the backend.
    async fn health(&self) -> Result<(), BackendError>;
}

//
// ─── HTTP IMPLEMENTATION ──────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn post_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        payload: &impl Serialize,
    ) -> Result<T, BackendError> {
        let response = self
            .client
            .post(self.config.endpoint(path))
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn post_multipart<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, BackendError> {
        let response = self
            .client
            .post(self.config.endpoint(path))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }
}

fn file_part(file: ProfileUpload) -> Part {
    Part::bytes(file.bytes).file_name(file.file_name)
}

#[async_trait]
impl AdvisorBackend for HttpBackend {
    async fn upload_profile(&self, file: ProfileUpload) -> Result<String, BackendError> {
        let form = Form::new().part("file", file_part(file));
        let body: UploadProfileResponse = self.post_multipart("/api/upload-profile", form).await?;
        Ok(body.raw_text)
    }

    async fn normalize_profile(&self, profile_text: &str) -> Result<Value, BackendError> {
        let body: NormalizeResponse = self
            .post_json(
                "/api/normalize-profile",
                &ProfileTextRequest { profile_text },
            )
            .await?;
        Ok(body.normalized_profile)
    }

    async fn save_profile(&self, normalized: &Value) -> Result<SavedProfile, BackendError> {
        let body: SaveProfileResponse = self
            .post_json(
                "/api/save-profile",
                &SaveProfileRequest {
                    normalized_profile: normalized,
                },
            )
            .await?;
        Ok(SavedProfile {
            normalized_profile: body.normalized_profile,
            saved_path: body.saved_path,
        })
    }

    async fn upload_and_analyze(
        &self,
        file: ProfileUpload,
        career_goal: CareerGoal,
    ) -> Result<CvAnalysis, BackendError> {
        let form = Form::new()
            .part("file", file_part(file))
            .text("career_goal", career_goal.as_str());
        let body: AnalyzeResponse = self.post_multipart("/api/upload-and-analyze", form).await?;

        if !body.ok {
            let detail = body
                .detail
                .unwrap_or_else(|| "upload was not accepted".to_string());
            return Err(BackendError::Rejected(detail));
        }

        Ok(CvAnalysis {
            raw_text: body.raw_text_preview.unwrap_or_default(),
            analysis: body.profile_analysis,
        })
    }

    async fn generate_quiz(
        &self,
        profile_text: &str,
        career_goal: CareerGoal,
        kind: QuizKind,
    ) -> Result<Vec<QuizQuestion>, BackendError> {
        let path = match kind {
            QuizKind::Pre => "/api/generate-quiz",
            QuizKind::Post => "/api/generate-post-quiz",
        };
        let body: QuizResponse = self
            .post_json(
                path,
                &QuizRequest {
                    profile_text,
                    career_goal: career_goal.as_str(),
                    quiz_type: kind.as_str(),
                },
            )
            .await?;

        if body.quiz.is_empty() {
            return Err(BackendError::EmptyQuiz);
        }
        Ok(body.quiz)
    }

    async fn recommend_courses(
        &self,
        profile_text: &str,
        career_goal: CareerGoal,
        analysis: Option<&Value>,
    ) -> Result<Value, BackendError> {
        self.post_json(
            "/api/recommend-courses",
            &RecommendRequest {
                profile_text,
                career_goal: career_goal.as_str(),
                profile_analysis: analysis,
            },
        )
        .await
    }

    async fn health(&self) -> Result<(), BackendError> {
        let response = self
            .client
            .get(self.config.endpoint("/health"))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BackendError::HttpStatus(response.status()));
        }
        Ok(())
    }
}

//
// ─── WIRE TYPES ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct ProfileTextRequest<'a> {
    profile_text: &'a str,
}

#[derive(Debug, Serialize)]
struct SaveProfileRequest<'a> {
    normalized_profile: &'a Value,
}

#[derive(Debug, Serialize)]
struct QuizRequest<'a> {
    profile_text: &'a str,
    career_goal: &'a str,
    quiz_type: &'a str,
}

#[derive(Debug, Serialize)]
struct RecommendRequest<'a> {
    profile_text: &'a str,
    career_goal: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_analysis: Option<&'a Value>,
}

#[derive(Debug, Deserialize)]
struct UploadProfileResponse {
    raw_text: String,
}

#[derive(Debug, Deserialize)]
struct NormalizeResponse {
    normalized_profile: Value,
}

#[derive(Debug, Deserialize)]
struct SaveProfileResponse {
    normalized_profile: Value,
    saved_path: String,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    #[serde(default = "default_true")]
    ok: bool,
    raw_text_preview: Option<String>,
    profile_analysis: Option<Value>,
    detail: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct QuizResponse {
    quiz: Vec<QuizQuestion>,
}
