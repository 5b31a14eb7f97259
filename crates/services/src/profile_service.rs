use std::sync::Arc;

use serde_json::Value;

use advisor_core::{CareerGoal, QuizKind, QuizQuestion};

use crate::backend::{AdvisorBackend, CvAnalysis, ProfileUpload, SavedProfile};
use crate::error::{BackendError, ProfileError};

/// Everything the flow needs from a successful profile submission.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileSubmission {
    pub profile_text: String,
    pub career_goal: CareerGoal,
    pub analysis: Option<Value>,
    pub quiz: Vec<QuizQuestion>,
}

/// Orchestrates profile submission: local validation, normalization and
/// pre-quiz generation.
#[derive(Clone)]
pub struct ProfileService {
    backend: Arc<dyn AdvisorBackend>,
}

impl ProfileService {
    #[must_use]
    pub fn new(backend: Arc<dyn AdvisorBackend>) -> Self {
        Self { backend }
    }

    /// Submits profile text, normalizing it and generating the pre-quiz.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyProfile` for blank text without issuing
    /// any network call, and `ProfileError::Backend` when either backend
    /// call fails. On failure the flow stays where it is; resubmitting
    /// retries from scratch.
    pub async fn submit(
        &self,
        profile_text: &str,
        career_goal: CareerGoal,
    ) -> Result<ProfileSubmission, ProfileError> {
        let trimmed = profile_text.trim();
        if trimmed.is_empty() {
            return Err(ProfileError::EmptyProfile);
        }

        let analysis = self.backend.normalize_profile(trimmed).await?;
        let quiz = self
            .backend
            .generate_quiz(trimmed, career_goal, QuizKind::Pre)
            .await?;

        Ok(ProfileSubmission {
            profile_text: trimmed.to_string(),
            career_goal,
            analysis: Some(analysis),
            quiz,
        })
    }

    /// Uploads a CV for parsing and analysis. The parsed text comes back
    /// for user review and is resubmitted through [`Self::submit`].
    ///
    /// # Errors
    ///
    /// Returns `BackendError` for transport failures and
    /// `BackendError::Rejected` when the backend refuses the file.
    pub async fn upload_for_review(
        &self,
        file: ProfileUpload,
        career_goal: CareerGoal,
    ) -> Result<CvAnalysis, BackendError> {
        self.backend.upload_and_analyze(file, career_goal).await
    }

    /// Persists a normalized profile server-side.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` when the save call fails.
    pub async fn save(&self, normalized: &Value) -> Result<SavedProfile, BackendError> {
        self.backend.save_profile(normalized).await
    }
}
