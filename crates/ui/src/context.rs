use std::sync::Arc;

use services::{ProfileService, QuizService, RecommendationService};

/// What the UI needs from the application composition root.
pub trait UiApp: Send + Sync {
    fn profile_service(&self) -> Arc<ProfileService>;
    fn quiz_service(&self) -> Arc<QuizService>;
    fn recommendation_service(&self) -> Arc<RecommendationService>;
}

#[derive(Clone)]
pub struct AppContext {
    profiles: Arc<ProfileService>,
    quizzes: Arc<QuizService>,
    recommendations: Arc<RecommendationService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            profiles: app.profile_service(),
            quizzes: app.quiz_service(),
            recommendations: app.recommendation_service(),
        }
    }

    #[must_use]
    pub fn profile_service(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profiles)
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    #[must_use]
    pub fn recommendation_service(&self) -> Arc<RecommendationService> {
        Arc::clone(&self.recommendations)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
