use std::sync::Arc;

use advisor_core::{CareerGoal, QuizKind, QuizQuestion};

use crate::backend::AdvisorBackend;

/// Fetches generated quizzes, degrading to a fixed local set when the
/// backend is unavailable.
#[derive(Clone)]
pub struct QuizService {
    backend: Arc<dyn AdvisorBackend>,
}

impl QuizService {
    #[must_use]
    pub fn new(backend: Arc<dyn AdvisorBackend>) -> Self {
        Self { backend }
    }

    /// Returns the generated quiz, or the deterministic offline fallback
    /// on any failure. Degradation is deliberate here: a quiz that cannot
    /// be generated should not block the flow.
    pub async fn fetch(
        &self,
        kind: QuizKind,
        profile_text: &str,
        career_goal: CareerGoal,
    ) -> Vec<QuizQuestion> {
        match self
            .backend
            .generate_quiz(profile_text, career_goal, kind)
            .await
        {
            Ok(quiz) => quiz,
            Err(_) => fallback_questions(),
        }
    }
}

/// The fixed 5-question set used when quiz generation fails.
#[must_use]
pub fn fallback_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            "What is Flask in web programming?",
            vec![
                "A. A programming language".to_string(),
                "B. A web framework for Python".to_string(),
                "C. A database".to_string(),
                "D. A testing tool".to_string(),
            ],
            "B",
        ),
        QuizQuestion::new(
            "In Python, which syntax creates a list?",
            vec![
                "A. {}".to_string(),
                "B. []".to_string(),
                "C. ()".to_string(),
                "D. <>".to_string(),
            ],
            "B",
        ),
        QuizQuestion::new(
            "Which statement gives Python access to SQLite?",
            vec![
                "A. import sqlite3".to_string(),
                "B. import mysql".to_string(),
                "C. import database".to_string(),
                "D. import sql".to_string(),
            ],
            "A",
        ),
        QuizQuestion::new(
            "What is a REST API?",
            vec![
                "A. A programming language".to_string(),
                "B. An architecture for web services".to_string(),
                "C. A database".to_string(),
                "D. A frontend framework".to_string(),
            ],
            "B",
        ),
        QuizQuestion::new(
            "In Git, which command creates a new branch?",
            vec![
                "A. git branch".to_string(),
                "B. git checkout".to_string(),
                "C. git commit".to_string(),
                "D. git init".to_string(),
            ],
            "A",
        ),
    ]
}
