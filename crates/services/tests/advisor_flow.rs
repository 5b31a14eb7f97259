use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use advisor_core::{
    Applied, CareerGoal, FlowEvent, QuizAdvance, QuizKind, QuizProgress, QuizQuestion, QuizScore,
    SessionState, Step,
};
use services::backend::{AdvisorBackend, CvAnalysis, ProfileUpload, SavedProfile};
use services::{
    BackendError, ProfileService, QuizService, RecommendationService, fallback_courses,
    fallback_questions,
};

/// Serves canned responses in the shapes the real backend produces.
struct StaticBackend;

fn static_quiz() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            "What does an index speed up?",
            vec!["A. Writes".to_string(), "B. Reads".to_string()],
            "B",
        ),
        QuizQuestion::new(
            "Which HTTP verb is idempotent?",
            vec!["A. POST".to_string(), "B. PUT".to_string()],
            "B",
        ),
        QuizQuestion::new(
            "What does ACID's I stand for?",
            vec!["A. Isolation".to_string(), "B. Integrity".to_string()],
            "A",
        ),
    ]
}

#[async_trait]
impl AdvisorBackend for StaticBackend {
    async fn upload_profile(&self, _file: ProfileUpload) -> Result<String, BackendError> {
        Ok("Parsed CV text.".to_string())
    }

    async fn normalize_profile(&self, _profile_text: &str) -> Result<Value, BackendError> {
        Ok(json!({"Skills": ["SQL", "Python"], "Experience": "3 years"}))
    }

    async fn save_profile(&self, normalized: &Value) -> Result<SavedProfile, BackendError> {
        Ok(SavedProfile {
            normalized_profile: normalized.clone(),
            saved_path: "profiles/latest.json".to_string(),
        })
    }

    async fn upload_and_analyze(
        &self,
        _file: ProfileUpload,
        _career_goal: CareerGoal,
    ) -> Result<CvAnalysis, BackendError> {
        Ok(CvAnalysis {
            raw_text: "Parsed CV text.".to_string(),
            analysis: Some(json!({"Skills": ["SQL"]})),
        })
    }

    async fn generate_quiz(
        &self,
        _profile_text: &str,
        _career_goal: CareerGoal,
        _kind: QuizKind,
    ) -> Result<Vec<QuizQuestion>, BackendError> {
        Ok(static_quiz())
    }

    async fn recommend_courses(
        &self,
        _profile_text: &str,
        _career_goal: CareerGoal,
        analysis: Option<&Value>,
    ) -> Result<Value, BackendError> {
        // The recommender echoes the nested shape when analysis is present.
        let courses = json!([
            {"course_title": "SQL Deep Dive", "text": "Indexes and query plans.", "similarity": 0.9},
            {"course_title": "Python Data Pipelines", "text": "ETL fundamentals.", "similarity": 0.8}
        ]);
        if analysis.is_some() {
            Ok(json!({"data": {"courses": courses}}))
        } else {
            Ok(json!({"courses": courses}))
        }
    }

    async fn health(&self) -> Result<(), BackendError> {
        Ok(())
    }
}

/// Fails every call, exercising the degradation paths.
struct OfflineBackend;

#[async_trait]
impl AdvisorBackend for OfflineBackend {
    async fn upload_profile(&self, _file: ProfileUpload) -> Result<String, BackendError> {
        Err(BackendError::Rejected("offline".to_string()))
    }

    async fn normalize_profile(&self, _profile_text: &str) -> Result<Value, BackendError> {
        Err(BackendError::Rejected("offline".to_string()))
    }

    async fn save_profile(&self, _normalized: &Value) -> Result<SavedProfile, BackendError> {
        Err(BackendError::Rejected("offline".to_string()))
    }

    async fn upload_and_analyze(
        &self,
        _file: ProfileUpload,
        _career_goal: CareerGoal,
    ) -> Result<CvAnalysis, BackendError> {
        Err(BackendError::Rejected("offline".to_string()))
    }

    async fn generate_quiz(
        &self,
        _profile_text: &str,
        _career_goal: CareerGoal,
        _kind: QuizKind,
    ) -> Result<Vec<QuizQuestion>, BackendError> {
        Err(BackendError::Rejected("offline".to_string()))
    }

    async fn recommend_courses(
        &self,
        _profile_text: &str,
        _career_goal: CareerGoal,
        _analysis: Option<&Value>,
    ) -> Result<Value, BackendError> {
        Err(BackendError::Rejected("offline".to_string()))
    }

    async fn health(&self) -> Result<(), BackendError> {
        Err(BackendError::Rejected("offline".to_string()))
    }
}

fn complete_quiz(questions: Vec<QuizQuestion>, answers: &[&str]) -> QuizScore {
    let mut progress = QuizProgress::new(questions).unwrap();
    loop {
        let answer = answers[progress.current_index()];
        progress.select(answer);
        match progress.advance().unwrap() {
            QuizAdvance::Continue => {}
            QuizAdvance::Completed { score, total } => return QuizScore::new(score, total),
        }
    }
}

#[tokio::test]
async fn full_wizard_flow_against_static_backend() {
    let backend: Arc<dyn AdvisorBackend> = Arc::new(StaticBackend);
    let profiles = ProfileService::new(backend.clone());
    let quizzes = QuizService::new(backend.clone());
    let recommendations = RecommendationService::new(backend);

    let mut session = SessionState::default();
    assert_eq!(session.apply(FlowEvent::Start), Applied::Accepted);

    // Profile submission: normalize + pre-quiz generation.
    let submission = profiles
        .submit("Three years as a data analyst.", CareerGoal::DataEngineer)
        .await
        .unwrap();
    assert_eq!(submission.quiz.len(), 3);
    assert_eq!(
        session.apply(FlowEvent::ProfileSubmitted {
            profile_text: submission.profile_text.clone(),
            career_goal: submission.career_goal,
            analysis: submission.analysis.clone(),
        }),
        Applied::Accepted
    );

    // Pre-quiz: two of three correct.
    let pre = complete_quiz(submission.quiz, &["B", "B", "B"]);
    assert_eq!(pre, QuizScore::new(2, 3));
    assert_eq!(
        session.apply(FlowEvent::PreQuizCompleted(pre)),
        Applied::Accepted
    );
    assert_eq!(session.step(), Step::Recommendations);

    // Recommendations: analysis forwarded, nested shape normalized.
    let courses = recommendations
        .recommend(
            session.profile_text(),
            session.career_goal(),
            session.profile_analysis(),
        )
        .await;
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].title, "SQL Deep Dive");

    // Post-quiz: all correct this time.
    assert_eq!(session.apply(FlowEvent::ContinueToPostQuiz), Applied::Accepted);
    let questions = quizzes
        .fetch(QuizKind::Post, session.profile_text(), session.career_goal())
        .await;
    let post = complete_quiz(questions, &["B", "B", "A"]);
    assert_eq!(post, QuizScore::new(3, 3));
    assert_eq!(
        session.apply(FlowEvent::PostQuizCompleted(post)),
        Applied::Accepted
    );

    assert_eq!(session.step(), Step::Completion);
    assert_eq!(session.pre_quiz_score().unwrap().percentage(), 67);
    assert_eq!(session.post_quiz_score().unwrap().percentage(), 100);
}

#[tokio::test]
async fn quiz_service_degrades_to_fallback_when_offline() {
    let quizzes = QuizService::new(Arc::new(OfflineBackend));
    let questions = quizzes
        .fetch(QuizKind::Pre, "profile", CareerGoal::default())
        .await;

    assert_eq!(questions, fallback_questions());
    assert_eq!(questions.len(), 5);

    // The fallback quiz is fully playable end to end.
    let score = complete_quiz(questions, &["B", "B", "A", "B", "A"]);
    assert_eq!(score, QuizScore::new(5, 5));
}

#[tokio::test]
async fn recommendations_degrade_to_fallback_when_offline() {
    let recommendations = RecommendationService::new(Arc::new(OfflineBackend));
    let courses = recommendations
        .recommend("profile", CareerGoal::default(), None)
        .await;

    assert_eq!(courses, fallback_courses());
    assert_eq!(courses.len(), 3);
}

#[tokio::test]
async fn profile_submission_fails_cleanly_when_offline() {
    let profiles = ProfileService::new(Arc::new(OfflineBackend));
    let result = profiles.submit("some profile", CareerGoal::default()).await;
    assert!(result.is_err());
}
