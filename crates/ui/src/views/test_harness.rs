use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use serde_json::{Value, json};

use advisor_core::{CareerGoal, FlowEvent, QuizKind, QuizQuestion};
use services::backend::{AdvisorBackend, CvAnalysis, ProfileUpload, SavedProfile};
use services::{BackendError, ProfileService, QuizService, RecommendationService};

use crate::context::{UiApp, build_app_context};
use crate::views::FlowView;
use crate::views::flow::FlowTestHandles;
use crate::views::profile::ProfileTestHandles;

//
// ─── MOCK BACKENDS ────────────────────────────────────────────────────────────
//

/// Serves canned responses in the shapes the real backend produces.
pub struct StaticBackend;

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
        Ok(json!({"Skills": ["SQL", "Python"]}))
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
        _analysis: Option<&Value>,
    ) -> Result<Value, BackendError> {
        Ok(json!({
            "courses": [
                {
                    "course_title": "SQL Deep Dive",
                    "text": "Indexes and query plans.",
                    "similarity": 0.9
                },
                {
                    "course_title": "Python Data Pipelines",
                    "text": "ETL fundamentals.",
                    "similarity": 0.8
                }
            ]
        }))
    }

    async fn health(&self) -> Result<(), BackendError> {
        Ok(())
    }
}

/// Fails every call, exercising the degradation paths.
pub struct OfflineBackend;

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

//
// ─── HARNESS ──────────────────────────────────────────────────────────────────
//

struct TestApp {
    profiles: Arc<ProfileService>,
    quizzes: Arc<QuizService>,
    recommendations: Arc<RecommendationService>,
}

impl UiApp for TestApp {
    fn profile_service(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profiles)
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    fn recommendation_service(&self) -> Arc<RecommendationService> {
        Arc::clone(&self.recommendations)
    }
}

#[derive(Props, Clone)]
struct FlowHarnessProps {
    app: Arc<TestApp>,
    handles: FlowTestHandles,
    profile_handles: ProfileTestHandles,
}

impl PartialEq for FlowHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for FlowHarnessProps {}

#[component]
fn FlowHarnessRoot(props: FlowHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    use_context_provider(|| props.profile_handles.clone());
    rsx! { FlowView {} }
}

pub struct FlowHarness {
    pub dom: VirtualDom,
    pub handles: FlowTestHandles,
    pub profile_handles: ProfileTestHandles,
}

impl FlowHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn dispatch(&mut self, event: FlowEvent) {
        self.handles.dispatch().call(event);
        drive_dom(&mut self.dom);
    }

    pub fn upload_file(&mut self, path: String) {
        self.profile_handles.upload().call(path);
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_flow_harness(backend: Arc<dyn AdvisorBackend>) -> FlowHarness {
    let app = Arc::new(TestApp {
        profiles: Arc::new(ProfileService::new(Arc::clone(&backend))),
        quizzes: Arc::new(QuizService::new(Arc::clone(&backend))),
        recommendations: Arc::new(RecommendationService::new(backend)),
    });

    let handles = FlowTestHandles::default();
    let profile_handles = ProfileTestHandles::default();
    let dom = VirtualDom::new_with_props(
        FlowHarnessRoot,
        FlowHarnessProps {
            app,
            handles: handles.clone(),
            profile_handles: profile_handles.clone(),
        },
    );

    FlowHarness {
        dom,
        handles,
        profile_handles,
    }
}
