use std::sync::Arc;

use serde_json::json;

use advisor_core::{CareerGoal, FlowEvent, QuizScore};

use super::test_harness::{OfflineBackend, StaticBackend, setup_flow_harness};

fn submitted_profile() -> FlowEvent {
    FlowEvent::ProfileSubmitted {
        profile_text: "Three years of Python and SQL.".to_string(),
        career_goal: CareerGoal::BackendDeveloper,
        analysis: Some(json!({"Skills": ["SQL"]})),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_smoke_renders_start_button() {
    let mut harness = setup_flow_harness(Arc::new(StaticBackend));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Start Your Journey"), "missing CTA in {html}");
    assert!(
        html.contains("AI-Powered Analysis"),
        "missing feature card in {html}"
    );
    // The progress header only appears once the wizard has started.
    assert!(!html.contains("flow-progress"), "unexpected header in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn full_walk_renders_every_stage() {
    let mut harness = setup_flow_harness(Arc::new(StaticBackend));
    harness.rebuild();

    harness.dispatch(FlowEvent::Start);
    let html = harness.render();
    assert!(html.contains("profile-submit"), "missing profile form in {html}");
    assert!(html.contains("flow-progress"), "missing header in {html}");

    harness.dispatch(submitted_profile());
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("What does an index speed up?"),
        "missing quiz question in {html}"
    );

    harness.dispatch(FlowEvent::PreQuizCompleted(QuizScore::new(3, 5)));
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("SQL Deep Dive"), "missing course in {html}");
    assert!(
        html.contains("Pre-quiz result: 3/5 (60%)"),
        "missing performance band in {html}"
    );

    harness.dispatch(FlowEvent::ContinueToPostQuiz);
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("What does an index speed up?"),
        "missing post-quiz question in {html}"
    );

    harness.dispatch(FlowEvent::PostQuizCompleted(QuizScore::new(4, 5)));
    let html = harness.render();
    assert!(html.contains("Congratulations"), "missing completion in {html}");
    assert!(html.contains("60%"), "missing pre percentage in {html}");
    assert!(html.contains("80%"), "missing post percentage in {html}");
    assert!(html.contains("+1 points"), "missing improvement in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_falls_back_when_backend_is_down() {
    let mut harness = setup_flow_harness(Arc::new(OfflineBackend));
    harness.rebuild();
    harness.dispatch(FlowEvent::Start);
    harness.dispatch(submitted_profile());
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("What is Flask in web programming?"),
        "missing fallback question in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn recommendations_smoke_fall_back_when_backend_is_down() {
    let mut harness = setup_flow_harness(Arc::new(OfflineBackend));
    harness.rebuild();
    harness.dispatch(FlowEvent::Start);
    harness.dispatch(submitted_profile());
    harness.dispatch(FlowEvent::PreQuizCompleted(QuizScore::new(2, 5)));
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Python for Beginners"),
        "missing fallback course in {html}"
    );
    assert!(
        html.contains("Web Development with Flask"),
        "missing fallback course in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn retake_returns_to_the_pre_quiz() {
    let mut harness = setup_flow_harness(Arc::new(StaticBackend));
    harness.rebuild();
    harness.dispatch(FlowEvent::Start);
    harness.dispatch(submitted_profile());
    harness.dispatch(FlowEvent::PreQuizCompleted(QuizScore::new(1, 3)));
    harness.drive_async().await;
    assert!(harness.render().contains("recommendations-retake"));

    harness.dispatch(FlowEvent::RetakePreQuiz);
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("What does an index speed up?"),
        "missing re-fetched quiz in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn upload_fills_the_textarea_with_parsed_text() {
    let mut harness = setup_flow_harness(Arc::new(StaticBackend));
    harness.rebuild();
    harness.dispatch(FlowEvent::Start);

    let path = std::env::temp_dir().join("advisor-upload-ok.txt");
    std::fs::write(&path, b"plain text cv").unwrap();

    harness.upload_file(path.to_string_lossy().into_owned());
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Parsed CV text."), "missing parsed text in {html}");
    let _ = std::fs::remove_file(path);
}

#[tokio::test(flavor = "current_thread")]
async fn upload_rejection_shows_the_backend_detail() {
    let mut harness = setup_flow_harness(Arc::new(OfflineBackend));
    harness.rebuild();
    harness.dispatch(FlowEvent::Start);

    let path = std::env::temp_dir().join("advisor-upload-rejected.txt");
    std::fs::write(&path, b"plain text cv").unwrap();

    harness.upload_file(path.to_string_lossy().into_owned());
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Upload failed: offline"),
        "missing rejection detail in {html}"
    );
    let _ = std::fs::remove_file(path);
}

#[tokio::test(flavor = "current_thread")]
async fn upload_with_a_missing_file_reports_unreadable() {
    let mut harness = setup_flow_harness(Arc::new(StaticBackend));
    harness.rebuild();
    harness.dispatch(FlowEvent::Start);

    harness.upload_file("/no/such/file.pdf".to_string());
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("That file could not be read"),
        "missing unreadable message in {html}"
    );
}
