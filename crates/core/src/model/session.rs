use serde_json::Value;

use crate::model::{CareerGoal, Step};

//
// ─── QUIZ SCORE ───────────────────────────────────────────────────────────────
//

/// Final result of one quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub score: u32,
    pub total: u32,
}

impl QuizScore {
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        Self { score, total }
    }

    /// Rounded percentage, 0 when the quiz had no questions.
    #[must_use]
    pub fn percentage(self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let ratio = f64::from(self.score) / f64::from(self.total);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (ratio * 100.0).round() as u32
        }
    }
}

//
// ─── FLOW EVENTS ──────────────────────────────────────────────────────────────
//

/// User-driven events that move the wizard between steps.
///
/// These are the only way `SessionState` is mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    /// Welcome → ProfileInput.
    Start,
    /// ProfileInput → PreQuiz, carrying everything the later stages need.
    ProfileSubmitted {
        profile_text: String,
        career_goal: CareerGoal,
        analysis: Option<Value>,
    },
    /// PreQuiz → Recommendations.
    PreQuizCompleted(QuizScore),
    /// Recommendations → PreQuiz. The previous score is kept until the
    /// retake completes and overwrites it.
    RetakePreQuiz,
    /// Recommendations → PostQuiz.
    ContinueToPostQuiz,
    /// PostQuiz → Completion.
    PostQuizCompleted(QuizScore),
    /// Completion → Recommendations, re-entering with existing state.
    ViewCoursesAgain,
    /// Completion → Welcome, resetting all session state.
    Restart,
}

/// Whether a dispatched event changed the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Accepted,
    /// The event is not valid in the current step; the state is untouched.
    Ignored,
}

//
// ─── SESSION STATE ────────────────────────────────────────────────────────────
//

/// In-memory record carried across wizard stages for one session.
///
/// Lives only for the process lifetime; there is no persistence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    step: Step,
    profile_text: String,
    career_goal: CareerGoal,
    profile_analysis: Option<Value>,
    pre_quiz_score: Option<QuizScore>,
    post_quiz_score: Option<QuizScore>,
}

impl SessionState {
    /// Applies a flow event, advancing the wizard if the event is valid
    /// in the current step.
    ///
    /// Invalid events are no-ops and report `Applied::Ignored`; nothing
    /// outside this transition table can change the session.
    pub fn apply(&mut self, event: FlowEvent) -> Applied {
        match (self.step, event) {
            (Step::Welcome, FlowEvent::Start) => {
                self.step = Step::ProfileInput;
            }
            (
                Step::ProfileInput,
                FlowEvent::ProfileSubmitted {
                    profile_text,
                    career_goal,
                    analysis,
                },
            ) => {
                self.profile_text = profile_text;
                self.career_goal = career_goal;
                self.profile_analysis = analysis;
                self.step = Step::PreQuiz;
            }
            (Step::PreQuiz, FlowEvent::PreQuizCompleted(score)) => {
                self.pre_quiz_score = Some(score);
                self.step = Step::Recommendations;
            }
            (Step::Recommendations, FlowEvent::RetakePreQuiz) => {
                self.step = Step::PreQuiz;
            }
            (Step::Recommendations, FlowEvent::ContinueToPostQuiz) => {
                self.step = Step::PostQuiz;
            }
            (Step::PostQuiz, FlowEvent::PostQuizCompleted(score)) => {
                self.post_quiz_score = Some(score);
                self.step = Step::Completion;
            }
            (Step::Completion, FlowEvent::ViewCoursesAgain) => {
                self.step = Step::Recommendations;
            }
            (Step::Completion, FlowEvent::Restart) => {
                *self = Self::default();
            }
            _ => return Applied::Ignored,
        }
        Applied::Accepted
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn profile_text(&self) -> &str {
        &self.profile_text
    }

    #[must_use]
    pub fn career_goal(&self) -> CareerGoal {
        self.career_goal
    }

    /// Opaque analysis payload from the backend, forwarded as-is to the
    /// recommendation endpoint.
    #[must_use]
    pub fn profile_analysis(&self) -> Option<&Value> {
        self.profile_analysis.as_ref()
    }

    #[must_use]
    pub fn pre_quiz_score(&self) -> Option<QuizScore> {
        self.pre_quiz_score
    }

    #[must_use]
    pub fn post_quiz_score(&self) -> Option<QuizScore> {
        self.post_quiz_score
    }
}
