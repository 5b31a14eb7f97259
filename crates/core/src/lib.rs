#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    Applied, CareerGoal, CareerGoalError, Course, FlowEvent, QuizAdvance, QuizError, QuizKind,
    QuizProgress, QuizQuestion, QuizScore, SessionState, Step, StepError,
};
