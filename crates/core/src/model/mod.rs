mod career;
mod course;
mod quiz;
mod session;
mod step;

pub use career::{CareerGoal, CareerGoalError};
pub use course::Course;
pub use quiz::{QuizAdvance, QuizError, QuizKind, QuizProgress, QuizQuestion};
pub use session::{Applied, FlowEvent, QuizScore, SessionState};
pub use step::{Step, StepError};
