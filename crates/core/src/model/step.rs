use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur when parsing a wizard step.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("invalid step index: {0}")]
    InvalidIndex(u8),
}

//
// ─── STEP ─────────────────────────────────────────────────────────────────────
//

/// The six screens of the learning wizard.
///
/// Exactly one step is active at a time. The numbering matches the wire
/// order of the flow, with the post-quiz deliberately placed after the
/// completion screen because it was added later in the journey:
/// Welcome → ProfileInput → PreQuiz → Recommendations → (PostQuiz) → Completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    /// Landing screen with a start action.
    #[default]
    Welcome,
    /// Profile paste/upload plus career-goal selection.
    ProfileInput,
    /// The baseline quiz taken before studying.
    PreQuiz,
    /// Ranked course recommendations.
    Recommendations,
    /// Score comparison and restart.
    Completion,
    /// The follow-up quiz taken after reviewing the courses.
    PostQuiz,
}

impl Step {
    /// Converts a numeric step index (0-5) to a `Step`.
    ///
    /// # Errors
    ///
    /// Returns `StepError::InvalidIndex` if the value is not in the range 0-5.
    pub fn from_index(value: u8) -> Result<Self, StepError> {
        match value {
            0 => Ok(Self::Welcome),
            1 => Ok(Self::ProfileInput),
            2 => Ok(Self::PreQuiz),
            3 => Ok(Self::Recommendations),
            4 => Ok(Self::Completion),
            5 => Ok(Self::PostQuiz),
            _ => Err(StepError::InvalidIndex(value)),
        }
    }

    /// Returns the numeric index of this step.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Step::Welcome => 0,
            Step::ProfileInput => 1,
            Step::PreQuiz => 2,
            Step::Recommendations => 3,
            Step::Completion => 4,
            Step::PostQuiz => 5,
        }
    }

    /// Short label for the progress header.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Step::Welcome => "Welcome",
            Step::ProfileInput => "Profile",
            Step::PreQuiz => "Pre-Quiz",
            Step::Recommendations => "Courses",
            Step::Completion => "Summary",
            Step::PostQuiz => "Post-Quiz",
        }
    }
}
