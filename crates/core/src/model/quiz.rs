use serde::Deserialize;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while stepping through a quiz.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("a quiz needs at least one question")]
    NoQuestions,
    #[error("no answer selected for the current question")]
    NoSelection,
    #[error("quiz already completed")]
    Completed,
}

//
// ─── QUESTIONS ────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question as delivered by the backend.
///
/// Options carry their letter label as a prefix ("A. ..."); `answer` is
/// the bare letter of the correct option. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuizQuestion {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            answer: answer.into(),
        }
    }

    /// The letter label of an option ("A. A framework" → "A").
    #[must_use]
    pub fn option_label(option: &str) -> &str {
        option
            .split_once('.')
            .map_or(option, |(label, _)| label)
            .trim()
    }
}

/// Which of the two quizzes is being taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKind {
    Pre,
    Post,
}

impl QuizKind {
    /// Wire value for the `quiz_type` request field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuizKind::Pre => "pre-quiz",
            QuizKind::Post => "post-quiz",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            QuizKind::Pre => "Pre-Quiz — check your current level",
            QuizKind::Post => "Post-Quiz — check what you learned",
        }
    }
}

//
// ─── PROGRESS ─────────────────────────────────────────────────────────────────
//

/// Result of locking in the current answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAdvance {
    /// Moved on to the next question.
    Continue,
    /// That was the last question; the final score is reported exactly once.
    Completed { score: u32, total: u32 },
}

/// Navigation and scoring state for one quiz attempt.
///
/// Each question is scored at most once, at the moment its answer is
/// locked in by `advance`. The last question goes through the same path
/// as every other, so it can never be counted twice. Revisiting an
/// earlier question never rescores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: Option<String>,
    locked: Vec<Option<String>>,
    scored: Vec<bool>,
    score: u32,
    completed: bool,
}

impl QuizProgress {
    /// Starts an attempt over the given questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestions` for an empty quiz.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        let len = questions.len();
        Ok(Self {
            questions,
            current: 0,
            selected: None,
            locked: vec![None; len],
            scored: vec![false; len],
            score: 0,
            completed: false,
        })
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Stages an answer (the option's letter label) for the current question.
    pub fn select(&mut self, answer: impl Into<String>) {
        if !self.completed {
            self.selected = Some(answer.into());
        }
    }

    /// Locks in the staged answer, scoring the question if it has not been
    /// scored before, then advances or completes the attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoSelection` when nothing is staged and
    /// `QuizError::Completed` after the attempt has finished.
    pub fn advance(&mut self) -> Result<QuizAdvance, QuizError> {
        if self.completed {
            return Err(QuizError::Completed);
        }
        let selected = self.selected.take().ok_or(QuizError::NoSelection)?;

        if !self.scored[self.current] {
            self.scored[self.current] = true;
            if selected == self.questions[self.current].answer {
                self.score += 1;
            }
        }
        self.locked[self.current] = Some(selected);

        if self.is_last_question() {
            self.completed = true;
            let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
            return Ok(QuizAdvance::Completed {
                score: self.score,
                total,
            });
        }

        self.current += 1;
        self.selected = self.locked[self.current].clone();
        Ok(QuizAdvance::Continue)
    }

    /// Steps back to the previous question, restoring its locked answer
    /// as the staged selection. No-op on the first question or after
    /// completion.
    pub fn back(&mut self) {
        if self.completed || self.current == 0 {
            return;
        }
        self.current -= 1;
        self.selected = self.locked[self.current].clone();
    }
}
