use advisor_core::{QuizAdvance, QuizError, QuizKind, QuizProgress, QuizQuestion, QuizScore};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Next,
    Back,
}

/// UI-facing wrapper around one quiz attempt.
///
/// Holds the final score after completion so the view can show the result
/// panel before the stage reports it upward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    kind: QuizKind,
    progress: QuizProgress,
    result: Option<QuizScore>,
}

impl QuizVm {
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestions` for an empty quiz.
    pub fn new(kind: QuizKind, questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        Ok(Self {
            kind,
            progress: QuizProgress::new(questions)?,
            result: None,
        })
    }

    /// Applies a UI intent. Intents that are invalid right now (advancing
    /// with no selection, anything after completion) are ignored.
    pub fn apply(&mut self, intent: QuizIntent) {
        match intent {
            QuizIntent::Select(answer) => self.progress.select(answer),
            QuizIntent::Next => {
                if let Ok(QuizAdvance::Completed { score, total }) = self.progress.advance() {
                    self.result = Some(QuizScore::new(score, total));
                }
            }
            QuizIntent::Back => self.progress.back(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    #[must_use]
    pub fn question(&self) -> &QuizQuestion {
        self.progress.current_question()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.progress.selected()
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.progress.selected().is_some() && self.result.is_none()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.progress.current_index() > 0 && self.result.is_none()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.progress.is_last_question()
    }

    /// "Question 2/5" style counter.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!(
            "Question {}/{}",
            self.progress.current_index() + 1,
            self.progress.total()
        )
    }

    /// Progress through the quiz in whole percent, for the progress bar.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        let total = self.progress.total();
        if total == 0 {
            return 0;
        }
        let done = self.progress.current_index() + 1;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            ((done as f64 / total as f64) * 100.0).round() as u32
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<QuizScore> {
        self.result
    }

    /// Encouragement line for the result panel.
    #[must_use]
    pub fn result_remark(&self) -> &'static str {
        match self.result {
            Some(score) if u64::from(score.score) * 2 >= u64::from(score.total) => {
                "Nice work — you have a solid foundation!"
            }
            Some(_) => "Keep going — the recommended courses will help.",
            None => "",
        }
    }
}
