use advisor_core::QuizScore;

/// Numbers for the completion screen, computed from whatever scores
/// exist. Missing scores render as 0 rather than failing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionVm {
    pub pre_label: String,
    pub post_label: String,
    pub pre_percent: u32,
    pub post_percent: u32,
    /// Raw score delta, 0 when either quiz was skipped.
    pub improvement: i64,
    pub improvement_label: String,
}

#[must_use]
pub fn map_completion(pre: Option<QuizScore>, post: Option<QuizScore>) -> CompletionVm {
    let improvement = match (pre, post) {
        (Some(pre), Some(post)) => i64::from(post.score) - i64::from(pre.score),
        _ => 0,
    };
    let improvement_label = if improvement > 0 {
        format!("+{improvement} points — great progress!")
    } else {
        "Keep practicing and try the quiz again.".to_string()
    };

    CompletionVm {
        pre_label: score_label(pre),
        post_label: score_label(post),
        pre_percent: pre.map_or(0, QuizScore::percentage),
        post_percent: post.map_or(0, QuizScore::percentage),
        improvement,
        improvement_label,
    }
}

fn score_label(score: Option<QuizScore>) -> String {
    score.map_or_else(
        || "--".to_string(),
        |score| format!("{}/{}", score.score, score.total),
    )
}
