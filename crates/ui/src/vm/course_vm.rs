use advisor_core::{CareerGoal, Course};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    /// 1-based rank in display order.
    pub rank: usize,
    pub title: String,
    pub description: String,
    pub match_label: Option<String>,
    pub match_percent: Option<u32>,
    pub top_pick: bool,
    pub meta_label: Option<String>,
    pub launch_href: String,
    /// Locally generated rationale shown when the card is expanded.
    pub rationale: Vec<String>,
}

impl From<(usize, &Course, CareerGoal)> for CourseCardVm {
    fn from((index, course, goal): (usize, &Course, CareerGoal)) -> Self {
        let match_percent = course.match_percent();
        let match_label = match_percent.map(|percent| format!("{percent}% match"));
        let meta_label = meta_label(course);

        Self {
            rank: index + 1,
            title: course.title.clone(),
            description: course.description.clone(),
            match_label,
            match_percent,
            top_pick: index == 0,
            meta_label,
            launch_href: course.launch_url().to_string(),
            rationale: rationale_lines(goal),
        }
    }
}

fn meta_label(course: &Course) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(instructor) = course.instructor.as_deref() {
        parts.push(instructor.to_string());
    }
    if let Some(level) = course.level.as_deref() {
        parts.push(level.to_string());
    }
    if let Some(duration) = course.duration.as_deref() {
        parts.push(duration.to_string());
    }
    if let Some(rating) = course.rating {
        parts.push(format!("{rating:.1}★"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

// Static, client-side rationale; the backend does not provide one.
fn rationale_lines(goal: CareerGoal) -> Vec<String> {
    vec![
        format!("Fits your goal of becoming a {goal}"),
        "Fills gaps seen in your quiz answers".to_string(),
        "Matches the experience level in your profile".to_string(),
    ]
}

#[must_use]
pub fn map_course_cards(courses: &[Course], goal: CareerGoal) -> Vec<CourseCardVm> {
    courses
        .iter()
        .enumerate()
        .map(|(index, course)| CourseCardVm::from((index, course, goal)))
        .collect()
}
