use std::sync::Arc;

use serde_json::Value;

use advisor_core::{CareerGoal, Course};

use crate::backend::AdvisorBackend;

/// Fetches ranked course recommendations and normalizes the backend's
/// loosely shaped responses into one canonical list.
#[derive(Clone)]
pub struct RecommendationService {
    backend: Arc<dyn AdvisorBackend>,
}

impl RecommendationService {
    #[must_use]
    pub fn new(backend: Arc<dyn AdvisorBackend>) -> Self {
        Self { backend }
    }

    /// Returns the normalized recommendation list, or the fixed sample
    /// list when the request fails so the stage is never empty.
    pub async fn recommend(
        &self,
        profile_text: &str,
        career_goal: CareerGoal,
        analysis: Option<&Value>,
    ) -> Vec<Course> {
        match self
            .backend
            .recommend_courses(profile_text, career_goal, analysis)
            .await
        {
            Ok(payload) => normalize_course_payload(&payload),
            Err(_) => fallback_courses(),
        }
    }
}

/// Maps every known response shape to the canonical course list.
///
/// Accepted shapes: a bare array, `{"courses": [..]}`,
/// `{"data": {"courses": [..]}}` and `{"data": [..]}`. Anything else
/// normalizes to an empty list deterministically.
#[must_use]
pub fn normalize_course_payload(payload: &Value) -> Vec<Course> {
    let list = if payload.is_array() {
        Some(payload)
    } else {
        payload
            .get("courses")
            .filter(|value| value.is_array())
            .or_else(|| {
                payload
                    .get("data")
                    .map(|data| data.get("courses").filter(|v| v.is_array()).unwrap_or(data))
                    .filter(|value| value.is_array())
            })
    };

    list.and_then(|value| serde_json::from_value(value.clone()).ok())
        .unwrap_or_default()
}

/// The fixed 3-course sample list used when recommendation fails.
#[must_use]
pub fn fallback_courses() -> Vec<Course> {
    fn sample(title: &str, description: &str, similarity: f64) -> Course {
        Course {
            title: title.to_string(),
            description: description.to_string(),
            similarity: Some(similarity),
            url: None,
            instructor: None,
            level: None,
            rating: None,
            duration: None,
        }
    }

    vec![
        sample(
            "Python for Beginners",
            "Learn Python programming from scratch. Covers variables, loops, \
             functions, and simple projects. Perfect for building fundamental \
             programming skills.",
            0.95,
        ),
        sample(
            "Web Development with Flask",
            "Build web applications with the Flask framework. Covers routing, \
             templates, databases, and deployment. Learn to create RESTful APIs \
             and handle user authentication.",
            0.88,
        ),
        sample(
            "Advanced Python Programming",
            "Deep dive into advanced Python topics: decorators, generators, \
             context managers, and performance optimization. Master \
             object-oriented programming and design patterns.",
            0.82,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn two_courses() -> Value {
        json!([
            {"course_title": "Rust Basics", "text": "Ownership and borrowing."},
            {"title": "Async Rust", "description": "Futures and executors.", "similarity": 0.7}
        ])
    }

    #[test]
    fn all_known_shapes_normalize_identically() {
        let bare = two_courses();
        let wrapped = json!({ "courses": two_courses() });
        let nested = json!({ "data": { "courses": two_courses() } });
        let data_array = json!({ "data": two_courses() });

        let expected = normalize_course_payload(&bare);
        assert_eq!(expected.len(), 2);
        assert_eq!(expected[0].title, "Rust Basics");
        assert_eq!(expected[1].match_percent(), Some(70));

        assert_eq!(normalize_course_payload(&wrapped), expected);
        assert_eq!(normalize_course_payload(&nested), expected);
        assert_eq!(normalize_course_payload(&data_array), expected);
    }

    #[test]
    fn unknown_shapes_normalize_to_empty() {
        assert!(normalize_course_payload(&json!({"status": "ok"})).is_empty());
        assert!(normalize_course_payload(&json!("courses")).is_empty());
        assert!(normalize_course_payload(&json!({"data": {"status": "ok"}})).is_empty());
        assert!(normalize_course_payload(&json!(null)).is_empty());
    }

    #[test]
    fn fallback_has_three_ranked_samples() {
        let courses = fallback_courses();
        assert_eq!(courses.len(), 3);
        assert!(
            courses
                .windows(2)
                .all(|pair| pair[0].similarity >= pair[1].similarity)
        );
    }
}
