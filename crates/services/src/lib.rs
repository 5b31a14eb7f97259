#![forbid(unsafe_code)]

pub mod backend;
pub mod course_service;
pub mod error;
pub mod profile_service;
pub mod quiz_service;

pub use backend::{AdvisorBackend, BackendConfig, CvAnalysis, HttpBackend, ProfileUpload, SavedProfile};
pub use course_service::{RecommendationService, fallback_courses, normalize_course_payload};
pub use error::{BackendError, ProfileError};
pub use profile_service::{ProfileService, ProfileSubmission};
pub use quiz_service::{QuizService, fallback_questions};
