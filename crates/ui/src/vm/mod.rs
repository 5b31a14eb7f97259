mod completion_vm;
mod course_vm;
mod quiz_vm;

pub use completion_vm::{CompletionVm, map_completion};
pub use course_vm::{CourseCardVm, map_course_cards};
pub use quiz_vm::{QuizIntent, QuizVm};
