mod completion;
mod flow;
mod profile;
mod quiz;
mod recommendations;
mod state;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use completion::CompletionStage;
pub use flow::FlowView;
pub use profile::ProfileStage;
pub use quiz::QuizStage;
pub use recommendations::RecommendationStage;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use welcome::WelcomeStage;
