use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for parsing a career goal from its wire form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CareerGoalError {
    #[error("unknown career goal: {0}")]
    Unknown(String),
}

/// The fixed set of career goals a learner can pick from.
///
/// The wire form (`as_str`) is what the backend expects in
/// `career_goal` request fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CareerGoal {
    #[default]
    BackendDeveloper,
    FrontendDeveloper,
    FullstackDeveloper,
    DataScientist,
    MachineLearningEngineer,
    DevOpsEngineer,
    MobileDeveloper,
    SoftwareEngineer,
    DataEngineer,
    CloudEngineer,
}

impl CareerGoal {
    /// Every goal, in selector display order.
    pub const ALL: [CareerGoal; 10] = [
        CareerGoal::BackendDeveloper,
        CareerGoal::FrontendDeveloper,
        CareerGoal::FullstackDeveloper,
        CareerGoal::DataScientist,
        CareerGoal::MachineLearningEngineer,
        CareerGoal::DevOpsEngineer,
        CareerGoal::MobileDeveloper,
        CareerGoal::SoftwareEngineer,
        CareerGoal::DataEngineer,
        CareerGoal::CloudEngineer,
    ];

    /// Display and wire form of the goal.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CareerGoal::BackendDeveloper => "Backend Developer",
            CareerGoal::FrontendDeveloper => "Frontend Developer",
            CareerGoal::FullstackDeveloper => "Fullstack Developer",
            CareerGoal::DataScientist => "Data Scientist",
            CareerGoal::MachineLearningEngineer => "Machine Learning Engineer",
            CareerGoal::DevOpsEngineer => "DevOps Engineer",
            CareerGoal::MobileDeveloper => "Mobile Developer",
            CareerGoal::SoftwareEngineer => "Software Engineer",
            CareerGoal::DataEngineer => "Data Engineer",
            CareerGoal::CloudEngineer => "Cloud Engineer",
        }
    }
}

impl fmt::Display for CareerGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CareerGoal {
    type Err = CareerGoalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == value)
            .ok_or_else(|| CareerGoalError::Unknown(value.to_string()))
    }
}
