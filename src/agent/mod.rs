pub mod assistant;
pub mod facade;

pub use assistant::{CommandAssistant, PlanningAssistant, MAX_STEPS_ENV};
pub use facade::{parse_assistant_response, MenuGenerator};
