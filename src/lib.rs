pub mod agent;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{MenuError, Result};
pub use models::{GeneratedMenu, Preferences, WeeklyPlan};
