mod plan;
mod preferences;

pub use plan::{BalanceReport, GeneratedMenu, GroceryCategory, GroceryList, WeeklyPlan};
pub use preferences::{Cuisine, DietType, MealSlot, Preferences};
