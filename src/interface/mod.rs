pub mod prompts;
pub mod render;

pub use prompts::{
    collect_preferences, prompt_cooking_time, prompt_cuisines, prompt_diet_type,
    prompt_health_conditions, prompt_meals, prompt_yes_no,
};
pub use render::{display_balance_report, display_grocery_list, display_weekly_plan};
