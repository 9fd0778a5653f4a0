pub mod balance;
pub mod constants;
pub mod grocery;
pub mod selector;
pub mod weekly;

pub use balance::score_balance;
pub use constants::*;
pub use grocery::aggregate_groceries;
pub use selector::select_dishes;
pub use weekly::{placeholder_dish, plan_week};
