pub mod dishes;
pub mod ingredients;
pub mod nutrition;

pub use dishes::dishes;
pub use ingredients::INGREDIENT_RULES;
pub use nutrition::{DIABETIC_FRIENDLY, HIGH_FIBER, HIGH_PROTEIN, LOW_OIL};
