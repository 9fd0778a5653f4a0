mod persistence;

pub use persistence::{
    export_grocery_csv, load_plan, load_preferences, save_generated_menu, save_preferences,
};
