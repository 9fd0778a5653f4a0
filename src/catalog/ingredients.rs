//! Ingredient keyword rules for grocery aggregation.
//!
//! Each rule is (keyword, category, canonical items). Every rule whose keyword
//! is a substring of a dish name contributes its items to that category, so a
//! single dish can feed multiple categories.

use crate::models::GroceryCategory;

pub const INGREDIENT_RULES: &[(&str, GroceryCategory, &[&str])] = &[
    (
        "Dal",
        GroceryCategory::GrainsPulses,
        &["Toor Dal", "Moong Dal", "Masoor Dal"],
    ),
    ("Paneer", GroceryCategory::DairyProteins, &["Paneer", "Milk"]),
    ("Chicken", GroceryCategory::DairyProteins, &["Chicken"]),
    ("Rice", GroceryCategory::GrainsPulses, &["Basmati Rice"]),
    ("Roti", GroceryCategory::GrainsPulses, &["Wheat Flour"]),
    ("Bhindi", GroceryCategory::Vegetables, &["Bhindi (Okra)"]),
    ("Aloo", GroceryCategory::Vegetables, &["Potatoes"]),
    ("Palak", GroceryCategory::Vegetables, &["Spinach"]),
    ("Gobi", GroceryCategory::Vegetables, &["Cauliflower"]),
    ("Fish", GroceryCategory::DairyProteins, &["Fresh Fish"]),
    ("Egg", GroceryCategory::DairyProteins, &["Eggs"]),
    ("Chole", GroceryCategory::GrainsPulses, &["Chickpeas"]),
    ("Rajma", GroceryCategory::GrainsPulses, &["Kidney Beans"]),
];
