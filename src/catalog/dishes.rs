//! Static dish taxonomy keyed by (cuisine, meal slot, diet type).
//!
//! The catalog is read-only; combinations without entries (e.g. gujarati
//! non-veg) return an empty slice rather than an error. No entry contains
//! duplicate dish names.

use crate::models::{Cuisine, DietType, MealSlot};

/// Look up the dish pool for a (cuisine, slot, diet) combination.
pub fn dishes(cuisine: Cuisine, slot: MealSlot, diet: DietType) -> &'static [&'static str] {
    use Cuisine::*;
    use DietType::*;
    use MealSlot::*;

    match (cuisine, slot, diet) {
        (NorthIndian, Breakfast, Veg) => &[
            "Aloo Paratha",
            "Chole Bhature",
            "Poha",
            "Upma",
            "Idli Sambhar",
            "Masala Dosa",
        ],
        (NorthIndian, Breakfast, NonVeg) => &["Egg Paratha", "Keema Paratha", "Chicken Sandwich"],
        (NorthIndian, Breakfast, Vegan) => &["Poha", "Upma", "Vegetable Dalia", "Ragi Dosa"],
        (NorthIndian, Lunch, Veg) => &[
            "Dal Tadka + Roti",
            "Rajma + Rice",
            "Chole + Rice",
            "Palak Paneer + Roti",
            "Bhindi Masala + Roti",
            "Aloo Gobi + Roti",
            "Mix Veg + Roti",
        ],
        (NorthIndian, Lunch, NonVeg) => &[
            "Chicken Curry + Rice",
            "Mutton Curry + Roti",
            "Fish Curry + Rice",
        ],
        (NorthIndian, Lunch, Vegan) => &[
            "Dal Tadka + Roti",
            "Chana Masala + Rice",
            "Vegetable Curry + Roti",
        ],
        (NorthIndian, Dinner, Veg) => &[
            "Paneer Butter Masala + Roti",
            "Dal Makhani + Rice",
            "Stuffed Paratha + Raita",
        ],
        (NorthIndian, Dinner, NonVeg) => {
            &["Butter Chicken + Naan", "Lamb Biryani", "Fish Fry + Rice"]
        }
        (NorthIndian, Dinner, Vegan) => &[
            "Mixed Dal + Roti",
            "Vegetable Biryani",
            "Stuffed Roti + Pickle",
        ],
        (NorthIndian, Snacks, Veg) => &["Samosa", "Pakora", "Dhokla", "Kachori", "Sandwich"],
        (NorthIndian, Snacks, NonVeg) => &["Chicken Tikka", "Seekh Kebab", "Egg Roll"],
        (NorthIndian, Snacks, Vegan) => &["Bhel Puri", "Roasted Chana", "Fruit Chaat"],

        (SouthIndian, Breakfast, Veg) => &[
            "Idli Sambhar",
            "Masala Dosa",
            "Uttapam",
            "Rava Upma",
            "Medu Vada",
        ],
        (SouthIndian, Breakfast, NonVeg) => &["Egg Dosa", "Chicken 65"],
        (SouthIndian, Breakfast, Vegan) => &["Plain Dosa", "Coconut Rice", "Lemon Rice"],
        (SouthIndian, Lunch, Veg) => &[
            "Sambhar Rice",
            "Rasam Rice",
            "Curd Rice",
            "Vegetable Curry + Rice",
        ],
        (SouthIndian, Lunch, NonVeg) => &[
            "Fish Curry + Rice",
            "Chicken Curry + Rice",
            "Mutton Biryani",
        ],
        (SouthIndian, Lunch, Vegan) => &[
            "Sambhar Rice",
            "Tamarind Rice",
            "Coconut Chutney + Rice",
        ],
        (SouthIndian, Dinner, Veg) => &["Paneer Masala + Rice", "Mixed Vegetable Curry + Rice"],
        (SouthIndian, Dinner, NonVeg) => &["Chicken Biryani", "Fish Fry + Rice"],
        (SouthIndian, Dinner, Vegan) => &["Vegetable Biryani", "Dal Rice"],
        (SouthIndian, Snacks, Veg) => &["Murukku", "Banana Chips", "Coconut Laddu"],
        (SouthIndian, Snacks, NonVeg) => &["Chicken 65", "Fish Fry"],
        (SouthIndian, Snacks, Vegan) => &["Roasted Groundnuts", "Coconut Barfi"],

        (Gujarati, Breakfast, Veg) => &["Dhokla", "Khandvi", "Thepla", "Fafda Jalebi", "Poha"],
        (Gujarati, Breakfast, Vegan) => &["Plain Thepla", "Dhokla", "Khakhra"],
        (Gujarati, Lunch, Veg) => &[
            "Dal Dhokli",
            "Undhiyu",
            "Gujarati Kadhi + Rice",
            "Bhindi Shaak + Rotli",
        ],
        (Gujarati, Lunch, Vegan) => &["Mixed Dal + Rotli", "Vegetable Curry + Rice"],
        (Gujarati, Dinner, Veg) => &["Gujarati Thali", "Khichdi Kadhi", "Stuffed Paratha"],
        (Gujarati, Dinner, Vegan) => &["Simple Khichdi", "Vegetable Curry + Rotli"],
        (Gujarati, Snacks, Veg) => &["Dhokla", "Kachori", "Chakri", "Sev Mamra"],
        (Gujarati, Snacks, Vegan) => &["Khakhra", "Roasted Chana"],

        (Marathi, Breakfast, Veg) => &[
            "Poha",
            "Upma",
            "Misal Pav",
            "Sabudana Khichdi",
            "Thalipeeth",
        ],
        (Marathi, Breakfast, Vegan) => &["Poha", "Upma", "Sabudana Khichdi"],
        (Marathi, Lunch, Veg) => &["Dal Rice", "Bharleli Vangi", "Alu Vadi", "Zunka Bhakar"],
        (Marathi, Lunch, Vegan) => &["Dal Rice", "Vegetable Curry + Rice"],
        (Marathi, Dinner, Veg) => &["Puran Poli", "Bhakri + Pitla", "Vegetable Curry + Rice"],
        (Marathi, Dinner, Vegan) => &["Simple Dal + Rice", "Vegetable Curry + Bhakri"],
        (Marathi, Snacks, Veg) => &["Vada Pav", "Bhel Puri", "Kothimbir Vadi"],
        (Marathi, Snacks, Vegan) => &["Bhel Puri", "Roasted Chana"],

        (Bengali, Breakfast, Veg) => &["Luchi Aloo Dum", "Poha", "Cholar Dal + Luchi"],
        (Bengali, Breakfast, NonVeg) => &["Fish Curry + Rice", "Egg Curry + Luchi"],
        (Bengali, Breakfast, Vegan) => &["Poha", "Aloo Dum + Rice"],
        (Bengali, Lunch, Veg) => &["Dal Rice", "Aloo Posto", "Begun Bhaja + Rice"],
        (Bengali, Lunch, NonVeg) => &[
            "Fish Curry + Rice",
            "Chicken Curry + Rice",
            "Prawn Malai Curry",
        ],
        (Bengali, Lunch, Vegan) => &["Dal Rice", "Aloo Posto + Rice"],
        (Bengali, Dinner, Veg) => &["Khichuri", "Mixed Vegetable + Rice"],
        (Bengali, Dinner, NonVeg) => &["Fish Curry + Rice", "Mutton Curry + Rice"],
        (Bengali, Dinner, Vegan) => &["Simple Khichuri", "Dal Rice"],
        (Bengali, Snacks, Veg) => &["Jhal Muri", "Beguni", "Ghugni"],
        (Bengali, Snacks, NonVeg) => &["Fish Fry", "Chicken Cutlet"],
        (Bengali, Snacks, Vegan) => &["Jhal Muri", "Roasted Chana"],

        (Punjabi, Breakfast, Veg) => &[
            "Chole Bhature",
            "Aloo Paratha",
            "Sarson da Saag + Makki Roti",
        ],
        (Punjabi, Breakfast, NonVeg) => &["Keema Paratha", "Egg Paratha"],
        (Punjabi, Breakfast, Vegan) => &["Plain Paratha", "Sarson da Saag + Makki Roti"],
        (Punjabi, Lunch, Veg) => &[
            "Dal Makhani + Naan",
            "Rajma + Rice",
            "Palak Paneer + Roti",
        ],
        (Punjabi, Lunch, NonVeg) => &["Butter Chicken + Naan", "Mutton Curry + Rice"],
        (Punjabi, Lunch, Vegan) => &["Chana Masala + Rice", "Mixed Dal + Roti"],
        (Punjabi, Dinner, Veg) => &["Paneer Tikka Masala + Naan", "Dal Tadka + Rice"],
        (Punjabi, Dinner, NonVeg) => &["Chicken Tikka Masala + Naan", "Lamb Curry + Rice"],
        (Punjabi, Dinner, Vegan) => &["Mixed Vegetable + Roti", "Dal Rice"],
        (Punjabi, Snacks, Veg) => &["Samosa", "Pakora", "Kulcha"],
        (Punjabi, Snacks, NonVeg) => &["Chicken Tikka", "Seekh Kebab"],
        (Punjabi, Snacks, Vegan) => &["Chana Chaat", "Fruit Chaat"],

        // Gujarati and marathi kitchens carry no non-veg entries.
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_missing_combination_is_empty_pool() {
        assert!(dishes(Cuisine::Gujarati, MealSlot::Lunch, DietType::NonVeg).is_empty());
        assert!(dishes(Cuisine::Marathi, MealSlot::Snacks, DietType::NonVeg).is_empty());
    }

    #[test]
    fn test_known_pools_populated() {
        assert_eq!(
            dishes(Cuisine::Gujarati, MealSlot::Dinner, DietType::Vegan),
            &["Simple Khichdi", "Vegetable Curry + Rotli"]
        );
        assert_eq!(
            dishes(Cuisine::NorthIndian, MealSlot::Lunch, DietType::Veg).len(),
            7
        );
    }

    #[test]
    fn test_no_entry_contains_duplicates() {
        for cuisine in Cuisine::ALL {
            for slot in MealSlot::ALL {
                for diet in DietType::ALL {
                    let pool = dishes(cuisine, slot, diet);
                    let unique: HashSet<_> = pool.iter().collect();
                    assert_eq!(
                        unique.len(),
                        pool.len(),
                        "duplicate dish in ({cuisine}, {slot}, {diet})"
                    );
                }
            }
        }
    }
}
