use std::fmt;

use serde::{Deserialize, Serialize};

/// Dietary preference governing which catalog pools are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    Veg,
    NonVeg,
    Vegan,
}

impl DietType {
    pub const ALL: [DietType; 3] = [DietType::Veg, DietType::NonVeg, DietType::Vegan];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Veg => "veg",
            DietType::NonVeg => "non_veg",
            DietType::Vegan => "vegan",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regional cuisine tag. The catalog is keyed by these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cuisine {
    NorthIndian,
    SouthIndian,
    Gujarati,
    Marathi,
    Bengali,
    Punjabi,
}

impl Cuisine {
    pub const ALL: [Cuisine; 6] = [
        Cuisine::NorthIndian,
        Cuisine::SouthIndian,
        Cuisine::Gujarati,
        Cuisine::Marathi,
        Cuisine::Bengali,
        Cuisine::Punjabi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::NorthIndian => "north_indian",
            Cuisine::SouthIndian => "south_indian",
            Cuisine::Gujarati => "gujarati",
            Cuisine::Marathi => "marathi",
            Cuisine::Bengali => "bengali",
            Cuisine::Punjabi => "punjabi",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four meal slots a day can be planned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snacks",
        }
    }

    /// Title-cased label, used in placeholder dish names and rendering.
    pub fn title(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User preferences supplied per planning request.
///
/// `cuisine` is ordered first-preference-first; the planner tries cuisines in
/// exactly this order. `cooking_time` is a descriptive tag carried through to
/// the assistant instruction but not consulted by the planning algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub diet_type: DietType,
    pub cuisine: Vec<Cuisine>,
    pub meals: Vec<MealSlot>,
    pub cooking_time: String,
    pub health_conditions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_tags_match_wire_names() {
        assert_eq!(
            serde_json::to_string(&DietType::NonVeg).unwrap(),
            "\"non_veg\""
        );
        assert_eq!(
            serde_json::to_string(&Cuisine::NorthIndian).unwrap(),
            "\"north_indian\""
        );
        assert_eq!(
            serde_json::to_string(&MealSlot::Snacks).unwrap(),
            "\"snacks\""
        );
    }

    #[test]
    fn test_preferences_roundtrip() {
        let prefs = Preferences {
            diet_type: DietType::Veg,
            cuisine: vec![Cuisine::Punjabi, Cuisine::Gujarati],
            meals: vec![MealSlot::Breakfast, MealSlot::Dinner],
            cooking_time: "30-60 mins".to_string(),
            health_conditions: vec!["diabetes".to_string()],
        };

        let json = serde_json::to_string(&prefs).unwrap();
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn test_slot_titles() {
        assert_eq!(MealSlot::Breakfast.title(), "Breakfast");
        assert_eq!(MealSlot::Snacks.title(), "Snacks");
    }
}
