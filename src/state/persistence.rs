use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{GeneratedMenu, GroceryList, Preferences, WeeklyPlan};

/// Load preferences from a JSON file.
pub fn load_preferences<P: AsRef<Path>>(path: P) -> Result<Preferences> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save preferences to a JSON file.
pub fn save_preferences<P: AsRef<Path>>(path: P, prefs: &Preferences) -> Result<()> {
    let json = serde_json::to_string_pretty(prefs)?;
    fs::write(path, json)?;
    Ok(())
}

/// Save a generated menu (plan plus provenance) to a JSON file.
pub fn save_generated_menu<P: AsRef<Path>>(path: P, menu: &GeneratedMenu) -> Result<()> {
    let json = serde_json::to_string_pretty(menu)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a weekly plan from a JSON file.
///
/// Accepts either a bare weekly-plan mapping or a saved generated menu, in
/// which case the plan is read from its `menu` field.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<WeeklyPlan> {
    let content = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    let plan_value = match value.get("menu") {
        Some(menu) => menu.clone(),
        None => value,
    };

    Ok(serde_json::from_value(plan_value)?)
}

/// Export a grocery list as CSV with `category,item` rows.
pub fn export_grocery_csv<P: AsRef<Path>>(path: P, list: &GroceryList) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["category", "item"])?;

    for (category, items) in list.categories() {
        for item in items {
            writer.write_record([category, item])?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cuisine, DietType, MealSlot};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_preferences() -> Preferences {
        Preferences {
            diet_type: DietType::Veg,
            cuisine: vec![Cuisine::NorthIndian, Cuisine::Gujarati],
            meals: vec![MealSlot::Breakfast, MealSlot::Dinner],
            cooking_time: "under 30 mins".to_string(),
            health_conditions: vec!["diabetes".to_string()],
        }
    }

    #[test]
    fn test_preferences_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        let prefs = sample_preferences();

        save_preferences(file.path(), &prefs).unwrap();
        let loaded = load_preferences(file.path()).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_load_plan_bare_mapping() {
        let json = r#"{"Monday": {"lunch": "Dal Rice"}}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let plan = load_plan(file.path()).unwrap();
        assert_eq!(plan.get("Monday", "lunch"), Some("Dal Rice"));
    }

    #[test]
    fn test_load_plan_from_generated_menu() {
        let mut plan = WeeklyPlan::new();
        plan.set("Monday", "lunch", "Dal Rice");
        let menu = GeneratedMenu::fallback(plan, &sample_preferences());

        let file = NamedTempFile::new().unwrap();
        save_generated_menu(file.path(), &menu).unwrap();

        let loaded = load_plan(file.path()).unwrap();
        assert_eq!(loaded.get("Monday", "lunch"), Some("Dal Rice"));
    }

    #[test]
    fn test_export_grocery_csv() {
        let mut list = GroceryList::new();
        list.vegetables.insert("Potatoes".to_string());
        list.grains_pulses.insert("Toor Dal".to_string());

        let file = NamedTempFile::new().unwrap();
        export_grocery_csv(file.path(), &list).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("category,item"));
        assert!(content.contains("vegetables,Potatoes"));
        assert!(content.contains("grains_pulses,Toor Dal"));
    }
}
