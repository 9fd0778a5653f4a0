use rand::rngs::StdRng;
use rand::SeedableRng;

use menu_planner_rs::agent::{MenuGenerator, PlanningAssistant};
use menu_planner_rs::error::{MenuError, Result};
use menu_planner_rs::models::{Cuisine, DietType, MealSlot, Preferences};
use menu_planner_rs::planner::WEEKDAYS;

struct AlwaysErrAssistant;

impl PlanningAssistant for AlwaysErrAssistant {
    fn run(&self, _instruction: &str, _max_steps: u32) -> Result<String> {
        Err(MenuError::AssistantFailed(
            "simulated outage".to_string(),
        ))
    }
}

struct ScriptedAssistant {
    response: String,
}

impl PlanningAssistant for ScriptedAssistant {
    fn run(&self, instruction: &str, max_steps: u32) -> Result<String> {
        assert!(instruction.contains("JSON format"));
        assert_eq!(max_steps, 10);
        Ok(self.response.clone())
    }
}

fn sample_prefs() -> Preferences {
    Preferences {
        diet_type: DietType::Veg,
        cuisine: vec![Cuisine::NorthIndian, Cuisine::Gujarati],
        meals: vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner],
        cooking_time: "under 30 mins".to_string(),
        health_conditions: vec!["diabetes".to_string()],
    }
}

fn full_week_json() -> String {
    let days: Vec<String> = WEEKDAYS
        .iter()
        .map(|day| {
            format!(
                "\"{day}\": {{\"breakfast\": \"Poha {day}\", \"lunch\": \"Dal {day}\", \"dinner\": \"Khichdi {day}\"}}"
            )
        })
        .collect();
    format!("{{{}}}", days.join(", "))
}

#[test]
fn test_facade_never_errors_with_raising_assistant() {
    let generator = MenuGenerator::with_assistant(Box::new(AlwaysErrAssistant));
    let mut rng = StdRng::seed_from_u64(1);

    let result = generator.generate(&sample_prefs(), &mut rng);

    assert_eq!(result.fallback_used, Some(true));
    assert_eq!(
        result.message.as_deref(),
        Some("Generated using fallback system")
    );
    assert!(result.agent_response.is_none());

    // The fallback still fills every requested slot.
    for day in WEEKDAYS {
        for slot in ["breakfast", "lunch", "dinner"] {
            assert!(result.menu.get(day, slot).is_some(), "missing {day}/{slot}");
        }
    }
}

#[test]
fn test_facade_accepts_wrapped_assistant_json() {
    let response = format!(
        "Thought: all constraints satisfied.\nFinal Answer: {}\nEnjoy your week!",
        full_week_json()
    );
    let generator = MenuGenerator::with_assistant(Box::new(ScriptedAssistant {
        response: response.clone(),
    }));
    let mut rng = StdRng::seed_from_u64(2);

    let result = generator.generate(&sample_prefs(), &mut rng);

    assert!(result.fallback_used.is_none());
    assert_eq!(result.agent_response.as_deref(), Some(response.as_str()));
    assert_eq!(result.menu.get("Friday", "lunch"), Some("Dal Friday"));
    assert_eq!(result.preferences_used, sample_prefs());
}

#[test]
fn test_facade_falls_back_on_malformed_assistant_output() {
    let cases = [
        "no braces at all",
        "{\"Monday\": ",
        "{\"Monday\": [1, 2, 3]}",
    ];

    for response in cases {
        let generator = MenuGenerator::with_assistant(Box::new(ScriptedAssistant {
            response: response.to_string(),
        }));
        let mut rng = StdRng::seed_from_u64(3);

        let result = generator.generate(&sample_prefs(), &mut rng);
        assert_eq!(
            result.fallback_used,
            Some(true),
            "expected fallback for response: {response}"
        );
        assert!(!result.menu.is_empty());
    }
}

#[test]
fn test_generated_at_is_iso8601() {
    let mut rng = StdRng::seed_from_u64(4);
    let result = MenuGenerator::new().generate(&sample_prefs(), &mut rng);

    assert!(chrono::DateTime::parse_from_rfc3339(&result.generated_at).is_ok());
}
