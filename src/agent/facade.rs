use rand::Rng;

use crate::agent::assistant::PlanningAssistant;
use crate::error::{MenuError, Result};
use crate::models::{Cuisine, GeneratedMenu, MealSlot, Preferences, WeeklyPlan};
use crate::planner::constants::MAX_ASSISTANT_STEPS;
use crate::planner::weekly::plan_week;

/// Entry point for menu generation.
///
/// Runs a two-state pipeline: try the configured assistant, fall back to the
/// deterministic weekly planner when the assistant is absent, fails, or
/// returns unparseable output. `generate` never returns an error; the worst
/// case is a fallback plan carrying a visible `fallback_used` marker.
pub struct MenuGenerator {
    assistant: Option<Box<dyn PlanningAssistant>>,
}

impl MenuGenerator {
    /// Generator without an assistant; always takes the fallback path.
    pub fn new() -> Self {
        Self { assistant: None }
    }

    pub fn with_assistant(assistant: Box<dyn PlanningAssistant>) -> Self {
        Self {
            assistant: Some(assistant),
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, prefs: &Preferences, rng: &mut R) -> GeneratedMenu {
        let Some(assistant) = &self.assistant else {
            return self.fallback(prefs, rng);
        };

        let instruction = build_instruction(prefs);
        match assistant.run(&instruction, MAX_ASSISTANT_STEPS) {
            Ok(response) => match parse_assistant_response(&response) {
                Ok(menu) => GeneratedMenu::assisted(menu, prefs, response),
                Err(_) => self.fallback(prefs, rng),
            },
            Err(_) => self.fallback(prefs, rng),
        }
    }

    fn fallback<R: Rng + ?Sized>(&self, prefs: &Preferences, rng: &mut R) -> GeneratedMenu {
        GeneratedMenu::fallback(plan_week(rng, prefs), prefs)
    }
}

impl Default for MenuGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the natural-language instruction embedding preferences and the
/// target JSON shape.
fn build_instruction(prefs: &Preferences) -> String {
    let cuisines = prefs
        .cuisine
        .iter()
        .map(Cuisine::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let meals = prefs
        .meals
        .iter()
        .map(MealSlot::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let conditions = prefs.health_conditions.join(", ");

    let schema = r#"{
    "Monday": {"breakfast": "dish_name", "lunch": "dish_name", "dinner": "dish_name"},
    "Tuesday": {"breakfast": "dish_name", "lunch": "dish_name", "dinner": "dish_name"},
    ... for all 7 days
}"#;

    format!(
        "Create a 7-day meal plan with the following preferences:\n\
         - Diet Type: {diet}\n\
         - Cuisines: {cuisines}\n\
         - Meals: {meals}\n\
         - Cooking Time: {cooking_time}\n\
         - Health Conditions: {conditions}\n\
         \n\
         For each day (Monday to Sunday), suggest: {meals}\n\
         \n\
         Ensure:\n\
         1. No dish repeats in the entire week\n\
         2. Nutritionally balanced meals\n\
         3. Variety in cooking methods and ingredients\n\
         4. Consideration for health conditions\n\
         5. Appropriate for the specified diet type\n\
         \n\
         Return the response in this JSON format:\n{schema}\n",
        diet = prefs.diet_type,
        cooking_time = prefs.cooking_time,
    )
}

/// Extract the weekly plan from free-form assistant text.
///
/// The plan is expected as the substring between the first `{` and the last
/// `}`. Missing braces or invalid JSON are recoverable parse failures that
/// route the caller to the fallback path.
pub fn parse_assistant_response(response: &str) -> Result<WeeklyPlan> {
    let start = response.find('{').ok_or_else(|| {
        MenuError::MalformedAssistantOutput("no opening brace in response".to_string())
    })?;
    let end = response.rfind('}').ok_or_else(|| {
        MenuError::MalformedAssistantOutput("no closing brace in response".to_string())
    })?;

    if end < start {
        return Err(MenuError::MalformedAssistantOutput(
            "braces out of order in response".to_string(),
        ));
    }

    serde_json::from_str(&response[start..=end])
        .map_err(|e| MenuError::MalformedAssistantOutput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DietType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct CannedAssistant(String);

    impl PlanningAssistant for CannedAssistant {
        fn run(&self, _instruction: &str, _max_steps: u32) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    struct FailingAssistant;

    impl PlanningAssistant for FailingAssistant {
        fn run(&self, _instruction: &str, _max_steps: u32) -> Result<String> {
            Err(MenuError::AssistantFailed("boom".to_string()))
        }
    }

    fn prefs() -> Preferences {
        Preferences {
            diet_type: DietType::Veg,
            cuisine: vec![Cuisine::NorthIndian],
            meals: vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner],
            cooking_time: "30-60 mins".to_string(),
            health_conditions: vec![],
        }
    }

    #[test]
    fn test_parse_extracts_embedded_json() {
        let response = "Here is your plan:\n{\"Monday\": {\"lunch\": \"Dal Rice\"}}\nEnjoy!";
        let plan = parse_assistant_response(response).unwrap();
        assert_eq!(plan.get("Monday", "lunch"), Some("Dal Rice"));
    }

    #[test]
    fn test_parse_rejects_braceless_text() {
        let err = parse_assistant_response("no json here").unwrap_err();
        assert!(matches!(err, MenuError::MalformedAssistantOutput(_)));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_assistant_response("{not valid json}").unwrap_err();
        assert!(matches!(err, MenuError::MalformedAssistantOutput(_)));
    }

    #[test]
    fn test_generate_without_assistant_uses_fallback() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = MenuGenerator::new().generate(&prefs(), &mut rng);

        assert_eq!(result.fallback_used, Some(true));
        assert!(result.message.is_some());
        assert!(result.agent_response.is_none());
        assert!(!result.menu.is_empty());
    }

    #[test]
    fn test_generate_with_failing_assistant_falls_back() {
        let mut rng = StdRng::seed_from_u64(12);
        let generator = MenuGenerator::with_assistant(Box::new(FailingAssistant));
        let result = generator.generate(&prefs(), &mut rng);

        assert_eq!(result.fallback_used, Some(true));
        assert!(!result.menu.is_empty());
    }

    #[test]
    fn test_generate_with_good_assistant_keeps_raw_response() {
        let response = "Final Answer: {\"Monday\": {\"breakfast\": \"Poha\"}}".to_string();
        let generator = MenuGenerator::with_assistant(Box::new(CannedAssistant(response.clone())));
        let mut rng = StdRng::seed_from_u64(13);
        let result = generator.generate(&prefs(), &mut rng);

        assert!(result.fallback_used.is_none());
        assert_eq!(result.agent_response.as_deref(), Some(response.as_str()));
        assert_eq!(result.menu.get("Monday", "breakfast"), Some("Poha"));
    }

    #[test]
    fn test_generate_with_garbled_assistant_falls_back() {
        let generator =
            MenuGenerator::with_assistant(Box::new(CannedAssistant("words only".to_string())));
        let mut rng = StdRng::seed_from_u64(14);
        let result = generator.generate(&prefs(), &mut rng);

        assert_eq!(result.fallback_used, Some(true));
    }

    #[test]
    fn test_instruction_embeds_preferences() {
        let instruction = build_instruction(&prefs());
        assert!(instruction.contains("veg"));
        assert!(instruction.contains("north_indian"));
        assert!(instruction.contains("breakfast, lunch, dinner"));
        assert!(instruction.contains("30-60 mins"));
        assert!(instruction.contains("JSON format"));
    }
}
