use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{Cuisine, DietType, MealSlot, Preferences};

/// Prompt for the diet type.
pub fn prompt_diet_type() -> Result<DietType> {
    let options: Vec<&str> = DietType::ALL.iter().map(DietType::as_str).collect();

    let selection = Select::new()
        .with_prompt("Diet type")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(DietType::ALL[selection])
}

/// Prompt for cuisines in preference order, with fuzzy matching.
///
/// Cuisines are entered one at a time, first preference first, because the
/// planner tries them in exactly this order. Defaults to north_indian when
/// nothing is entered.
pub fn prompt_cuisines() -> Result<Vec<Cuisine>> {
    let mut cuisines: Vec<Cuisine> = Vec::new();

    println!(
        "Known cuisines: {}",
        Cuisine::ALL
            .iter()
            .map(Cuisine::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a cuisine in preference order (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_lowercase();
        if input.is_empty() {
            break;
        }

        // Exact tag match first, then fuzzy.
        let matched = Cuisine::ALL
            .iter()
            .find(|c| c.as_str() == input)
            .copied()
            .or_else(|| {
                let mut candidates: Vec<(Cuisine, f64)> = Cuisine::ALL
                    .iter()
                    .map(|&c| (c, jaro_winkler(c.as_str(), &input)))
                    .filter(|(_, score)| *score > 0.7)
                    .collect();
                candidates
                    .sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
                candidates.first().map(|(c, _)| *c)
            });

        let Some(cuisine) = matched else {
            println!("No matching cuisine for '{}'", input);
            continue;
        };

        if cuisine.as_str() != input {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", cuisine))
                .default(true)
                .interact()?;
            if !confirm {
                continue;
            }
        }

        if cuisines.contains(&cuisine) {
            println!("Already added: {}", cuisine);
        } else {
            println!("Added: {}", cuisine);
            cuisines.push(cuisine);
        }
    }

    if cuisines.is_empty() {
        println!("No cuisines entered; defaulting to north_indian.");
        cuisines.push(Cuisine::NorthIndian);
    }

    Ok(cuisines)
}

/// Prompt for the meal slots to plan.
pub fn prompt_meals() -> Result<Vec<MealSlot>> {
    let options: Vec<&str> = MealSlot::ALL.iter().map(|s| s.title()).collect();
    let defaults = [true, true, true, false]; // snacks off by default

    let picked = MultiSelect::new()
        .with_prompt("Meals to plan (space to toggle, enter to confirm)")
        .items(&options)
        .defaults(&defaults)
        .interact()?;

    if picked.is_empty() {
        println!("No meals selected; defaulting to breakfast, lunch, dinner.");
        return Ok(vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]);
    }

    Ok(picked.into_iter().map(|i| MealSlot::ALL[i]).collect())
}

/// Prompt for the cooking-time tag.
pub fn prompt_cooking_time() -> Result<String> {
    let options = ["under 30 mins", "30-60 mins", "above 60 mins"];

    let selection = Select::new()
        .with_prompt("How much time do you have for cooking?")
        .items(&options)
        .default(1)
        .interact()?;

    Ok(options[selection].to_string())
}

/// Prompt for health conditions, one per line.
pub fn prompt_health_conditions() -> Result<Vec<String>> {
    let mut conditions = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a health condition, e.g. diabetes (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_lowercase();
        if input.is_empty() {
            break;
        }

        if !conditions.contains(&input) {
            conditions.push(input);
        }
    }

    Ok(conditions)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full preferences record interactively.
pub fn collect_preferences() -> Result<Preferences> {
    let diet_type = prompt_diet_type()?;
    let cuisine = prompt_cuisines()?;
    let meals = prompt_meals()?;
    let cooking_time = prompt_cooking_time()?;
    let health_conditions = prompt_health_conditions()?;

    Ok(Preferences {
        diet_type,
        cuisine,
        meals,
        cooking_time,
        health_conditions,
    })
}
