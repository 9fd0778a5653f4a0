use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{DietType, MealSlot, Preferences, WeeklyPlan};
use crate::planner::constants::{CANDIDATE_POOL_SIZE, WEEKDAYS};
use crate::planner::selector::select_dishes;

/// Placeholder dish used when every preferred cuisine is exhausted for a slot.
pub fn placeholder_dish(slot: MealSlot, diet: DietType) -> String {
    format!("Simple {} ({})", slot.title(), diet.as_str())
}

/// Build a full 7-day plan from preferences.
///
/// Days run Monday to Sunday; within a day the requested slots are filled in
/// preference order. For each slot the preferred cuisines are tried in the
/// user's declared order, and the first cuisine with an unused candidate wins;
/// randomness only breaks ties within that cuisine's pool. A dish placed
/// anywhere in the week is never placed again. When every cuisine is out of
/// unused dishes the slot gets a placeholder, which also enters the used set
/// so an identically named catalog dish could never be picked later.
///
/// This never fails; supply exhaustion is absorbed by the placeholder policy.
pub fn plan_week<R: Rng + ?Sized>(rng: &mut R, prefs: &Preferences) -> WeeklyPlan {
    let mut plan = WeeklyPlan::new();
    let mut used: HashSet<String> = HashSet::new();

    for day in WEEKDAYS {
        for &slot in &prefs.meals {
            let mut placed = false;

            for &cuisine in &prefs.cuisine {
                let candidates = select_dishes(
                    rng,
                    cuisine,
                    slot,
                    prefs.diet_type,
                    CANDIDATE_POOL_SIZE,
                    &used,
                );

                if let Some(dish) = candidates.choose(rng) {
                    plan.set(day, slot.as_str(), dish.clone());
                    used.insert(dish.clone());
                    placed = true;
                    break;
                }
            }

            if !placed {
                let dish = placeholder_dish(slot, prefs.diet_type);
                plan.set(day, slot.as_str(), dish.clone());
                used.insert(dish);
            }
        }
    }

    plan
}
