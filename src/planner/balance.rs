use std::collections::HashSet;

use crate::catalog::nutrition::{matches_any, DIABETIC_FRIENDLY, HIGH_FIBER, HIGH_PROTEIN};
use crate::models::BalanceReport;
use crate::planner::constants::{
    BALANCED_THRESHOLD, CHECK_POINTS, DIABETIC_COVERAGE, MIN_FIBER_DISHES, MIN_PROTEIN_DISHES,
};

/// Score a set of dishes against the nutrition rubric.
///
/// Four independent checks, each worth 25 points: protein sources, fiber
/// sources, variety, and declared health conditions. The health check only
/// penalizes conditions actually declared; without "diabetes" it passes
/// unconditionally. Keyword matching is case-sensitive substring match
/// against the dish name as authored.
pub fn score_balance(dishes: &[String], health_conditions: &[String]) -> BalanceReport {
    let mut balance_score = 0;
    let mut recommendations = Vec::new();

    let protein_count = dishes
        .iter()
        .filter(|dish| matches_any(dish, HIGH_PROTEIN))
        .count();
    if protein_count >= MIN_PROTEIN_DISHES {
        balance_score += CHECK_POINTS;
    } else {
        recommendations.push("Add more protein sources like Dal, Paneer, or Chicken".to_string());
    }

    let fiber_count = dishes
        .iter()
        .filter(|dish| matches_any(dish, HIGH_FIBER))
        .count();
    if fiber_count >= MIN_FIBER_DISHES {
        balance_score += CHECK_POINTS;
    } else {
        recommendations
            .push("Include more vegetables like Bhindi, Palak, or Mixed Vegetables".to_string());
    }

    let unique: HashSet<&String> = dishes.iter().collect();
    if unique.len() == dishes.len() {
        balance_score += CHECK_POINTS;
    } else {
        recommendations.push("Ensure variety - avoid repeating similar dishes".to_string());
    }

    if health_conditions.iter().any(|c| c == "diabetes") {
        let friendly_count = dishes
            .iter()
            .filter(|dish| matches_any(dish, DIABETIC_FRIENDLY))
            .count();
        // Inclusive boundary: coverage of exactly 0.6 passes.
        if friendly_count as f64 >= dishes.len() as f64 * DIABETIC_COVERAGE {
            balance_score += CHECK_POINTS;
        } else {
            recommendations
                .push("Choose more diabetic-friendly options like Dal and Vegetables".to_string());
        }
    } else {
        balance_score += CHECK_POINTS;
    }

    BalanceReport {
        balance_score,
        recommendations,
        is_balanced: balance_score >= BALANCED_THRESHOLD,
    }
}
