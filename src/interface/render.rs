use crate::models::{BalanceReport, GroceryList, MealSlot, WeeklyPlan};
use crate::planner::constants::WEEKDAYS;

/// Display a weekly plan, one block per day in weekday order.
pub fn display_weekly_plan(plan: &WeeklyPlan, meals: &[MealSlot]) {
    if plan.is_empty() {
        println!("No plan generated.");
        return;
    }

    let slot_width = meals
        .iter()
        .map(|slot| slot.title().len())
        .max()
        .unwrap_or(9);

    println!();
    println!("=== Weekly Menu ===");
    println!();

    for day in WEEKDAYS {
        println!("{day}");
        for slot in meals {
            let dish = plan.get(day, slot.as_str()).unwrap_or("-");
            println!("  {:<width$}  {}", slot.title(), dish, width = slot_width);
        }
        println!();
    }
}

/// Display a balance report with its recommendations.
pub fn display_balance_report(report: &BalanceReport) {
    println!("--- Nutritional Balance ---");
    println!(
        "Score: {}/100 ({})",
        report.balance_score,
        if report.is_balanced {
            "balanced"
        } else {
            "needs attention"
        }
    );

    for recommendation in &report.recommendations {
        println!("  - {}", recommendation);
    }
    println!();
}

/// Display a grocery list grouped by category.
pub fn display_grocery_list(list: &GroceryList) {
    println!("--- Grocery List ({} items) ---", list.total_items());

    for (category, items) in list.categories() {
        if items.is_empty() {
            println!("{}: (none)", category);
            continue;
        }

        println!("{}:", category);
        for item in items {
            println!("  - {}", item);
        }
    }
    println!();
}
