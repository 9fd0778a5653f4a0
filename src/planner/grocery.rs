use crate::catalog::INGREDIENT_RULES;
use crate::models::{GroceryList, WeeklyPlan};

/// Derive a categorized shopping list from a finished weekly plan.
///
/// Every ingredient rule whose keyword occurs in a dish name contributes its
/// canonical items to that rule's category, so one dish can feed several
/// categories. Sets per category make the result deduplicated and
/// order-insensitive; aggregating the same plan twice yields equal lists.
pub fn aggregate_groceries(plan: &WeeklyPlan) -> GroceryList {
    let mut list = GroceryList::new();

    for dish in plan.all_dishes() {
        for (keyword, category, items) in INGREDIENT_RULES {
            if dish.contains(keyword) {
                list.items_mut(*category)
                    .extend(items.iter().map(|item| item.to_string()));
            }
        }
    }

    list
}
