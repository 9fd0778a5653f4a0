use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::Preferences;

/// A 7-day plan: weekday label -> meal slot -> dish name.
///
/// Dish identity is the literal display string; uniqueness across the week is
/// decided by exact string equality. The inner maps use plain string keys so
/// the structure matches the assistant wire shape directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyPlan {
    days: HashMap<String, HashMap<String, String>>,
}

impl WeeklyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, day: &str, slot: &str, dish: impl Into<String>) {
        self.days
            .entry(day.to_string())
            .or_default()
            .insert(slot.to_string(), dish.into());
    }

    pub fn get(&self, day: &str, slot: &str) -> Option<&str> {
        self.days.get(day)?.get(slot).map(String::as_str)
    }

    pub fn day(&self, day: &str) -> Option<&HashMap<String, String>> {
        self.days.get(day)
    }

    /// Every dish in the plan, across all days and slots.
    ///
    /// Order is unspecified; callers treat the result as a bag of names.
    pub fn all_dishes(&self) -> Vec<String> {
        self.days
            .values()
            .flat_map(|slots| slots.values().cloned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Nutritional adequacy report produced by the balance scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Total score, a multiple of 25 in [0, 100].
    pub balance_score: u32,

    /// One entry per failed check.
    pub recommendations: Vec<String>,

    /// True iff balance_score >= 75.
    pub is_balanced: bool,
}

/// Shopping list category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroceryCategory {
    Vegetables,
    GrainsPulses,
    DairyProteins,
    SpicesCondiments,
    Others,
}

impl GroceryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroceryCategory::Vegetables => "vegetables",
            GroceryCategory::GrainsPulses => "grains_pulses",
            GroceryCategory::DairyProteins => "dairy_proteins",
            GroceryCategory::SpicesCondiments => "spices_condiments",
            GroceryCategory::Others => "others",
        }
    }
}

/// Categorized, deduplicated shopping list.
///
/// All five categories are always present; a category with no matches is an
/// empty set, not an omitted key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    pub vegetables: BTreeSet<String>,
    pub grains_pulses: BTreeSet<String>,
    pub dairy_proteins: BTreeSet<String>,
    pub spices_condiments: BTreeSet<String>,
    pub others: BTreeSet<String>,
}

impl GroceryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items_mut(&mut self, category: GroceryCategory) -> &mut BTreeSet<String> {
        match category {
            GroceryCategory::Vegetables => &mut self.vegetables,
            GroceryCategory::GrainsPulses => &mut self.grains_pulses,
            GroceryCategory::DairyProteins => &mut self.dairy_proteins,
            GroceryCategory::SpicesCondiments => &mut self.spices_condiments,
            GroceryCategory::Others => &mut self.others,
        }
    }

    /// Categories in display order, paired with their items.
    pub fn categories(&self) -> [(&'static str, &BTreeSet<String>); 5] {
        [
            ("vegetables", &self.vegetables),
            ("grains_pulses", &self.grains_pulses),
            ("dairy_proteins", &self.dairy_proteins),
            ("spices_condiments", &self.spices_condiments),
            ("others", &self.others),
        ]
    }

    pub fn total_items(&self) -> usize {
        self.categories().iter().map(|(_, items)| items.len()).sum()
    }
}

/// Result of one `generate` call: the plan plus provenance.
///
/// Exactly one of the two tails is populated: `fallback_used` + `message` when
/// the deterministic planner produced the menu, `agent_response` when the
/// assistant did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedMenu {
    pub menu: WeeklyPlan,
    pub preferences_used: Preferences,
    pub generated_at: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_used: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_response: Option<String>,
}

impl GeneratedMenu {
    pub fn fallback(menu: WeeklyPlan, preferences: &Preferences) -> Self {
        Self {
            menu,
            preferences_used: preferences.clone(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            fallback_used: Some(true),
            message: Some("Generated using fallback system".to_string()),
            agent_response: None,
        }
    }

    pub fn assisted(menu: WeeklyPlan, preferences: &Preferences, raw_response: String) -> Self {
        Self {
            menu,
            preferences_used: preferences.clone(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            fallback_used: None,
            message: None,
            agent_response: Some(raw_response),
        }
    }
}
