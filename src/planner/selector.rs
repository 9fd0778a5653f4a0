use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog;
use crate::models::{Cuisine, DietType, MealSlot};

/// Draw dishes from the catalog under a count constraint and an exclusion set.
///
/// Filters the (cuisine, slot, diet) pool by `excluded`, then returns a
/// uniform random sample without replacement of size `min(count, pool_len)`.
/// An empty filtered pool yields an empty vec, never an error. Pure given the
/// catalog and the RNG state.
pub fn select_dishes<R: Rng + ?Sized>(
    rng: &mut R,
    cuisine: Cuisine,
    slot: MealSlot,
    diet: DietType,
    count: usize,
    excluded: &HashSet<String>,
) -> Vec<String> {
    let pool: Vec<&str> = catalog::dishes(cuisine, slot, diet)
        .iter()
        .copied()
        .filter(|dish| !excluded.contains(*dish))
        .collect();

    pool.choose_multiple(rng, count.min(pool.len()))
        .map(|dish| dish.to_string())
        .collect()
}
