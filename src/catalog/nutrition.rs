//! Keyword tables used to classify dish names by substring match.
//!
//! Matching is case-sensitive against the as-authored dish names. This is
//! deliberately naive (a keyword inside an unrelated word still matches) and
//! kept that way for compatibility with existing dish data.

/// Dishes counting toward the protein check.
pub const HIGH_PROTEIN: &[&str] = &["Dal", "Paneer", "Chicken", "Fish", "Egg", "Chana", "Rajma"];

/// Dishes counting toward the fiber check.
pub const HIGH_FIBER: &[&str] = &["Bhindi", "Palak", "Mixed Veg", "Salad", "Gobi", "Begun"];

/// Low-oil preparation markers. Not consumed by any scoring check yet.
pub const LOW_OIL: &[&str] = &["Steamed", "Boiled", "Grilled", "Idli", "Upma"];

/// Dishes counting toward diabetic-friendly coverage.
pub const DIABETIC_FRIENDLY: &[&str] =
    &["Dal", "Vegetables", "Grilled items", "Salad", "Upma", "Poha"];

/// True iff any keyword from `keywords` occurs in `dish`.
pub fn matches_any(dish: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| dish.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_any_substring() {
        assert!(matches_any("Dal Tadka + Roti", HIGH_PROTEIN));
        assert!(matches_any("Palak Paneer + Roti", HIGH_FIBER));
        assert!(!matches_any("Samosa", HIGH_PROTEIN));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!matches_any("dal tadka", HIGH_PROTEIN));
    }
}
