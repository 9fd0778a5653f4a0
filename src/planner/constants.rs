/// Weekday labels in planning order.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Candidate pool size requested per (day, slot, cuisine) attempt.
pub const CANDIDATE_POOL_SIZE: usize = 20;

/// Points awarded per passed balance check.
pub const CHECK_POINTS: u32 = 25;

/// Minimum protein-keyword dishes for the protein check.
pub const MIN_PROTEIN_DISHES: usize = 2;

/// Minimum fiber-keyword dishes for the fiber check.
pub const MIN_FIBER_DISHES: usize = 3;

/// Required diabetic-friendly coverage when diabetes is declared (inclusive).
pub const DIABETIC_COVERAGE: f64 = 0.6;

/// Score at or above which a plan counts as balanced.
pub const BALANCED_THRESHOLD: u32 = 75;

/// Internal reasoning/tool-call step budget for the planning assistant.
pub const MAX_ASSISTANT_STEPS: u32 = 10;

/// Wall-clock deadline for one assistant invocation.
pub const ASSISTANT_TIMEOUT_SECS: u64 = 60;
