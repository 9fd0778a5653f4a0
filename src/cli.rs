use clap::{Parser, Subcommand};

/// MenuPlanner — weekly Indian menu planning with balance scoring and grocery lists.
#[derive(Parser, Debug)]
#[command(name = "menu_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the preferences JSON file.
    #[arg(short, long, default_value = "preferences.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a weekly menu with balance and grocery reports.
    Plan {
        /// RNG seed for reproducible plans.
        #[arg(long)]
        seed: Option<u64>,

        /// External assistant command; without it the deterministic planner runs.
        #[arg(long)]
        assistant_cmd: Option<String>,

        /// Write the generated menu JSON to this path.
        #[arg(long)]
        out: Option<String>,
    },

    /// Derive a grocery list from a saved plan.
    Grocery {
        /// Path to a saved plan or generated menu JSON.
        plan: String,

        /// Also export the list as CSV to this path.
        #[arg(long)]
        csv: Option<String>,
    },

    /// Score a saved plan's nutritional balance.
    Balance {
        /// Path to a saved plan or generated menu JSON.
        plan: String,

        /// Health condition to score against, e.g. diabetes. Repeatable.
        #[arg(long = "condition")]
        conditions: Vec<String>,
    },

    /// Collect and save preferences interactively.
    Preferences,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            seed: None,
            assistant_cmd: None,
            out: None,
        }
    }
}
