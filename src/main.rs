use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use menu_planner_rs::agent::{CommandAssistant, MenuGenerator};
use menu_planner_rs::cli::{Cli, Command};
use menu_planner_rs::error::Result;
use menu_planner_rs::interface::{
    collect_preferences, display_balance_report, display_grocery_list, display_weekly_plan,
    prompt_yes_no,
};
use menu_planner_rs::planner::{aggregate_groceries, score_balance};
use menu_planner_rs::state::{
    export_grocery_csv, load_plan, load_preferences, save_generated_menu, save_preferences,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            seed,
            assistant_cmd,
            out,
        } => cmd_plan(&cli.file, seed, assistant_cmd, out),
        Command::Grocery { plan, csv } => cmd_grocery(&plan, csv),
        Command::Balance { plan, conditions } => cmd_balance(&plan, &conditions),
        Command::Preferences => cmd_preferences(&cli.file),
    }
}

/// Generate a weekly menu, then report balance and groceries for it.
fn cmd_plan(
    file_path: &str,
    seed: Option<u64>,
    assistant_cmd: Option<String>,
    out: Option<String>,
) -> Result<()> {
    let path = Path::new(file_path);

    let prefs = if path.exists() {
        let prefs = load_preferences(path)?;
        println!("Loaded preferences from {}", file_path);
        prefs
    } else {
        println!("No preferences file at {}; let's set them up.", file_path);
        let prefs = collect_preferences()?;

        if prompt_yes_no("Save these preferences?", true)? {
            save_preferences(path, &prefs)?;
            println!("Preferences saved to {}", file_path);
        }
        prefs
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let assistant_configured = assistant_cmd.is_some();
    let generator = match assistant_cmd {
        Some(cmd) => MenuGenerator::with_assistant(Box::new(CommandAssistant::new(cmd))),
        None => MenuGenerator::new(),
    };

    let result = generator.generate(&prefs, &mut rng);

    display_weekly_plan(&result.menu, &prefs.meals);

    if result.fallback_used == Some(true) && assistant_configured {
        println!("Note: assistant unavailable or unusable; used the fallback planner.");
        println!();
    }

    let report = score_balance(&result.menu.all_dishes(), &prefs.health_conditions);
    display_balance_report(&report);

    let groceries = aggregate_groceries(&result.menu);
    display_grocery_list(&groceries);

    if let Some(out_path) = out {
        save_generated_menu(&out_path, &result)?;
        println!("Menu saved to {}", out_path);
    }

    Ok(())
}

/// Derive and display the grocery list for a saved plan.
fn cmd_grocery(plan_path: &str, csv: Option<String>) -> Result<()> {
    let plan = load_plan(plan_path)?;
    let groceries = aggregate_groceries(&plan);

    display_grocery_list(&groceries);

    if let Some(csv_path) = csv {
        export_grocery_csv(&csv_path, &groceries)?;
        println!("Grocery list exported to {}", csv_path);
    }

    Ok(())
}

/// Score a saved plan against declared health conditions.
fn cmd_balance(plan_path: &str, conditions: &[String]) -> Result<()> {
    let plan = load_plan(plan_path)?;
    let report = score_balance(&plan.all_dishes(), conditions);

    display_balance_report(&report);
    Ok(())
}

/// Collect preferences interactively and save them.
fn cmd_preferences(file_path: &str) -> Result<()> {
    let prefs = collect_preferences()?;
    save_preferences(file_path, &prefs)?;
    println!("Preferences saved to {}", file_path);
    Ok(())
}
