//! CLI commands for the savings goal

use clap::Subcommand;

use super::report::resolve_today;
use crate::config::settings::Settings;
use crate::currency::currency_symbol;
use crate::display::format_goal;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{parse_iso_date, Money};
use crate::services::GoalService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Set the savings target and its deadline
    Set {
        /// Target balance (e.g. 5000)
        target: String,
        /// Deadline (YYYY-MM-DD)
        date: String,
    },

    /// Show progress toward the goal
    Show {
        /// Evaluate as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Remove the goal
    Clear,
}

/// Handle goal commands
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinanceResult<()> {
    let service = GoalService::new(storage, &settings.user_id);
    let symbol = currency_symbol(&settings.base_currency);

    match cmd {
        GoalCommands::Set { target, date } => {
            let target = Money::parse(&target).map_err(|e| FinanceError::Validation(e.to_string()))?;
            let goal = service.set(target, parse_iso_date(&date)?)?;
            println!(
                "Goal set: {} by {}",
                goal.target.format_with_symbol(&symbol),
                goal.target_date
            );
        }

        GoalCommands::Show { as_of } => {
            let (goal, progress) = service.progress(resolve_today(as_of)?)?;
            print!("{}", format_goal(&goal, &progress, &symbol));
        }

        GoalCommands::Clear => {
            service.clear()?;
            println!("Goal cleared.");
        }
    }

    Ok(())
}
