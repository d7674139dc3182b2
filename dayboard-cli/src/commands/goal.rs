use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use dayboard_core::Board;
use dayboard_core::model::{Goal, GoalCategory};
use owo_colors::OwoColorize;

use crate::input;
use crate::render::Render;

#[derive(Subcommand)]
pub enum Action {
    /// Start tracking a goal
    Add {
        title: String,

        #[arg(short, long, value_enum, default_value = "personal")]
        category: CategoryArg,

        /// Optional due date
        #[arg(long)]
        due: Option<String>,
    },

    /// Shift a goal's progress by a delta (clamped to 0–100)
    Progress {
        id: String,

        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },

    /// Stop tracking a goal
    Rm { id: String },

    /// List goals with their progress bars
    List,
}

pub fn run(board: &mut Board, action: Action) -> Result<()> {
    match action {
        Action::Add { title, category, due } => {
            let mut goal = Goal::new(title, category.into());
            goal.due_date = due.as_deref().map(input::parse_date).transpose()?;

            let summary = format!("  Tracking: {}", goal.title);
            board.create_goal(goal);
            println!("{}", summary.green());
        }

        Action::Progress { id, delta } => match board.adjust_goal_progress(&id, delta) {
            Some(100) => println!("{}", "  Done! 100%".green()),
            Some(progress) => println!("  Now at {progress}%"),
            None => println!("No goal with id \"{id}\""),
        },

        Action::Rm { id } => {
            if board.delete_goal(&id) {
                println!("{}", "  Removed goal".red());
            } else {
                println!("No goal with id \"{id}\"");
            }
        }

        Action::List => {
            if board.goals.is_empty() {
                println!("{}", "No goals".dimmed());
                return Ok(());
            }
            for goal in &board.goals {
                println!("{} {}", goal.render(), goal.id.dimmed());
            }
        }
    }

    Ok(())
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Personal,
    Work,
    Health,
    Learning,
}

impl From<CategoryArg> for GoalCategory {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Personal => GoalCategory::Personal,
            CategoryArg::Work => GoalCategory::Work,
            CategoryArg::Health => GoalCategory::Health,
            CategoryArg::Learning => GoalCategory::Learning,
        }
    }
}
