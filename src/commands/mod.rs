pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;
pub mod sort;
pub mod stats;
pub mod upcoming;
pub mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List tasks, optionally filtered by category")]
    List(list::ListArgs),
    #[command(about = "Show one task in full")]
    View(view::ViewArgs),
    #[command(about = "Edit a task, keeping unchanged fields")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Search tasks by keyword")]
    Search(search::SearchArgs),
    #[command(about = "List tasks sorted by a field")]
    Sort(sort::SortArgs),
    #[command(about = "Show aggregate task statistics")]
    Stats,
    #[command(about = "List tasks due within the next days")]
    Upcoming(upcoming::UpcomingArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::View(args) => view::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Search(args) => search::cmd(args),
            Commands::Sort(args) => sort::cmd(args),
            Commands::Stats => stats::cmd(),
            Commands::Upcoming(args) => upcoming::cmd(args),
        }
    }
}
