use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show tasks in this category (exact match)
    #[arg(short, long)]
    category: Option<String>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let tasks = match &args.category {
        Some(category) => tasks_db.filter_by_category(category)?,
        None => tasks_db.fetch_all()?,
    };

    if tasks.is_empty() {
        match args.category {
            Some(category) => msg_info!(Message::NoTasksInCategory(category)),
            None => msg_info!(Message::NoTasksFound),
        }
        return Ok(());
    }

    msg_print!(Message::TasksHeader(tasks.len()), true);
    View::tasks(&tasks)
}
