use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Keyword matched against title, description and category
    keyword: String,
}

pub fn cmd(args: SearchArgs) -> Result<()> {
    let tasks = Tasks::new()?.search(&args.keyword)?;

    if tasks.is_empty() {
        msg_info!(Message::NoMatchingTasks(args.keyword));
        return Ok(());
    }

    msg_print!(Message::TasksHeader(tasks.len()), true);
    View::tasks(&tasks)
}
