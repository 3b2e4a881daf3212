use crate::{
    db::tasks::{sort_order, Tasks},
    libs::{messages::Message, view::View},
    msg_info, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SortArgs {
    /// Field to sort by: due_date, priority, status or title
    field: String,
}

pub fn cmd(args: SortArgs) -> Result<()> {
    // Unknown fields are not an error, the full set is shown unsorted.
    if sort_order(&args.field).is_none() {
        msg_warning!(Message::UnknownSortField(args.field.clone()));
    }

    let tasks = Tasks::new()?.sorted_by(&args.field)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::tasks(&tasks)
}
