use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, stats::UPCOMING_WINDOW_DAYS, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpcomingArgs {
    /// Size of the due window in days, counted from today inclusive
    #[arg(short, long, default_value_t = UPCOMING_WINDOW_DAYS)]
    days: i64,
}

pub fn cmd(args: UpcomingArgs) -> Result<()> {
    let tasks = Tasks::new()?.due_within_days(args.days)?;

    if tasks.is_empty() {
        msg_info!(Message::NoUpcomingTasks(args.days));
        return Ok(());
    }

    msg_print!(Message::UpcomingHeader(args.days), true);
    View::tasks(&tasks)
}
