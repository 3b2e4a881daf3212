use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, view::View},
    msg_error,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Id of the task to show
    id: i64,
}

pub fn cmd(args: ViewArgs) -> Result<()> {
    match Tasks::new()?.get_by_id(args.id)? {
        Some(task) => View::task(&task),
        None => {
            msg_error!(Message::TaskNotFound(args.id));
            Ok(())
        }
    }
}
