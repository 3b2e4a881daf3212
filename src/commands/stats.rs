use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, stats::TaskStats, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut tasks = Tasks::new()?;
    let stats = TaskStats::compute(&mut tasks)?;

    msg_print!(Message::StatsHeader, true);
    View::stats(&stats)
}
