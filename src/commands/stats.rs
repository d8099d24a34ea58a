use super::list::stats_line;
use crate::{db::tasks::Tasks, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let stats = Tasks::new()?.stats()?;
    msg_print!(stats_line(&stats));
    Ok(())
}
