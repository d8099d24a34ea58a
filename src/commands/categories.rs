use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let categories = Tasks::new()?.categories()?;
    if categories.is_empty() {
        msg_info!(Message::NoCategoriesFound);
    } else {
        msg_print!(Message::CategoriesHeader, true);
        View::categories(&categories);
    }
    Ok(())
}
