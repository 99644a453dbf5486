//! Page navigation commands

use crate::error::{EngineError, Result};
use crate::navigation::{NavigationEntry, PageKind};
use crate::output::Reply;
use crate::pages::render_current;
use crate::world::WorldState;

/// Render the page on screen
pub fn print_current_page(world: &mut WorldState, user: &str) -> Result<Reply> {
    world.users.online_listener_mut(user)?;
    let viewer = world.users.listener(user)?;
    Ok(Reply::Message(render_current(world, viewer)))
}

/// Open a page by name
pub fn change_page(world: &mut WorldState, user: &str, next_page: &str) -> Result<Reply> {
    let listener = world.users.online_listener_mut(user)?;
    let entry = PageKind::parse(next_page)
        .and_then(|kind| NavigationEntry::resolve(kind, &listener.session))
        .ok_or_else(|| EngineError::WrongPageType(user.to_string()))?;

    listener.pages.push(entry);
    Ok(Reply::message(format!(
        "{} accessed {} successfully.",
        user, next_page
    )))
}

/// Go back one page
pub fn previous_page(world: &mut WorldState, user: &str) -> Result<Reply> {
    let listener = world.users.online_listener_mut(user)?;
    if !listener.pages.back() {
        return Err(EngineError::NoPreviousPage);
    }
    Ok(Reply::message(format!(
        "The user {} has navigated successfully to the previous page.",
        user
    )))
}

/// Go forward one page
pub fn next_page(world: &mut WorldState, user: &str) -> Result<Reply> {
    let listener = world.users.online_listener_mut(user)?;
    if !listener.pages.forward() {
        return Err(EngineError::NoNextPage);
    }
    Ok(Reply::message(format!(
        "The user {} has navigated successfully to the next page.",
        user
    )))
}
