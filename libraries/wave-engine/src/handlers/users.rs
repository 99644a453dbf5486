//! Account commands

use wave_core::{UserRecord, UserRole};

use crate::error::Result;
use crate::output::Reply;
use crate::world::WorldState;

/// Register a new account
pub fn add_user(
    world: &mut WorldState,
    user: &str,
    role: UserRole,
    age: u32,
    city: &str,
) -> Result<Reply> {
    world.register(UserRecord {
        username: user.to_string(),
        age,
        city: city.to_string(),
        role,
    })?;
    Ok(Reply::message(format!(
        "The username {} has been added successfully.",
        user
    )))
}

/// Toggle a listener between online and offline
pub fn switch_connection_status(world: &mut WorldState, user: &str) -> Result<Reply> {
    let listener = world.users.listener_mut(user)?;
    listener.online = !listener.online;
    Ok(Reply::message(format!("{} has changed status successfully.", user)))
}

/// Names of the listeners currently online
pub fn online_users(world: &WorldState) -> Reply {
    let names: Vec<&str> = world
        .users
        .listeners()
        .iter()
        .filter(|listener| listener.online)
        .map(|listener| listener.username.as_str())
        .collect();
    Reply::result(names)
}

/// Every username: listeners, artists, hosts
pub fn all_users(world: &WorldState) -> Reply {
    Reply::result(world.users.all_usernames())
}
