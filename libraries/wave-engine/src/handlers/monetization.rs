//! Subscription, ad and merchandise commands

use crate::error::{EngineError, Result};
use crate::monetization::ranking_payload;
use crate::navigation::NavigationEntry;
use crate::output::Reply;
use crate::world::WorldState;

/// Start a premium subscription
pub fn buy_premium(world: &mut WorldState, user: &str) -> Result<Reply> {
    let listener = world.users.online_listener_mut(user)?;
    if listener.premium {
        return Err(EngineError::AlreadyPremium(user.to_string()));
    }
    listener.premium = true;
    Ok(Reply::message(format!(
        "{} bought the subscription successfully.",
        user
    )))
}

/// End a premium subscription, paying out its window
pub fn cancel_premium(world: &mut WorldState, user: &str) -> Result<Reply> {
    let listener = world.users.online_listener_mut(user)?;
    if !listener.premium {
        return Err(EngineError::NotPremium(user.to_string()));
    }
    listener.premium = false;
    world.ledger.close_premium_window(user);
    Ok(Reply::message(format!(
        "{} cancelled the subscription successfully.",
        user
    )))
}

/// Queue an ad after the current track
pub fn ad_break(world: &mut WorldState, user: &str, price: Option<f64>) -> Result<Reply> {
    let listener = world.users.online_listener_mut(user)?;
    if !listener.session.is_active() {
        return Err(EngineError::NotPlaying(user.to_string()));
    }
    let price = price.unwrap_or(world.config.default_ad_price);
    world.ledger.schedule_ad(user, price);
    Ok(Reply::message("Ad inserted successfully."))
}

/// Buy merchandise from the artist whose page is on screen
pub fn buy_merch(world: &mut WorldState, user: &str, name: &str) -> Result<Reply> {
    let listener = world.users.online_listener_mut(user)?;
    let NavigationEntry::Artist(artist) = listener.pages.current().clone() else {
        return Err(EngineError::NotOnArtistPage);
    };

    let price = world
        .users
        .artist(&artist)
        .ok()
        .and_then(|profile| profile.merch.iter().find(|merch| merch.name == name))
        .map(|merch| merch.price)
        .ok_or_else(|| EngineError::MerchNotFound(name.to_string()))?;

    world.ledger.record_merch(&artist, price);
    world.users.listener_mut(user)?.merch.push(name.to_string());
    Ok(Reply::message(format!(
        "{} has added new merch successfully.",
        user
    )))
}

/// Names of the merchandise the listener bought
pub fn see_merch(world: &mut WorldState, user: &str) -> Result<Reply> {
    let listener = world.users.listener(user)?;
    Ok(Reply::result(&listener.merch))
}

/// Settle revenue and report the artist ranking
pub fn end_program(world: &mut WorldState) -> Reply {
    Reply::Result(ranking_payload(&world.ledger.settle()))
}
