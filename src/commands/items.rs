//! # Item Commands
//!
//! Adding, deleting, copying, echoing and opening items.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::{required, Invocation, Session};
use crate::{
    error::{BoomError, Result},
    item::Item,
};

fn not_found(name: &str) -> BoomError {
    BoomError::NotFound(format!("\"{name}\" not found."))
}

fn not_found_in(name: &str, list: &str) -> BoomError {
    BoomError::NotFound(format!("\"{name}\" not found in \"{list}\"."))
}

/// Adds `item` to `list_name`, replacing an item of the same name.
///
/// Callers build the item first so an invalid name never reaches storage.
/// Returns the confirmation message; the caller saves.
pub(crate) fn insert(session: &mut Session<'_>, list_name: &str, item: Item) -> Result<String> {
    let list = session
        .storage
        .list_mut(list_name)
        .ok_or_else(|| not_found(list_name))?;

    let message = format!(
        "\"{}\" in \"{list_name}\" is \"{}\". Got it.",
        item.name(),
        item.value()
    );
    list.delete_item(item.name());
    list.add_item(item);
    Ok(message)
}

fn copy_value(session: &mut Session<'_>, value: &str) -> Result<()> {
    session.platform.copy(value)?;
    session.boom(&format!("We just copied \"{value}\" to your clipboard."))
}

fn open_value(session: &mut Session<'_>, url: &str, value: &str) -> Result<()> {
    session.platform.open_url(url)?;
    session.boom(&format!("We just opened \"{value}\" for you."))
}

/// `boom <list> <item> <value>`
pub fn add_to_list(invocation: &Invocation, session: &mut Session<'_>) -> Result<()> {
    const USAGE: &str = "boom <list> <item> <value>";
    let list = required(invocation.command(), USAGE)?;
    let name = required(invocation.major(), USAGE)?;
    let value = required(invocation.minor(), USAGE)?;

    let message = insert(session, list, Item::new(name, value)?)?;
    session.save()?;
    session.boom(&message)
}

/// `boom <list> <item>`: stores piped stdin as the item, or copies the item.
pub fn fetch_from_list(invocation: &Invocation, session: &mut Session<'_>) -> Result<()> {
    const USAGE: &str = "boom <list> <item>";
    let list = required(invocation.command(), USAGE)?;
    let name = required(invocation.major(), USAGE)?;

    if let Some(value) = session.platform.piped_stdin() {
        let message = insert(session, list, Item::new(name, value)?)?;
        session.save()?;
        return session.boom(&message);
    }

    let value = session
        .storage
        .list(list)
        .and_then(|l| l.find_item(name))
        .map(|item| item.value().to_string())
        .ok_or_else(|| not_found_in(name, list))?;

    copy_value(session, &value)
}

/// `boom <item>`: copies an item found in any list.
pub fn copy(invocation: &Invocation, session: &mut Session<'_>) -> Result<()> {
    let name = required(invocation.command(), "boom <item>")?;
    let value = session
        .storage
        .find_item(name)
        .map(|item| item.value().to_string())
        .ok_or_else(|| not_found(name))?;

    copy_value(session, &value)
}

/// `boom <list> <item> delete`
pub fn delete_from_list(invocation: &Invocation, session: &mut Session<'_>) -> Result<()> {
    const USAGE: &str = "boom <list> <item> delete";
    let list = required(invocation.command(), USAGE)?;
    let name = required(invocation.major(), USAGE)?;

    let removed = session
        .storage
        .list_mut(list)
        .is_some_and(|l| l.delete_item(name));
    if !removed {
        return Err(not_found_in(name, list));
    }

    session.save()?;
    session.boom(&format!("\"{name}\" is gone forever."))
}

/// `boom <anything> <item> delete`: deletes the item from every list.
pub fn delete_everywhere(invocation: &Invocation, session: &mut Session<'_>) -> Result<()> {
    let name = required(invocation.major(), "boom <list> <item> delete")?;

    if session.storage.delete_item_everywhere(name) == 0 {
        return Err(not_found(name));
    }

    session.save()?;
    session.boom(&format!("\"{name}\" is gone forever."))
}

/// `boom echo [<list>] <item>`: prints the value without touching the clipboard.
pub fn echo(invocation: &Invocation, session: &mut Session<'_>) -> Result<()> {
    let item = match (invocation.major(), invocation.minor()) {
        (Some(name), None) => session.storage.find_item(name).ok_or_else(|| not_found(name))?,
        (Some(list), Some(name)) => session
            .storage
            .list(list)
            .ok_or_else(|| not_found(list))?
            .find_item(name)
            .ok_or_else(|| not_found_in(name, list))?,
        (None, _) => {
            return Err(BoomError::InvalidArgument(
                "usage: boom echo [<list>] <item>".to_string(),
            ))
        }
    };

    let value = item.value().to_string();
    session.say(&value)
}

/// `boom open [<list>] <item>` or `boom open <list>`: opens URLs in the browser.
pub fn open(invocation: &Invocation, session: &mut Session<'_>) -> Result<()> {
    let target = required(invocation.major(), "boom open [<list>] <item>")?;

    let Some(list) = session.storage.list(target) else {
        let (url, value) = session
            .storage
            .find_item(target)
            .map(|item| (item.url().to_string(), item.value().to_string()))
            .ok_or_else(|| not_found(target))?;
        return open_value(session, &url, &value);
    };

    if let Some(name) = invocation.minor() {
        let (url, value) = list
            .find_item(name)
            .map(|item| (item.url().to_string(), item.value().to_string()))
            .ok_or_else(|| not_found_in(name, target))?;
        return open_value(session, &url, &value);
    }

    let urls: Vec<String> = list.items().iter().map(|i| i.url().to_string()).collect();
    for url in &urls {
        session.platform.open_url(url)?;
    }
    session.boom(&format!("We just opened all of \"{target}\" for you."))
}
