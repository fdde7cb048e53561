//! # Meta Commands
//!
//! Commands about boom itself: help, version, backend selection and editing the
//! data file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::Write;

use super::{Invocation, Session};
use crate::{
    config::{ConfigStore, BACKEND_KEY},
    error::{BoomError, Result},
    storage::Registry,
    ui::Style,
};

/// Usage text for `boom help`.
pub const HELP: &str = "\
- boom: help ---------------------------------------------------

boom                          display high-level overview
boom all                      show all items in all lists
boom edit                     edit the boom JSON file in $EDITOR
boom help                     this help text
boom storage                  shows which storage backend you're using
boom switch <storage>         switches to a different storage backend

boom <list>                   create a new list
boom <list>                   show items for a list
boom <list> delete            deletes a list

boom <list> <name> <value>    create a new list item
boom <name>                   copy item's value to clipboard
boom <list> <name>            copy item's value to clipboard
boom open <name>              open item's url in browser
boom open <list> <name>       open all item's url in browser for a list
boom echo <name>              echo the item's value without copying
boom echo <list> <name>       echo the item's value without copying
boom <list> <name> delete     deletes an item

all other documentation is located at:
  https://github.com/holman/boom";

/// `boom help`, `boom -h`, or any unknown flag
pub fn help(_: &Invocation, session: &mut Session<'_>) -> Result<()> {
    session.say(HELP)
}

/// `boom -v`
pub fn version(_: &Invocation, session: &mut Session<'_>) -> Result<()> {
    session.say(&format!(
        "You're running boom {}. Congratulations!",
        env!("CARGO_PKG_VERSION")
    ))
}

/// `boom storage`
pub fn storage(_: &Invocation, session: &mut Session<'_>) -> Result<()> {
    let name = session.backend.name().to_string();
    session.say(&format!("You're currently using {name}."))
}

/// `boom switch <backend>`
pub fn switch(invocation: &Invocation, session: &mut Session<'_>) -> Result<()> {
    let active = session.backend.name().to_string();
    switch_backend(
        session.registry,
        session.config,
        invocation.major(),
        &active,
        session.style,
        session.out,
    )
}

/// Points the config at another backend.
///
/// Also used by the binary when the configured backend cannot be opened, so
/// this works without a loaded storage. An unknown backend is reported and the
/// config is left alone.
pub fn switch_backend(
    registry: &Registry,
    config: &mut dyn ConfigStore,
    target: Option<&str>,
    active: &str,
    style: Style,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(target) = target else {
        writeln!(
            out,
            "You're currently using {active}. Available: {}.",
            registry.names().join(", ")
        )?;
        return Ok(());
    };

    match registry.resolve(target) {
        Ok(id) => {
            config.set(BACKEND_KEY, id)?;
            writeln!(out, "{}", style.boom(&format!("We've switched you over to {id}.")))?;
            Ok(())
        }
        Err(BoomError::BackendNotFound(_)) => {
            writeln!(
                out,
                "We couldn't find that storage engine. Check the name and try again."
            )?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// `boom edit`: opens the data file in the editor.
pub fn edit(_: &Invocation, session: &mut Session<'_>) -> Result<()> {
    let Some(path) = session.backend.location().map(ToOwned::to_owned) else {
        let name = session.backend.name().to_string();
        return session.say(&format!(
            "The {name} backend has no local file to edit."
        ));
    };

    session.boom("Make your edits, and do be sure to save.")?;
    session.platform.edit(&path)
}
