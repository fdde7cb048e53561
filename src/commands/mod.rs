//! # Commands
//!
//! The command resolver. Arguments are positional (`boom <command> <major> <minor>`)
//! and overloaded: the same shape can mean "add an item", "copy an item" or
//! "create a list" depending on what already exists. `rules::RULES` holds the
//! ordered guard/handler pairs; the first guard that matches wins.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod items;
pub mod lists;
pub mod meta;
pub mod rules;

use std::io::Write;

use tracing::debug;

pub use self::rules::{resolve, Rule, RULES};
use crate::{
    config::ConfigStore,
    error::{BoomError, Result},
    platform::Platform,
    storage::{Backend, Registry, Storage},
    ui::Style,
};

/// The positional arguments of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub command: Option<String>,
    pub major: Option<String>,
    pub minor: Option<String>,
}

impl Invocation {
    /// Takes the first three arguments; anything after them is ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        Self {
            command: args.next(),
            major: args.next(),
            minor: args.next(),
        }
    }

    /// Returns the command
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// Returns the first argument after the command
    pub fn major(&self) -> Option<&str> {
        self.major.as_deref()
    }

    /// Returns the second argument after the command
    pub fn minor(&self) -> Option<&str> {
        self.minor.as_deref()
    }
}

/// Everything a command needs, passed explicitly.
pub struct Session<'a> {
    pub storage: &'a mut Storage,
    pub backend: &'a dyn Backend,
    pub platform: &'a dyn Platform,
    pub config: &'a mut dyn ConfigStore,
    pub registry: &'a Registry,
    pub style: Style,
    pub out: &'a mut dyn Write,
}

impl Session<'_> {
    /// Writes one line of output.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// Writes a `Boom!`-prefixed success line.
    pub fn boom(&mut self, message: &str) -> Result<()> {
        let line = self.style.boom(message);
        self.say(&line)
    }

    /// Persists storage through the active backend, then records any settings
    /// the backend picked up along the way.
    pub fn save(&mut self) -> Result<()> {
        self.storage.save(self.backend)?;
        for (key, value) in self.backend.take_settings() {
            self.config.set(key, &value)?;
        }
        Ok(())
    }
}

/// Resolves `args` against the rule table and runs the matching handler.
///
/// Resolution-level errors (not found, invalid names) are printed and the
/// command ends cleanly. Storage and backend errors are returned.
pub fn execute<I, S>(args: I, session: &mut Session<'_>) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let invocation = Invocation::from_args(args);
    let rule = resolve(&invocation, session.storage);
    debug!(rule = rule.name, ?invocation, "resolved command");

    match (rule.handler)(&invocation, session) {
        Err(err) if err.is_resolution() => session.say(&err.to_string()),
        other => other,
    }
}

/// Returns the argument or an `InvalidArgument` naming the expected usage.
pub(crate) fn required<'a>(value: Option<&'a str>, usage: &str) -> Result<&'a str> {
    value.ok_or_else(|| BoomError::InvalidArgument(format!("usage: {usage}")))
}
