//! # Rule Table
//!
//! Ordered guard/handler pairs. Guards only look at the arguments and the
//! in-memory storage; anything with side effects (stdin, prompts) happens in
//! the handler.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::{items, lists, meta, Invocation, Session};
use crate::{constants::DELETE_KEYWORD, error::Result, storage::Storage};

/// Decides whether a rule applies.
pub type Guard = fn(&Invocation, &Storage) -> bool;

/// Runs the command a rule stands for.
pub type Handler = fn(&Invocation, &mut Session<'_>) -> Result<()>;

/// One entry of the rule table.
pub struct Rule {
    /// Short identifier, used in logs and tests
    pub name: &'static str,
    pub guard: Guard,
    pub handler: Handler,
}

/// The rules in priority order. List lookups come before item lookups, so a
/// list shadows an item of the same name.
pub const RULES: &[Rule] = &[
    Rule {
        name: "overview",
        guard: no_command,
        handler: lists::overview,
    },
    Rule {
        name: "all",
        guard: |inv, _| inv.command() == Some("all"),
        handler: lists::all,
    },
    Rule {
        name: "edit",
        guard: |inv, _| inv.command() == Some("edit"),
        handler: meta::edit,
    },
    Rule {
        name: "switch",
        guard: |inv, _| inv.command() == Some("switch"),
        handler: meta::switch,
    },
    Rule {
        name: "storage",
        guard: |inv, _| inv.command() == Some("storage"),
        handler: meta::storage,
    },
    Rule {
        name: "version",
        guard: |inv, _| matches!(inv.command(), Some("-v" | "--version")),
        handler: meta::version,
    },
    Rule {
        name: "help",
        guard: is_help,
        handler: meta::help,
    },
    Rule {
        name: "echo",
        guard: |inv, _| matches!(inv.command(), Some("echo" | "e")),
        handler: items::echo,
    },
    Rule {
        name: "open",
        guard: |inv, _| matches!(inv.command(), Some("open" | "o")),
        handler: items::open,
    },
    Rule {
        name: "list_delete",
        guard: |inv, storage| is_list(inv, storage) && inv.major() == Some(DELETE_KEYWORD),
        handler: lists::delete,
    },
    Rule {
        name: "list_detail",
        guard: |inv, storage| is_list(inv, storage) && inv.major().is_none(),
        handler: lists::detail,
    },
    Rule {
        name: "list_item_delete",
        guard: |inv, storage| is_list(inv, storage) && inv.minor() == Some(DELETE_KEYWORD),
        handler: items::delete_from_list,
    },
    Rule {
        name: "list_item_add",
        guard: |inv, storage| is_list(inv, storage) && inv.minor().is_some(),
        handler: items::add_to_list,
    },
    Rule {
        name: "list_item_fetch",
        guard: is_list,
        handler: items::fetch_from_list,
    },
    Rule {
        name: "item_copy",
        guard: |inv, storage| inv.command().is_some_and(|name| storage.item_exists(name)),
        handler: items::copy,
    },
    Rule {
        name: "item_delete",
        guard: |inv, storage| {
            inv.minor() == Some(DELETE_KEYWORD)
                && inv.major().is_some_and(|name| storage.item_exists(name))
        },
        handler: items::delete_everywhere,
    },
    Rule {
        name: "list_create",
        guard: |_, _| true,
        handler: lists::create,
    },
];

/// Returns the first rule whose guard matches.
pub fn resolve(invocation: &Invocation, storage: &Storage) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.guard)(invocation, storage))
        .unwrap_or(&RULES[RULES.len() - 1])
}

fn no_command(invocation: &Invocation, _: &Storage) -> bool {
    invocation.command().is_none()
}

fn is_help(invocation: &Invocation, _: &Storage) -> bool {
    invocation
        .command()
        .is_some_and(|command| command == "help" || command.starts_with('-'))
}

fn is_list(invocation: &Invocation, storage: &Storage) -> bool {
    invocation
        .command()
        .is_some_and(|name| storage.list_exists(name))
}
