//! # List Commands
//!
//! Overview, detail view, creation and deletion of lists.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::{items, required, Invocation, Session};
use crate::{constants::DELETE_KEYWORD, error::Result, item::Item};

const ONBOARDING: &str = "\
You don't have anything yet! To start out, create a new list:
  $ boom <list-name>
And then add something to your list!
  $ boom <list-name> <item-name> <item-value>
You can then grab your new item:
  $ boom <item-name>";

/// `boom`: every list with its item count, biggest first.
pub fn overview(_: &Invocation, session: &mut Session<'_>) -> Result<()> {
    let style = session.style;
    let lines: Vec<String> = session
        .storage
        .lists()
        .iter()
        .map(|list| format!("  {} ({})", style.list_name(list.name()), list.len()))
        .collect();

    if lines.is_empty() {
        return session.say(ONBOARDING);
    }

    for line in lines {
        session.say(&line)?;
    }
    Ok(())
}

/// `boom all`: every list and every item.
pub fn all(_: &Invocation, session: &mut Session<'_>) -> Result<()> {
    let style = session.style;
    let mut lines = Vec::new();
    for list in session.storage.lists() {
        lines.push(format!("  {}", style.list_name(list.name())));
        lines.extend(list.items().iter().map(|item| style.item_row(item)));
    }

    for line in lines {
        session.say(&line)?;
    }
    Ok(())
}

/// `boom <list>`: the items of one list, sorted by name.
pub fn detail(invocation: &Invocation, session: &mut Session<'_>) -> Result<()> {
    let name = required(invocation.command(), "boom <list>")?;
    let style = session.style;
    let lines: Vec<String> = session
        .storage
        .list(name)
        .map(|list| {
            list.items_by_name()
                .into_iter()
                .map(|item| style.item_row(item))
                .collect()
        })
        .unwrap_or_default();

    for line in lines {
        session.say(&line)?;
    }
    Ok(())
}

/// `boom <list> delete`: deletes a list and its items after confirmation.
pub fn delete(invocation: &Invocation, session: &mut Session<'_>) -> Result<()> {
    let name = required(invocation.command(), "boom <list> delete")?;

    let prompt = format!("You sure you want to delete everything in \"{name}\"? (y/n):");
    if !session.platform.confirm(&prompt) {
        return session.say("Just kidding then.");
    }

    session.storage.delete_list(name);
    session.save()?;
    session.boom(&format!("Deleted all your {name}."))
}

/// `boom <new-list> [<item> <value>]`: creates a list, optionally with a first item.
///
/// The item value comes from the third argument or, failing that, piped stdin.
/// A literal `delete` never becomes a value.
pub fn create(invocation: &Invocation, session: &mut Session<'_>) -> Result<()> {
    let name = required(invocation.command(), "boom <list>")?;

    let value = match (invocation.major(), invocation.minor()) {
        (Some(_), Some(DELETE_KEYWORD)) | (None, _) => None,
        (Some(_), Some(value)) => Some(value.to_string()),
        (Some(_), None) => session.platform.piped_stdin(),
    };
    // Validate before the list exists, so a rejected item leaves storage untouched
    let item = match (invocation.major(), value) {
        (Some(item), Some(value)) => Some(Item::new(item, value)?),
        _ => None,
    };

    session.storage.create_list(name)?;
    let Some(item) = item else {
        session.save()?;
        return session.boom(&format!("Created a new list called \"{name}\"."));
    };

    let added = items::insert(session, name, item)?;
    session.save()?;
    session.boom(&format!("Created a new list called \"{name}\"."))?;
    session.boom(&added)
}

#[cfg(test)]
mod tests {
    use crate::commands::testing::Harness;

    #[test]
    fn test_overview_empty_shows_onboarding() {
        let mut h = Harness::empty();
        let output = h.run(&[]);
        assert!(output.starts_with("You don't have anything yet!"));
        assert!(output.contains("$ boom <list-name>"));
        assert_eq!(h.saves(), 0);
    }

    #[test]
    fn test_overview_counts() {
        let mut h = Harness::new(
            r#"{"lists":[{"small":[{"a":"1"}]},{"urls":[{"b":"2"},{"c":"3"}]},{"none":[]}]}"#,
        );
        assert_eq!(h.run(&[]), "  urls (2)\n  small (1)\n  none (0)\n");
        assert_eq!(h.saves(), 0);
    }

    #[test]
    fn test_all() {
        let mut h = Harness::urls();
        let output = h.run(&["all"]);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "  urls");
        assert!(lines[1].starts_with("    github:"));
        assert!(lines[1].ends_with(" https://github.com"));
        assert!(lines[2].starts_with("    example:"));
        assert_eq!(h.saves(), 0);
    }

    #[test]
    fn test_detail_sorted_by_name() {
        let mut h = Harness::urls();
        let output = h.run(&["urls"]);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("    example:"));
        assert!(lines[0].ends_with(" http://example.com"));
        assert!(lines[1].starts_with("    github:"));
        assert_eq!(h.saves(), 0);
    }

    #[test]
    fn test_create_list() {
        let mut h = Harness::urls();
        let output = h.run(&["newlist"]);
        assert_eq!(output, "Boom! Created a new list called \"newlist\".\n");
        assert_eq!(h.saves(), 1);
        assert!(h.persisted().list_exists("newlist"));
    }

    #[test]
    fn test_create_list_with_item() {
        let mut h = Harness::urls();
        let output = h.run(&["snippets", "sig", "- me"]);
        assert!(output.contains("Created a new list called \"snippets\""));
        assert!(output.contains("\"sig\" in \"snippets\" is \"- me\". Got it."));
        assert_eq!(h.saves(), 1);
        let persisted = h.persisted();
        assert_eq!(persisted.list("snippets").unwrap().items()[0].value(), "- me");
    }

    #[test]
    fn test_create_list_with_piped_item() {
        let mut h = Harness::urls();
        *h.platform.stdin.borrow_mut() = Some("piped value".to_string());
        h.run(&["snippets", "sig"]);
        let persisted = h.persisted();
        assert_eq!(
            persisted.list("snippets").unwrap().items()[0].value(),
            "piped value"
        );
    }

    #[test]
    fn test_create_list_ignores_delete_value() {
        let mut h = Harness::urls();
        h.run(&["snippets", "missing", "delete"]);
        assert!(h.persisted().list("snippets").unwrap().is_empty());
    }

    #[test]
    fn test_create_list_with_invalid_item_creates_nothing() {
        let mut h = Harness::urls();
        let output = h.run(&["newlist", "", "value"]);
        assert!(output.starts_with("invalid argument:"));
        assert!(!h.storage.list_exists("newlist"));
        assert_eq!(h.saves(), 0);

        // A later save must not carry the rejected list along
        h.run(&["urls", "x", "y"]);
        assert!(!h.persisted().list_exists("newlist"));
    }

    #[test]
    fn test_delete_list_declined() {
        let mut h = Harness::urls();
        h.platform.answer.set(false);
        let output = h.run(&["urls", "delete"]);
        assert_eq!(output, "Just kidding then.\n");
        assert_eq!(
            h.platform.prompts.borrow()[0],
            "You sure you want to delete everything in \"urls\"? (y/n):"
        );
        assert!(h.storage.list_exists("urls"));
        assert_eq!(h.saves(), 0);
    }

    #[test]
    fn test_delete_list_confirmed() {
        let mut h = Harness::urls();
        h.platform.answer.set(true);
        let output = h.run(&["urls", "delete"]);
        assert_eq!(output, "Boom! Deleted all your urls.\n");
        assert_eq!(h.saves(), 1);
        let persisted = h.persisted();
        assert!(!persisted.list_exists("urls"));
        assert!(!persisted.item_exists("github"));
    }
}
