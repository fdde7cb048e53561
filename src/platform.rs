//! # Platform
//!
//! The side effects boom needs from the outside world: clipboard, browser,
//! confirmation prompt, piped stdin and the editor. The command resolver only
//! sees the `Platform` trait so it can run without any of them.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    io::{self, IsTerminal, Read, Write},
    path::Path,
    process::{Command, Stdio},
};

use tracing::debug;

use crate::{
    constants::CONFIRM_YES,
    editor,
    error::{BoomError, Result},
};

/// Capabilities injected into the command resolver.
pub trait Platform {
    /// Copies `text` to the system clipboard.
    fn copy(&self, text: &str) -> Result<()>;

    /// Opens `url` in the default browser.
    fn open_url(&self, url: &str) -> Result<()>;

    /// Shows `prompt` and returns whether the user agreed.
    fn confirm(&self, prompt: &str) -> bool;

    /// Returns content piped into stdin, if any.
    ///
    /// Only called by commands that can store a value, never while resolving.
    fn piped_stdin(&self) -> Option<String>;

    /// Opens `path` in the user's editor.
    fn edit(&self, path: &Path) -> Result<()>;
}

/// The real platform: shells out to the OS tools.
#[derive(Debug, Clone, Default)]
pub struct SystemPlatform {
    editor: Option<String>,
}

impl SystemPlatform {
    /// Creates a platform using `editor` (from config) for `boom edit`
    pub const fn new(editor: Option<String>) -> Self {
        Self { editor }
    }
}

impl Platform for SystemPlatform {
    fn copy(&self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }

    fn open_url(&self, url: &str) -> Result<()> {
        let (program, args) = open_command();
        debug!(program, %url, "opening url");

        let status = Command::new(program)
            .args(args)
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| BoomError::Platform(format!("Failed to spawn {program}: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(BoomError::Platform(format!("{program} exited with error")))
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        println!("{prompt}");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }
        input.trim() == CONFIRM_YES
    }

    /// Reads stdin to EOF when it is not a terminal.
    ///
    /// A pipe that is never closed (e.g. boom started from an editor task or a
    /// non-interactive ssh session holding stdin open) blocks here until it is.
    /// Run boom with `< /dev/null` in such setups.
    fn piped_stdin(&self) -> Option<String> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            return None;
        }

        let mut content = String::new();
        stdin.lock().read_to_string(&mut content).ok()?;
        let content = content.trim_end_matches(['\r', '\n']);
        if content.is_empty() {
            None
        } else {
            Some(content.to_string())
        }
    }

    fn edit(&self, path: &Path) -> Result<()> {
        editor::open(path, &editor::resolve(self.editor.as_deref()))
    }
}

/// Returns the program (and leading arguments) that opens a URL.
const fn open_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    if cfg!(target_os = "macos") {
        pipe_to("pbcopy", &[], text)
    } else if cfg!(target_os = "windows") {
        pipe_to("clip", &[], text)
    } else {
        // Try xclip first, then xsel
        pipe_to("xclip", &["-selection", "clipboard"], text)
            .or_else(|_| pipe_to("xsel", &["--clipboard", "--input"], text))
            .map_err(|e| BoomError::Platform(format!("{e}. Install xclip or xsel.")))
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    debug!(program, "copying to clipboard");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| BoomError::Platform(format!("Failed to spawn {program}: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| BoomError::Platform(format!("Failed to write to {program}: {e}")))?;
    }

    let status = child
        .wait()
        .map_err(|e| BoomError::Platform(format!("Failed to wait for {program}: {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(BoomError::Platform(format!("{program} exited with error")))
    }
}
