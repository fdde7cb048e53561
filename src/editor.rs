//! # Editor Integration
//!
//! Launches the user's preferred editor on the data file (`boom edit`).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{path::Path, process::Command};

use tracing::debug;

use crate::error::{BoomError, Result};

/// Resolves the editor command.
///
/// Priority:
/// 1. `editor` setting in config
/// 2. `$VISUAL` environment variable
/// 3. `$EDITOR` environment variable
/// 4. Fallback to `vi`
pub fn resolve(configured: Option<&str>) -> String {
    configured
        .map(str::to_string)
        .filter(|e| !e.trim().is_empty())
        .or_else(|| std::env::var("VISUAL").ok().filter(|e| !e.trim().is_empty()))
        .or_else(|| std::env::var("EDITOR").ok().filter(|e| !e.trim().is_empty()))
        .unwrap_or_else(|| "vi".to_string())
}

/// Splits an editor command into program and arguments (e.g. `code --wait`).
pub fn split_command(editor: &str) -> Result<(String, Vec<String>)> {
    let mut parts = shlex::split(editor)
        .ok_or_else(|| BoomError::Platform(format!("Invalid editor command: {editor}")))?
        .into_iter();
    let program = parts
        .next()
        .ok_or_else(|| BoomError::Platform("Empty editor command".to_string()))?;
    Ok((program, parts.collect()))
}

/// Opens a file in the given editor command and waits for it to exit.
pub fn open(path: &Path, editor: &str) -> Result<()> {
    let (program, args) = split_command(editor)?;
    debug!(%editor, path = %path.display(), "launching editor");

    let status = Command::new(&program)
        .args(&args)
        .arg(path)
        .status()
        .map_err(|e| BoomError::Platform(format!("Failed to launch editor {editor}: {e}")))?;

    if !status.success() {
        return Err(BoomError::Platform(format!(
            "Editor exited with error: {status}"
        )));
    }

    Ok(())
}
