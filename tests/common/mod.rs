//! # Test Harness
//!
//! Provides utilities for integration testing boom without affecting the user's
//! config or data file. The library side is redirected through the thread-local
//! home override; the binary is pointed at the temporary home through `HOME`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use tempfile::TempDir;

use boom::{
    set_home_override, FileBackend, GlobalConfig, Platform, Result, Session, Storage,
    Style,
};

/// Global lock to ensure tests touching the home override run sequentially.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// A sample data file with two lists.
pub const SAMPLE_DATA: &str = r#"{
  "lists": [
    {
      "urls": [
        { "github": "https://github.com" },
        { "blog": "https://example.com/blog" }
      ]
    },
    {
      "snippets": [
        { "sig": "- me" }
      ]
    }
  ]
}"#;

/// Test environment with a temporary home directory.
pub struct TestEnv {
    /// Temporary directory simulating the user's home (~/.boom, ~/.config/boom/config)
    pub home_dir: TempDir,
    #[allow(dead_code)]
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            test_guard,
        }
    }

    /// Creates an environment whose data file holds `SAMPLE_DATA`.
    pub fn with_sample_data() -> Self {
        let env = Self::new();
        env.write_data(SAMPLE_DATA);
        env
    }

    /// Returns the path of the json backend's data file.
    pub fn data_path(&self) -> PathBuf {
        self.home_dir.path().join(".boom")
    }

    /// Returns the path where the global config is stored.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("boom")
            .join("config")
    }

    pub fn write_data(&self, content: &str) {
        fs::write(self.data_path(), content).expect("Failed to write data file");
    }

    pub fn read_data(&self) -> String {
        fs::read_to_string(self.data_path()).unwrap_or_default()
    }

    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).unwrap_or_default()
    }

    /// Loads the data file the way the binary does.
    pub fn storage(&self) -> Storage {
        Storage::load(&self.backend()).expect("data file should parse")
    }

    pub fn backend(&self) -> FileBackend {
        FileBackend::new(self.data_path())
    }

    /// Runs one command through the library against the data file.
    pub fn run(&self, platform: &RecordingPlatform, args: &[&str]) -> (Result<()>, String) {
        let backend = self.backend();
        let mut storage = Storage::load(&backend).expect("data file should parse");
        let mut config = GlobalConfig::load().expect("config should load");
        let registry = boom::Registry::default();
        let mut out = Vec::new();

        let result = {
            let mut session = Session {
                storage: &mut storage,
                backend: &backend,
                platform,
                config: &mut config,
                registry: &registry,
                style: Style::plain(),
                out: &mut out,
            };
            boom::execute(args.iter().copied(), &mut session)
        };
        (result, String::from_utf8(out).expect("utf-8 output"))
    }

    /// Creates a `boom` command running against this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("boom").unwrap();
        cmd.env("HOME", self.home_dir.path());
        cmd.env("USERPROFILE", self.home_dir.path());
        cmd.env_remove("BOOM_LOG");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

/// Records clipboard, browser and editor calls instead of performing them.
#[derive(Default)]
pub struct RecordingPlatform {
    pub copied: RefCell<Vec<String>>,
    pub opened: RefCell<Vec<String>>,
    pub edited: RefCell<Vec<PathBuf>>,
    pub answer: Cell<bool>,
    pub stdin: RefCell<Option<String>>,
}

impl RecordingPlatform {
    pub fn answering(answer: bool) -> Self {
        let platform = Self::default();
        platform.answer.set(answer);
        platform
    }

    pub fn piping(content: &str) -> Self {
        let platform = Self::default();
        *platform.stdin.borrow_mut() = Some(content.to_string());
        platform
    }
}

impl Platform for RecordingPlatform {
    fn copy(&self, text: &str) -> Result<()> {
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }

    fn open_url(&self, url: &str) -> Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }

    fn confirm(&self, _prompt: &str) -> bool {
        self.answer.get()
    }

    fn piped_stdin(&self) -> Option<String> {
        self.stdin.borrow_mut().take()
    }

    fn edit(&self, path: &Path) -> Result<()> {
        self.edited.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

