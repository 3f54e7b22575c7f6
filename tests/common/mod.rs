//! Shared testing utilities for adcraft integration tests.

use assert_cmd::Command;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MODEL: &str = "gemini-test";
pub const MODEL_PATH: &str = "/models/gemini-test:generateContent";

/// Testing harness providing an isolated `$HOME` and working directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// `$HOME/.config/adcraft`.
    pub fn config_dir(&self) -> PathBuf {
        self.home().join(".config").join("adcraft")
    }

    /// Point the Gemini client at `api_url` via `config.toml`.
    pub fn write_gemini_config(&self, api_url: &str) {
        fs::create_dir_all(self.config_dir()).expect("Failed to create config directory");
        let content = format!(
            "[gemini]\napi_url = \"{}\"\nmodel = \"{}\"\ntimeout_secs = 5\n",
            api_url, MODEL
        );
        fs::write(self.config_dir().join("config.toml"), content)
            .expect("Failed to write config.toml");
    }

    /// Build a command for the compiled `adcraft` binary with no credential set.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("adcraft").expect("Failed to locate adcraft binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env_remove("GEMINI_API_KEY")
            .env_remove("ADCRAFT_LOG")
            .write_stdin("");
        cmd
    }

    /// Like [`TestContext::cli`] with a test credential.
    pub fn cli_with_key(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("GEMINI_API_KEY", "test-key");
        cmd
    }
}

/// Three well-formed variations as the model would return them.
pub fn variations_json() -> Value {
    json!([
        {
            "headline": "Clean Greener, Live Better",
            "primaryText": "EcoClean Spray lifts grime without harsh chemicals.",
            "cta": "Shop Now",
            "framework": "AIDA",
            "explanation": "Moves from attention to action."
        },
        {
            "headline": "Tired of Harsh Chemicals?",
            "primaryText": "Switch to a plant-based spray that is safe around kids.",
            "cta": "Try It Today",
            "framework": "PAS",
            "explanation": "Names the pain before the fix."
        },
        {
            "headline": "One Spray, Every Surface",
            "primaryText": "Kitchen, bath and glass with a single bottle.",
            "cta": "Get Yours",
            "framework": "Benefit-Driven",
            "explanation": "Leads with the outcome."
        }
    ])
}

/// Wrap a payload string in a `generateContent` response envelope.
pub fn candidate_body(payload: &str) -> String {
    json!({ "candidates": [{ "content": { "role": "model", "parts": [{ "text": payload }] } }] })
        .to_string()
}

/// Sets or removes an environment variable for the lifetime of the guard.
#[allow(dead_code)]
pub struct EnvVarGuard {
    key: String,
    original: Option<std::ffi::OsString>,
}

#[allow(dead_code)]
impl EnvVarGuard {
    pub fn set<K: Into<String>, V: AsRef<std::ffi::OsStr>>(key: K, value: V) -> Self {
        let key = key.into();
        let original = std::env::var_os(&key);
        unsafe { std::env::set_var(&key, value) };
        Self { key, original }
    }

    pub fn remove<K: Into<String>>(key: K) -> Self {
        let key = key.into();
        let original = std::env::var_os(&key);
        unsafe { std::env::remove_var(&key) };
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(original) = self.original.as_ref() {
            unsafe { std::env::set_var(&self.key, original) };
        } else {
            unsafe { std::env::remove_var(&self.key) };
        }
    }
}
