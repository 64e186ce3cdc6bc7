use crate::settings::{ConfigIssue, Settings};
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

pub const SETTINGS_DIR_NAME: &str = "screen_pen";
pub const SETTINGS_FILE_NAME: &str = "screen_pen.json";

/// Outcome of reading the configuration at startup. Never an error: every
/// problem ends up in `issues` and the affected values take their defaults.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub path: Option<PathBuf>,
    pub issues: Vec<ConfigIssue>,
    /// The defaults were written to `path` because no file existed.
    pub seeded: bool,
}

pub fn default_settings_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// Loads `explicit` if given, otherwise the per-user file, seeding it with
/// the defaults when it does not exist yet.
pub fn load(explicit: Option<&Path>) -> LoadedSettings {
    let mut loaded = LoadedSettings {
        settings: Settings::default(),
        path: None,
        issues: Vec::new(),
        seeded: false,
    };

    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_settings_path() {
            Some(path) => path,
            None => {
                loaded.issues.push(file_issue("no configuration directory; using defaults"));
                return loaded;
            }
        },
    };
    loaded.path = Some(path.clone());

    if !path.exists() {
        if explicit.is_some() {
            loaded.issues.push(file_issue(format!(
                "{} does not exist; using defaults",
                path.display()
            )));
        } else {
            match save_to_path(&path, &loaded.settings) {
                Ok(()) => loaded.seeded = true,
                Err(err) => loaded.issues.push(file_issue(format!("{err:#}; using defaults"))),
            }
        }
        return loaded;
    }

    match load_from_path(&path) {
        Ok((settings, issues)) => {
            loaded.settings = settings;
            loaded.issues = issues;
        }
        Err(err) => loaded.issues.push(file_issue(format!("{err:#}; using defaults"))),
    }
    loaded
}

fn file_issue(problem: impl Into<String>) -> ConfigIssue {
    ConfigIssue {
        key: "<file>".into(),
        problem: problem.into(),
    }
}

pub fn load_from_path(path: &Path) -> Result<(Settings, Vec<ConfigIssue>)> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;

    if content.trim().is_empty() {
        return Ok((Settings::default(), Vec::new()));
    }

    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("parse settings file {}", path.display()))?;
    Ok(Settings::from_json(&value))
}

pub fn save_to_path(path: &Path, settings: &Settings) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| anyhow!("settings path has no parent: {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create settings folder {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(settings).context("serialize settings")?;
    std::fs::write(path, json).with_context(|| format!("write settings file {}", path.display()))?;
    Ok(())
}
