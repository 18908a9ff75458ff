use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::CalendarAnchor;

const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub anchor_year: Option<i32>,
    pub anchor_semester: Option<u8>,
    pub default_sort: Option<String>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            anchor_year: None,
            anchor_semester: None,
            default_sort: None,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    /// Anchor pinned by configuration. Both year and semester must be set.
    pub fn anchor(&self) -> anyhow::Result<Option<CalendarAnchor>> {
        match (self.anchor_year, self.anchor_semester) {
            (Some(year), Some(semester)) => CalendarAnchor::try_from_raw(year, semester)
                .map(Some)
                .context("invalid anchor_semester in settings"),
            _ => Ok(None),
        }
    }
}

/// Defaults, then `roster.toml` (or an explicit path), then environment overrides.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match path {
        Some(path) => read_settings_file(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                read_settings_file(&default_path)?
            } else {
                Settings::default()
            }
        }
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))
}

pub(crate) fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    // Later keys win.
    let lookup = |keys: &[&str]| keys.iter().rev().find_map(|key| var(*key));

    if let Some(v) = lookup(&["ROSTER_ANCHOR_YEAR", "APP__ANCHOR_YEAR"]) {
        if let Ok(parsed) = v.parse::<i32>() {
            settings.anchor_year = Some(parsed);
        }
    }
    if let Some(v) = lookup(&["ROSTER_ANCHOR_SEMESTER", "APP__ANCHOR_SEMESTER"]) {
        if let Ok(parsed) = v.parse::<u8>() {
            settings.anchor_semester = Some(parsed);
        }
    }
    if let Some(v) = lookup(&["ROSTER_DEFAULT_SORT"]) {
        settings.default_sort = Some(v);
    }
    if let Some(v) = lookup(&["ROSTER_LOG", "APP__LOG_FILTER"]) {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
