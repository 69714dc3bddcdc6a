// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use leads_app::{LEADS_PATH, Location, Route};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "leads";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub start: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            start: Some(LEADS_PATH.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
            file: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("LEADS_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set LEADS_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} has no version. Add `version = 1` at the top; settings go under [ui] and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(start) = &self.ui.start {
            start_location(start)
                .with_context(|| format!("invalid ui.start in {}", path.display()))?;
        }

        if let Some(level) = &self.log.level
            && !LOG_LEVELS.contains(&level.as_str())
        {
            bail!(
                "log.level in {} must be one of {}, got {:?}",
                path.display(),
                LOG_LEVELS.join(", "),
                level
            );
        }

        if let Some(file) = &self.log.file
            && file.trim().is_empty()
        {
            bail!(
                "log.file in {} is empty; remove it or give a file path",
                path.display()
            );
        }

        Ok(())
    }

    pub fn start(&self) -> Result<Location> {
        start_location(self.ui.start.as_deref().unwrap_or(LEADS_PATH))
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log.file.as_deref().map(PathBuf::from)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# leads config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# Initial location. Add ?status=active|in-progress|completed to open filtered.\nstart = \"{}\"\n\n[log]\n# One of: {}. RUST_LOG overrides this.\nlevel = \"{}\"\n# Interactive sessions only log when a file is set.\n# file = \"/tmp/leads.log\"\n",
            path.display(),
            LEADS_PATH,
            LOG_LEVELS.join(", "),
            DEFAULT_LOG_LEVEL,
        )
    }
}

/// Parse a user-supplied start href; it must land on a lead page.
pub fn start_location(href: &str) -> Result<Location> {
    let location = Location::parse(href)?;
    match location.route() {
        Route::Leads | Route::LeadDetail(_) => Ok(location),
        Route::Dashboard => bail!("{href:?} is the dashboard; start on /leads or /lead/<id>"),
        Route::NotFound(path) => bail!("no page at {path:?}; start on /leads or /lead/<id>"),
    }
}
