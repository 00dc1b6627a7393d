//! Configuration constants and utilities for paned
//!
//! Settings come from one INI file; every key is optional and a missing
//! file means all defaults. Command line flags are applied on top.

use anyhow::{Context, Result};
use ini::{Ini, Properties};
use std::path::{Path, PathBuf};

use crate::cmd_args::CommandLineArgs;
use crate::editor::events::InputMode;
use crate::editor::services::Indentation;

/// Default config file path for paned
pub const DEFAULT_CONFIG_PATH: &str = "~/.paned/config";

/// Environment variable name for overriding the config path
pub const CONFIG_PATH_ENV_VAR: &str = "PANED_CONFIG_PATH";

const DEFAULT_RULES_PATH: &str = "~/.paned/highlight.rules";
const DEFAULT_LOG_FILE: &str = "~/.paned/paned.log";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Get the config file path: an explicit path wins, then the environment
/// variable, then the default. The result is tilde expanded.
pub fn get_config_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => expand_path(&path.to_string_lossy()),
        None => {
            let raw = std::env::var_os(CONFIG_PATH_ENV_VAR)
                .and_then(|val| val.into_string().ok())
                .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
            expand_path(&raw)
        }
    }
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

/// Settings for one editor session
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub tab_width: usize,
    pub indent_size: usize,
    pub use_tabs: bool,
    /// Start editors in insert mode rather than overwrite mode
    pub insert_mode: bool,
    /// Draw borders around editor panes
    pub border: bool,
    pub rules_path: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: String,
    /// Dock extra files side by side
    pub vertical: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: 4,
            indent_size: 4,
            use_tabs: false,
            insert_mode: true,
            border: true,
            rules_path: Some(expand_path(DEFAULT_RULES_PATH)),
            log_file: expand_path(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            vertical: false,
        }
    }
}

impl EditorConfig {
    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        Self::from_ini(&ini).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let ini = Ini::load_from_str(text).context("failed to parse config")?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self> {
        let mut config = Self::default();

        if let Some(editor) = ini.section(Some("editor")) {
            if let Some(value) = parse_key(editor, "tab_width", parse_usize)? {
                config.tab_width = value;
            }
            if let Some(value) = parse_key(editor, "indent_size", parse_usize)? {
                config.indent_size = value;
            }
            if let Some(value) = parse_key(editor, "use_tabs", parse_bool)? {
                config.use_tabs = value;
            }
            if let Some(value) = parse_key(editor, "insert_mode", parse_bool)? {
                config.insert_mode = value;
            }
            if let Some(value) = parse_key(editor, "border", parse_bool)? {
                config.border = value;
            }
        }

        if let Some(highlight) = ini.section(Some("highlight")) {
            if let Some(rules) = highlight.get("rules") {
                config.rules_path = match rules.trim() {
                    "" => None,
                    path => Some(expand_path(path)),
                };
            }
        }

        if let Some(log) = ini.section(Some("log")) {
            if let Some(file) = log.get("file") {
                config.log_file = expand_path(file.trim());
            }
            if let Some(level) = log.get("level") {
                config.log_level = level.trim().to_string();
            }
        }

        Ok(config)
    }

    /// Apply command line overrides
    pub fn apply_args(&mut self, args: &CommandLineArgs) {
        if let Some(rules) = args.rules() {
            self.rules_path = Some(rules.to_path_buf());
        }
        if let Some(level) = args.log_level() {
            self.log_level = level.to_string();
        }
        self.vertical = args.vertical();
    }

    pub fn indentation(&self) -> Indentation {
        Indentation::new(self.tab_width, self.indent_size, self.use_tabs)
    }

    pub fn input_mode(&self) -> InputMode {
        if self.insert_mode {
            InputMode::Insert
        } else {
            InputMode::Overwrite
        }
    }
}

fn parse_key<T>(
    section: &Properties,
    key: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>> {
    match section.get(key) {
        Some(raw) => parse(raw.trim())
            .map(Some)
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(None),
    }
}

fn parse_usize(raw: &str) -> Option<usize> {
    raw.parse().ok()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
