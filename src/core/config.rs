//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.taskboard/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The file is only ever read; board contents are never written back.

use log::{LevelFilter, debug};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::item::{Column, Item, default_seed};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TaskboardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub columns: ColumnsConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ColumnsConfig {
    pub todo: Option<String>,
    pub in_progress: Option<String>,
    pub done: Option<String>,
}

/// Colors as written in the file: names ("cyan"), palette indexes ("6"),
/// or hex ("#00ffff"). Parsing happens in the TUI layer.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub focused_border: Option<String>,
    pub normal_border: Option<String>,
    pub selected_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub cursor_fg: Option<String>,
    pub cursor_bg: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_LOG_FILE: &str = "taskboard.log";

pub const DEFAULT_FOCUSED_BORDER: &str = "6";
pub const DEFAULT_NORMAL_BORDER: &str = "7";
pub const DEFAULT_SELECTED_FG: &str = "4";
pub const DEFAULT_SELECTED_BG: &str = "3";
pub const DEFAULT_CURSOR_FG: &str = "2";
pub const DEFAULT_CURSOR_BG: &str = "1";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub titles: BTreeMap<Column, String>,
    pub theme: ThemeColors,
    pub seed: Vec<Item>,
    /// Problems found while resolving, to be logged once the logger exists.
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub focused_border: String,
    pub normal_border: String,
    pub selected_fg: String,
    pub selected_bg: String,
    pub cursor_fg: String,
    pub cursor_bg: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            focused_border: DEFAULT_FOCUSED_BORDER.to_string(),
            normal_border: DEFAULT_NORMAL_BORDER.to_string(),
            selected_fg: DEFAULT_SELECTED_FG.to_string(),
            selected_bg: DEFAULT_SELECTED_BG.to_string(),
            cursor_fg: DEFAULT_CURSOR_FG.to_string(),
            cursor_bg: DEFAULT_CURSOR_BG.to_string(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.taskboard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".taskboard").join("config.toml"))
}

/// Where the loaded config came from. `load_config` runs before the logger
/// exists, so the caller logs this once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Generated(PathBuf),
    /// Defaults only; the reason no file was read or written.
    Defaults(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                write!(f, "no config file found, generated default at {}", path.display())
            }
            ConfigSource::Defaults(reason) => write!(f, "using default config: {reason}"),
        }
    }
}

/// Load config from an explicit path, or from `~/.taskboard/config.toml`.
///
/// A missing default file is generated (commented out) and treated as empty.
/// A missing explicit file is an error.
pub fn load_config(
    explicit: Option<&Path>,
) -> Result<(TaskboardConfig, ConfigSource), ConfigError> {
    if let Some(path) = explicit {
        let config = read_config(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            let source = ConfigSource::Defaults("could not determine home directory".into());
            return Ok((TaskboardConfig::default(), source));
        }
    };

    if !path.exists() {
        let source = match generate_default_config(&path) {
            Ok(()) => ConfigSource::Generated(path),
            Err(e) => ConfigSource::Defaults(format!(
                "failed to write default config to {}: {e}",
                path.display()
            )),
        };
        return Ok((TaskboardConfig::default(), source));
    }

    let config = read_config(&path)?;
    Ok((config, ConfigSource::File(path)))
}

fn read_config(path: &Path) -> Result<TaskboardConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TaskboardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r##"# Taskboard Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "taskboard.log"         # Or set TASKBOARD_LOG_FILE env var

# [columns]
# todo = "Todo"
# in_progress = "In Progress"
# done = "Done"

# [theme]                            # Color names, palette indexes, or "#rrggbb"
# focused_border = "6"
# normal_border = "7"
# selected_fg = "4"
# selected_bg = "3"
# cursor_fg = "2"
# cursor_bg = "1"

# Starting items. Without any, the board opens with a few examples.
# [[items]]
# title = "Write the release notes"
# description = "Cover the new column titles"
# column = "todo"                    # "todo", "in_progress", or "done"
"##;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_log_file` comes from `--log-file`; `empty` from `--empty`, which
/// starts the board with no items regardless of the file.
pub fn resolve(
    config: &TaskboardConfig,
    cli_log_file: Option<&Path>,
    empty: bool,
) -> ResolvedConfig {
    resolve_with_env(config, cli_log_file, empty, |name| std::env::var(name).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
fn resolve_with_env(
    config: &TaskboardConfig,
    cli_log_file: Option<&Path>,
    empty: bool,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut warnings = Vec::new();

    // Log level: env → config → default, skipping any layer that doesn't parse
    let log_level = env("TASKBOARD_LOG_LEVEL")
        .and_then(|level| parse_level("TASKBOARD_LOG_LEVEL", &level, &mut warnings))
        .or_else(|| {
            config
                .general
                .log_level
                .as_deref()
                .and_then(|level| parse_level("general.log_level", level, &mut warnings))
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → env → config → default
    let log_file = cli_log_file
        .map(Path::to_path_buf)
        .or_else(|| env("TASKBOARD_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let titles = Column::ALL
        .iter()
        .map(|&column| {
            let configured = match column {
                Column::Todo => &config.columns.todo,
                Column::InProgress => &config.columns.in_progress,
                Column::Done => &config.columns.done,
            };
            let title = configured
                .clone()
                .unwrap_or_else(|| column.label().to_string());
            (column, title)
        })
        .collect();

    let seed = if empty {
        Vec::new()
    } else if config.items.is_empty() {
        default_seed()
    } else {
        config.items.clone()
    };

    ResolvedConfig {
        log_level,
        log_file,
        titles,
        theme: resolve_theme(&config.theme),
        seed,
        warnings,
    }
}

fn parse_level(source: &str, value: &str, warnings: &mut Vec<String>) -> Option<LevelFilter> {
    match value.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warnings.push(format!("Ignoring invalid log level {value:?} from {source}"));
            None
        }
    }
}

fn resolve_theme(theme: &ThemeConfig) -> ThemeColors {
    let pick = |value: &Option<String>, default: &str| {
        value.clone().unwrap_or_else(|| default.to_string())
    };
    ThemeColors {
        focused_border: pick(&theme.focused_border, DEFAULT_FOCUSED_BORDER),
        normal_border: pick(&theme.normal_border, DEFAULT_NORMAL_BORDER),
        selected_fg: pick(&theme.selected_fg, DEFAULT_SELECTED_FG),
        selected_bg: pick(&theme.selected_bg, DEFAULT_SELECTED_BG),
        cursor_fg: pick(&theme.cursor_fg, DEFAULT_CURSOR_FG),
        cursor_bg: pick(&theme.cursor_bg, DEFAULT_CURSOR_BG),
    }
}
