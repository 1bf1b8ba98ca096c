//! Keybindings configuration for the TUI.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

macro_rules! vec_of_strings {
    ($($s:expr),* $(,)?) => {
        vec![$($s.to_string()),*]
    };
}

/// Top-level configuration for taskflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// TUI configuration.
    pub tui: TuiConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Keybindings configuration.
    pub keybindings: KeyBindingsConfig,
}

/// Keybindings for all TUI views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyBindingsConfig {
    /// Keybindings for the task list view.
    pub task_list: TaskListKeyBindings,
    /// Keybindings for the delete confirmation prompt.
    pub confirm_prompt: ConfirmKeyBindings,
}

/// Keybindings for the task list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListKeyBindings {
    /// Quit the application.
    pub quit: Vec<String>,
    /// Move down in the list.
    pub down: Vec<String>,
    /// Move up in the list.
    pub up: Vec<String>,
    /// Toggle the selected task's completed flag.
    pub toggle: Vec<String>,
    /// Open the add-task form.
    pub add_task: Vec<String>,
    /// Request deletion of the selected task.
    pub delete_task: Vec<String>,
    /// Start editing the search text.
    pub search: Vec<String>,
    /// Cycle the status filter (all → pending → completed).
    pub cycle_filter: Vec<String>,
    /// Jump straight to the "all" filter.
    pub filter_all: Vec<String>,
    /// Jump straight to the "pending" filter.
    pub filter_pending: Vec<String>,
    /// Jump straight to the "completed" filter.
    pub filter_completed: Vec<String>,
    /// Switch between the light and dark theme.
    pub toggle_theme: Vec<String>,
}

/// Keybindings for the delete confirmation prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmKeyBindings {
    /// Carry out the pending deletion.
    pub confirm: Vec<String>,
    /// Keep the task and dismiss the prompt.
    pub cancel: Vec<String>,
}

impl Default for TaskListKeyBindings {
    fn default() -> Self {
        Self {
            quit: vec_of_strings!["q", "Q"],
            down: vec_of_strings!["j", "Down"],
            up: vec_of_strings!["k", "Up"],
            toggle: vec_of_strings!["Space", "Enter"],
            add_task: vec_of_strings!["a", "n"],
            delete_task: vec_of_strings!["d", "Delete"],
            search: vec_of_strings!["/"],
            cycle_filter: vec_of_strings!["f"],
            filter_all: vec_of_strings!["1"],
            filter_pending: vec_of_strings!["2"],
            filter_completed: vec_of_strings!["3"],
            toggle_theme: vec_of_strings!["t"],
        }
    }
}

impl Default for ConfirmKeyBindings {
    fn default() -> Self {
        Self {
            confirm: vec_of_strings!["y", "Enter"],
            cancel: vec_of_strings!["n", "Esc"],
        }
    }
}

/// Returns the default configuration file path.
///
/// On Linux/macOS: `~/.config/taskflow/config.toml`
/// On Windows: `%APPDATA%\taskflow\config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskflow").join("config.toml"))
}

/// Generate the default configuration as a TOML string.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn generate_default_config_toml() -> Result<String> {
    let config = Config::default();
    let toml_str =
        toml::to_string_pretty(&config).context("failed to serialize default configuration")?;

    let header = r#"# taskflow configuration
#
# [tui.keybindings]
# Each action can have multiple key bindings.
#
# Supported key formats:
# - Single characters: "j", "k", "a", "1"
# - Special keys: "Enter", "Esc", "Space", "Tab", "Backspace", "Delete"
# - Arrow keys: "Up", "Down", "Left", "Right"
# - Modified keys: "Ctrl+d", "Alt+k", "Shift+Up"
#
# Note: when this file exists, ALL default keybindings are disabled.
# Make sure to define every action you need.

"#;

    Ok(format!("{header}{toml_str}"))
}

/// Load configuration from a TOML file.
///
/// With `path == None` the default location is used. A missing file yields
/// `Ok(None)` so callers can fall back to the built-in defaults.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => return Ok(None),
        },
    };

    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config file: {}", config_path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", config_path.display()))?;

    Ok(Some(config))
}

/// Parse a key string into a `KeyEvent`.
///
/// # Examples
/// - `"j"` -> `KeyCode::Char('j')`
/// - `"Enter"` -> `KeyCode::Enter`
/// - `"Ctrl+d"` -> `KeyCode::Char('d')` with the CONTROL modifier
///
/// # Errors
/// Returns an error for unknown keys or modifiers.
pub fn parse_key(s: &str) -> Result<KeyEvent> {
    let parts: Vec<&str> = s.split('+').collect();

    if parts.is_empty() {
        bail!("empty key string");
    }

    let mut modifiers = KeyModifiers::NONE;
    let key_part = if parts.len() > 1 {
        for &modifier in &parts[..parts.len() - 1] {
            match modifier {
                "Ctrl" | "Control" => modifiers |= KeyModifiers::CONTROL,
                "Alt" => modifiers |= KeyModifiers::ALT,
                "Shift" => modifiers |= KeyModifiers::SHIFT,
                other => bail!("unknown modifier: {other}"),
            }
        }
        parts[parts.len() - 1]
    } else {
        parts[0]
    };

    let code = parse_key_code(key_part)?;

    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(s: &str) -> Result<KeyCode> {
    match s {
        "Enter" => Ok(KeyCode::Enter),
        "Esc" => Ok(KeyCode::Esc),
        "Space" => Ok(KeyCode::Char(' ')),
        "Backspace" => Ok(KeyCode::Backspace),
        "Left" => Ok(KeyCode::Left),
        "Right" => Ok(KeyCode::Right),
        "Up" => Ok(KeyCode::Up),
        "Down" => Ok(KeyCode::Down),
        "Home" => Ok(KeyCode::Home),
        "End" => Ok(KeyCode::End),
        "PageUp" => Ok(KeyCode::PageUp),
        "PageDown" => Ok(KeyCode::PageDown),
        "Tab" => Ok(KeyCode::Tab),
        "Delete" => Ok(KeyCode::Delete),
        "Insert" => Ok(KeyCode::Insert),
        s if s.chars().count() == 1 => {
            let ch = s.chars().next().ok_or_else(|| anyhow!("empty char"))?;
            Ok(KeyCode::Char(ch))
        }
        other => bail!("unknown key: {other}"),
    }
}

/// Validate the keybindings configuration.
///
/// Checks for empty binding lists, invalid key expressions, and key
/// conflicts within each view.
///
/// # Errors
/// Returns an error describing the first problem found.
pub fn validate_keybindings_config(config: &KeyBindingsConfig) -> Result<()> {
    validate_view("task_list", &task_list_fields(&config.task_list))?;
    validate_view(
        "confirm_prompt",
        &[
            ("confirm", &config.confirm_prompt.confirm),
            ("cancel", &config.confirm_prompt.cancel),
        ],
    )?;
    Ok(())
}

fn task_list_fields(bindings: &TaskListKeyBindings) -> [(&'static str, &Vec<String>); 12] {
    [
        ("quit", &bindings.quit),
        ("down", &bindings.down),
        ("up", &bindings.up),
        ("toggle", &bindings.toggle),
        ("add_task", &bindings.add_task),
        ("delete_task", &bindings.delete_task),
        ("search", &bindings.search),
        ("cycle_filter", &bindings.cycle_filter),
        ("filter_all", &bindings.filter_all),
        ("filter_pending", &bindings.filter_pending),
        ("filter_completed", &bindings.filter_completed),
        ("toggle_theme", &bindings.toggle_theme),
    ]
}

fn validate_view(view: &str, fields: &[(&str, &Vec<String>)]) -> Result<()> {
    let mut seen: HashSet<KeyEvent> = HashSet::new();
    for (name, keys) in fields {
        if keys.is_empty() {
            bail!("{view}.{name} must have at least one key binding");
        }
        for key in *keys {
            let parsed = parse_key(key).with_context(|| format!("invalid key in {view}.{name}"))?;
            if !seen.insert(parsed) {
                bail!("key {key:?} is bound to more than one action in {view}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok<T>(result: Result<T>, context: &str) -> T {
        result.unwrap_or_else(|err| panic!("{context}: {err}"))
    }

    #[test]
    fn parse_single_characters() {
        let event = ok(parse_key("j"), "parse j");
        assert_eq!(event.code, KeyCode::Char('j'));
        assert_eq!(event.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn parse_special_keys() {
        assert_eq!(ok(parse_key("Enter"), "parse Enter").code, KeyCode::Enter);
        assert_eq!(ok(parse_key("Space"), "parse Space").code, KeyCode::Char(' '));
        assert_eq!(ok(parse_key("Delete"), "parse Delete").code, KeyCode::Delete);
    }

    #[test]
    fn parse_modified_keys() {
        let event = ok(parse_key("Ctrl+d"), "parse Ctrl+d");
        assert_eq!(event.code, KeyCode::Char('d'));
        assert_eq!(event.modifiers, KeyModifiers::CONTROL);

        let event = ok(parse_key("Shift+Up"), "parse Shift+Up");
        assert_eq!(event.code, KeyCode::Up);
        assert_eq!(event.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        assert!(parse_key("Hyper+x").is_err());
        assert!(parse_key("NoSuchKey").is_err());
    }

    #[test]
    fn default_config_passes_validation() {
        ok(
            validate_keybindings_config(&KeyBindingsConfig::default()),
            "defaults must validate",
        );
    }

    #[test]
    fn validation_rejects_empty_bindings() {
        let mut config = KeyBindingsConfig::default();
        config.task_list.quit.clear();
        assert!(validate_keybindings_config(&config).is_err());
    }

    #[test]
    fn validation_rejects_conflicts_within_a_view() {
        let mut config = KeyBindingsConfig::default();
        config.task_list.toggle = vec_of_strings!["q"];
        assert!(validate_keybindings_config(&config).is_err());
    }

    #[test]
    fn generated_toml_roundtrips() {
        let toml_str = ok(generate_default_config_toml(), "generate default toml");
        let parsed: Config = ok(
            toml::from_str(&toml_str).map_err(Into::into),
            "parse generated toml",
        );
        ok(
            validate_keybindings_config(&parsed.tui.keybindings),
            "generated config must validate",
        );
    }
}
