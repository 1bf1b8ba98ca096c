use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::keybindings::{KeyBindingsConfig, parse_key};

/// Actions available in the task list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ListAction {
    Quit,
    Down,
    Up,
    Toggle,
    AddTask,
    DeleteTask,
    Search,
    CycleFilter,
    FilterAll,
    FilterPending,
    FilterCompleted,
    ToggleTheme,
}

/// Actions available while the delete confirmation prompt is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ConfirmAction {
    Confirm,
    Cancel,
}

/// Key bindings resolved to crossterm events at startup.
#[derive(Debug)]
pub(super) struct KeyMap {
    list: Vec<(KeyEvent, ListAction)>,
    confirm: Vec<(KeyEvent, ConfirmAction)>,
}

impl KeyMap {
    /// Compile a validated configuration into lookup tables.
    pub(super) fn from_config(config: &KeyBindingsConfig) -> Result<Self> {
        let task_list = &config.task_list;
        let mut list = Vec::new();
        push_all(&mut list, &task_list.quit, ListAction::Quit)?;
        push_all(&mut list, &task_list.down, ListAction::Down)?;
        push_all(&mut list, &task_list.up, ListAction::Up)?;
        push_all(&mut list, &task_list.toggle, ListAction::Toggle)?;
        push_all(&mut list, &task_list.add_task, ListAction::AddTask)?;
        push_all(&mut list, &task_list.delete_task, ListAction::DeleteTask)?;
        push_all(&mut list, &task_list.search, ListAction::Search)?;
        push_all(&mut list, &task_list.cycle_filter, ListAction::CycleFilter)?;
        push_all(&mut list, &task_list.filter_all, ListAction::FilterAll)?;
        push_all(&mut list, &task_list.filter_pending, ListAction::FilterPending)?;
        push_all(&mut list, &task_list.filter_completed, ListAction::FilterCompleted)?;
        push_all(&mut list, &task_list.toggle_theme, ListAction::ToggleTheme)?;

        let mut confirm = Vec::new();
        push_all(&mut confirm, &config.confirm_prompt.confirm, ConfirmAction::Confirm)?;
        push_all(&mut confirm, &config.confirm_prompt.cancel, ConfirmAction::Cancel)?;

        Ok(Self { list, confirm })
    }

    pub(super) fn list_action(&self, key: KeyEvent) -> Option<ListAction> {
        lookup(&self.list, key)
    }

    pub(super) fn confirm_action(&self, key: KeyEvent) -> Option<ConfirmAction> {
        lookup(&self.confirm, key)
    }
}

fn push_all<A: Copy>(out: &mut Vec<(KeyEvent, A)>, keys: &[String], action: A) -> Result<()> {
    for key in keys {
        out.push((parse_key(key)?, action));
    }
    Ok(())
}

fn lookup<A: Copy>(table: &[(KeyEvent, A)], key: KeyEvent) -> Option<A> {
    let normalized = normalize(key);
    table
        .iter()
        .find(|(binding, _)| *binding == normalized)
        .map(|(_, action)| *action)
}

/// Uppercase characters arrive with SHIFT set; bindings are written without
/// it. Also strips the kind/state fields so table equality works.
fn normalize(key: KeyEvent) -> KeyEvent {
    let mut modifiers = key.modifiers;
    if matches!(key.code, KeyCode::Char(_)) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(key.code, modifiers)
}
