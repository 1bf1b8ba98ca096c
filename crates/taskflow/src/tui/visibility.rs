use taskflow_core::{Task, TaskId};

/// Tracks the selected row in the projected task list, independent of IO.
///
/// The projection is recomputed by the session on demand; this struct only
/// remembers which row is selected and keeps the selection stable across
/// rebuilds.
#[derive(Debug, Default)]
pub(super) struct Visibility {
    ids: Vec<TaskId>,
    selected: usize,
}

impl Visibility {
    /// Rebuild from the current projection.
    ///
    /// Selection priority: the `preferred` id if it is visible, otherwise
    /// the previously selected id, otherwise the old position clamped into
    /// bounds.
    pub(super) fn rebuild(&mut self, visible: &[&Task], preferred: Option<TaskId>) {
        let remembered = preferred.or_else(|| self.selected_id());
        self.ids = visible.iter().map(|task| task.id).collect();

        if self.ids.is_empty() {
            self.selected = 0;
            return;
        }

        self.selected = remembered
            .and_then(|id| self.ids.iter().position(|&candidate| candidate == id))
            .unwrap_or_else(|| self.selected.min(self.ids.len() - 1));
    }

    pub(super) fn selected_id(&self) -> Option<TaskId> {
        self.ids.get(self.selected).copied()
    }

    /// Row index for the list widget; `None` when the view is empty.
    pub(super) fn selected_index(&self) -> Option<usize> {
        if self.ids.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    pub(super) fn select_next(&mut self) {
        if !self.ids.is_empty() && self.selected + 1 < self.ids.len() {
            self.selected += 1;
        }
    }

    pub(super) fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskflow_core::{TaskDraft, TaskList};

    fn three_tasks() -> TaskList {
        let mut list = TaskList::new();
        for text in ["one", "two", "three"] {
            list.add(TaskDraft::new(text))
                .unwrap_or_else(|err| panic!("add must accept {text:?}: {err}"));
        }
        list
    }

    #[test]
    fn rebuild_selects_the_top_row_initially() {
        let list = three_tasks();
        let visible: Vec<&Task> = list.iter().collect();
        let mut visibility = Visibility::default();
        visibility.rebuild(&visible, None);

        assert_eq!(visibility.selected_index(), Some(0));
        assert_eq!(visibility.selected_id(), Some(visible[0].id));
    }

    #[test]
    fn navigation_stays_within_bounds() {
        let list = three_tasks();
        let visible: Vec<&Task> = list.iter().collect();
        let mut visibility = Visibility::default();
        visibility.rebuild(&visible, None);

        visibility.select_prev();
        assert_eq!(visibility.selected_index(), Some(0));
        visibility.select_next();
        visibility.select_next();
        visibility.select_next();
        assert_eq!(visibility.selected_index(), Some(2));
    }

    #[test]
    fn rebuild_keeps_the_preferred_selection() {
        let list = three_tasks();
        let visible: Vec<&Task> = list.iter().collect();
        let mut visibility = Visibility::default();
        visibility.rebuild(&visible, Some(visible[2].id));
        assert_eq!(visibility.selected_id(), Some(visible[2].id));
    }

    #[test]
    fn rebuild_clamps_when_the_selected_row_disappears() {
        let mut list = three_tasks();
        let visible: Vec<&Task> = list.iter().collect();
        let last = visible[2].id;

        let mut visibility = Visibility::default();
        visibility.rebuild(&visible, Some(last));
        assert_eq!(visibility.selected_index(), Some(2));

        list.remove(last);
        let visible: Vec<&Task> = list.iter().collect();
        visibility.rebuild(&visible, None);
        assert_eq!(visibility.selected_index(), Some(1));
    }

    #[test]
    fn empty_projection_clears_the_selection() {
        let mut visibility = Visibility::default();
        visibility.rebuild(&[], None);
        assert_eq!(visibility.selected_index(), None);
        assert_eq!(visibility.selected_id(), None);
    }
}
