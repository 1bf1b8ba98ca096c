use crate::task::Task;

/// Case-insensitive substring matcher for task text.
pub struct TextMatcher {
    needle: String,
}

impl TextMatcher {
    /// Normalize a query string into a matcher. Returns `None` for blank inputs.
    #[must_use]
    pub fn new(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            needle: trimmed.to_lowercase(),
        })
    }

    /// Determine whether the task's text contains the query.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        task.text.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::TaskList;
    use crate::task::TaskDraft;

    fn task(text: &str) -> Task {
        let mut list = TaskList::new();
        let id = list
            .add(TaskDraft::new(text))
            .unwrap_or_else(|err| panic!("add must accept {text:?}: {err}"));
        list.remove(id).unwrap_or_else(|| panic!("task must exist"))
    }

    #[test]
    fn matcher_skips_blank_queries() {
        assert!(TextMatcher::new("").is_none());
        assert!(TextMatcher::new("   ").is_none());
        assert!(TextMatcher::new("\n").is_none());
    }

    #[test]
    fn matcher_is_case_insensitive() {
        let subject = task("Design new landing page");

        for query in ["design", "DESIGN", "Landing Page"] {
            let matcher = TextMatcher::new(query)
                .unwrap_or_else(|| panic!("matcher must exist for {query:?}"));
            assert!(matcher.matches(&subject), "query {query:?} must match");
        }

        let missing = TextMatcher::new("groceries")
            .unwrap_or_else(|| panic!("matcher must exist for non-blank query"));
        assert!(!missing.matches(&subject));
    }

    #[test]
    fn matcher_trims_the_query() {
        let subject = task("Buy milk");
        let matcher =
            TextMatcher::new("  milk  ").unwrap_or_else(|| panic!("matcher must exist"));
        assert!(matcher.matches(&subject));
    }
}
