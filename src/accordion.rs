//! Accordion State
//!
//! Tracks which panels are expanded. An exclusive group keeps at most one
//! panel open (mega-menu column headers on touch screens); a free group lets
//! each `data-target` toggle act independently (mobile navigation).

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionGroup {
    exclusive: bool,
    open: BTreeSet<String>,
}

impl AccordionGroup {
    pub fn exclusive() -> Self {
        Self { exclusive: true, open: BTreeSet::new() }
    }

    pub fn independent() -> Self {
        Self { exclusive: false, open: BTreeSet::new() }
    }

    pub fn is_open(&self, panel_id: &str) -> bool {
        self.open.contains(panel_id)
    }

    /// Flip one panel; returns whether it is now open
    pub fn toggle(&mut self, panel_id: &str) -> bool {
        if self.open.remove(panel_id) {
            return false;
        }
        if self.exclusive {
            self.open.clear();
        }
        self.open.insert(panel_id.to_string());
        true
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

/// `aria-expanded` value for a panel state
pub fn aria_expanded(open: bool) -> &'static str {
    if open { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_closes_siblings() {
        let mut group = AccordionGroup::exclusive();
        assert!(group.toggle("list-0-0"));
        assert!(group.toggle("list-0-1"));
        assert!(!group.is_open("list-0-0"));
        assert!(group.is_open("list-0-1"));
        assert_eq!(group.open_count(), 1);
    }

    #[test]
    fn test_toggle_closes_open_panel() {
        let mut group = AccordionGroup::exclusive();
        group.toggle("a");
        assert!(!group.toggle("a"));
        assert_eq!(group.open_count(), 0);
    }

    #[test]
    fn test_independent_panels() {
        let mut group = AccordionGroup::independent();
        group.toggle("departments");
        group.toggle("patients");
        assert!(group.is_open("departments"));
        assert!(group.is_open("patients"));

        group.collapse_all();
        assert_eq!(group.open_count(), 0);
    }
}
