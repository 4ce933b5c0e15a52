//! Tab selection state. Exactly one tab is visible whenever the set is non-empty.

use super::profile::ProfileKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabVisibility {
    Visible,
    Hidden,
}

impl TabVisibility {
    /// Inline style applied to a `tab-content` container.
    pub fn style(self) -> &'static str {
        match self {
            Self::Visible => "display: block",
            Self::Hidden => "display: none",
        }
    }

    /// Class applied to the matching `tab-header` entry.
    pub fn header_class(self) -> &'static str {
        match self {
            Self::Visible => "selected",
            Self::Hidden => "not-selected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabSet {
    tabs: Vec<(ProfileKind, TabVisibility)>,
}

impl TabSet {
    /// Builds a set in the given order; the first tab starts visible.
    pub fn new(kinds: impl IntoIterator<Item = ProfileKind>) -> Self {
        let mut tabs: Vec<(ProfileKind, TabVisibility)> = Vec::new();
        for kind in kinds {
            if tabs.iter().any(|(existing, _)| *existing == kind) {
                continue;
            }
            let visibility = if tabs.is_empty() {
                TabVisibility::Visible
            } else {
                TabVisibility::Hidden
            };
            tabs.push((kind, visibility));
        }
        Self { tabs }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = ProfileKind> + '_ {
        self.tabs.iter().map(|(kind, _)| *kind)
    }

    pub fn contains(&self, kind: ProfileKind) -> bool {
        self.tabs.iter().any(|(existing, _)| *existing == kind)
    }

    pub fn active(&self) -> Option<ProfileKind> {
        self.tabs
            .iter()
            .find(|(_, visibility)| *visibility == TabVisibility::Visible)
            .map(|(kind, _)| *kind)
    }

    /// Visibility of `kind`; tabs that are not part of the set count as hidden.
    pub fn visibility(&self, kind: ProfileKind) -> TabVisibility {
        self.tabs
            .iter()
            .find(|(existing, _)| *existing == kind)
            .map(|(_, visibility)| *visibility)
            .unwrap_or(TabVisibility::Hidden)
    }

    /// Hides every tab, then shows `kind`. Unknown kinds leave the set untouched.
    pub fn show_tab(&mut self, kind: ProfileKind) -> bool {
        if !self.contains(kind) {
            return false;
        }
        for (_, visibility) in self.tabs.iter_mut() {
            *visibility = TabVisibility::Hidden;
        }
        for (existing, visibility) in self.tabs.iter_mut() {
            if *existing == kind {
                *visibility = TabVisibility::Visible;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ProfileKind::*;

    fn visible_count(set: &TabSet) -> usize {
        set.kinds()
            .filter(|kind| set.visibility(*kind) == TabVisibility::Visible)
            .count()
    }

    #[test]
    fn first_tab_starts_visible() {
        let set = TabSet::new([FlameGraph, CodeHeatmap, MemoryStats]);
        assert_eq!(set.active(), Some(FlameGraph));
        assert_eq!(set.visibility(CodeHeatmap), TabVisibility::Hidden);
        assert_eq!(visible_count(&set), 1);
    }

    #[test]
    fn empty_set_has_no_active_tab() {
        let set = TabSet::default();
        assert!(set.is_empty());
        assert_eq!(set.active(), None);
    }

    #[test]
    fn duplicates_are_collapsed() {
        let set = TabSet::new([MemoryStats, MemoryStats]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn every_click_leaves_exactly_one_visible() {
        let mut set = TabSet::new([FlameGraph, CodeHeatmap, MemoryStats]);
        let clicks = [CodeHeatmap, CodeHeatmap, MemoryStats, FlameGraph, MemoryStats];
        for clicked in clicks {
            assert!(set.show_tab(clicked));
            assert_eq!(set.active(), Some(clicked));
            assert_eq!(visible_count(&set), 1);
        }
    }

    #[test]
    fn showing_missing_tab_is_a_no_op() {
        let mut set = TabSet::new([FlameGraph, CodeHeatmap]);
        assert!(!set.show_tab(MemoryStats));
        assert_eq!(set.active(), Some(FlameGraph));
    }

    #[test]
    fn header_and_content_markers() {
        assert_eq!(TabVisibility::Visible.style(), "display: block");
        assert_eq!(TabVisibility::Hidden.style(), "display: none");
        assert_eq!(TabVisibility::Visible.header_class(), "selected");
        assert_eq!(TabVisibility::Hidden.header_class(), "not-selected");
    }
}
