//! Layout of the stats page derived from one stats object.

use serde_json::Value;

use super::profile::{ProfileData, ProfileKind};
use super::tabs::TabSet;

#[derive(Debug, Clone, PartialEq)]
pub struct TabPlan {
    pub kind: ProfileKind,
    pub payload: Value,
}

/// One entry per recognized key, in ascending key order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PagePlan {
    tabs: Vec<TabPlan>,
}

impl PagePlan {
    pub fn from_data(data: &ProfileData) -> Self {
        let tabs = data
            .iter()
            .filter_map(|(key, payload)| {
                ProfileKind::from_key(key).map(|kind| TabPlan {
                    kind,
                    payload: payload.clone(),
                })
            })
            .collect();
        Self { tabs }
    }

    pub fn tabs(&self) -> &[TabPlan] {
        &self.tabs
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tab_set(&self) -> TabSet {
        TabSet::new(self.tabs.iter().map(|tab| tab.kind))
    }

    /// Calls `render` once per tab, in page order.
    pub fn render_with<R>(&self, mut render: impl FnMut(ProfileKind, &Value) -> R) -> Vec<R> {
        self.tabs
            .iter()
            .map(|tab| render(tab.kind, &tab.payload))
            .collect()
    }
}
