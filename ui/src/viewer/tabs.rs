use dioxus::prelude::*;

use crate::core::{
    profile::ProfileKind,
    tabs::{TabSet, TabVisibility},
};
use crate::i18n;

#[component]
pub fn TabHeader(tabs: Signal<TabSet>) -> Element {
    let entries: Vec<(ProfileKind, TabVisibility)> = tabs.with(|set| {
        set.kinds()
            .map(|kind| (kind, set.visibility(kind)))
            .collect()
    });

    rsx! {
        ul { class: "tab-header",
            for (kind, visibility) in entries.into_iter() {
                {render_tab_entry(kind, visibility, tabs)}
            }
        }
    }
}

fn render_tab_entry(
    kind: ProfileKind,
    visibility: TabVisibility,
    mut tabs: Signal<TabSet>,
) -> Element {
    let label = i18n::tab_label(kind);

    rsx! {
        li {
            key: "{kind.tab_id()}",
            class: visibility.header_class(),
            onclick: move |_| {
                tabs.with_mut(|set| {
                    set.show_tab(kind);
                });
            },
            "{label}"
        }
    }
}
