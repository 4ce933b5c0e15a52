use dioxus::prelude::*;
use serde_json::Value;

use crate::core::{page::PagePlan, profile::ProfileKind, tabs::TabSet};
use crate::t;
use crate::viewer::{renderers, TabContainer, TabHeader};

/// Tabbed stats page: one header entry and one content container per tab.
#[component]
pub fn ProfilePage(plan: PagePlan, tabs: Signal<TabSet>) -> Element {
    let contents = plan.render_with(|kind, payload| {
        let visibility = tabs.with(|set| set.visibility(kind));
        rsx! {
            div {
                key: "{kind.tab_id()}",
                class: "tab-content",
                id: kind.tab_id(),
                style: visibility.style(),
                TabBody { kind, payload: payload.clone() }
            }
        }
    });

    rsx! {
        TabHeader { tabs }
        if plan.is_empty() {
            p { class: "tab-header__empty", {t!("page-no-tabs")} }
        }
        for content in contents.into_iter() {
            {content}
        }
    }
}

/// Invokes the registered renderer. Props never change after mount, so
/// switching tabs does not redraw the charts.
#[component]
fn TabBody(kind: ProfileKind, payload: Value) -> Element {
    let container = TabContainer::for_kind(kind);
    let render = renderers().for_kind(kind);

    #[cfg(debug_assertions)]
    tracing::trace!(tab = container.id, "rendering tab contents");

    render(&payload, &container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::ProfileData;
    use serde_json::json;

    #[derive(Props, Clone, PartialEq)]
    struct PageHarnessProps {
        stats: Value,
        clicked: Option<ProfileKind>,
    }

    fn page_harness(props: PageHarnessProps) -> Element {
        crate::i18n::init();
        let data: ProfileData = serde_json::from_value(props.stats).unwrap_or_default();
        let plan = PagePlan::from_data(&data);
        let clicked = props.clicked;
        let tabs = use_signal(|| {
            let mut set = plan.tab_set();
            if let Some(kind) = clicked {
                set.show_tab(kind);
            }
            set
        });

        rsx! { ProfilePage { plan, tabs } }
    }

    fn render_page(stats: Value, clicked: Option<ProfileKind>) -> String {
        let mut dom = VirtualDom::new_with_props(
            page_harness,
            PageHarnessProps { stats, clicked },
        );
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    /// Opening tag of the element carrying `id="{id}"`.
    fn opening_tag<'a>(html: &'a str, id: &str) -> &'a str {
        let marker = format!("id=\"{id}\"");
        let at = html
            .find(&marker)
            .unwrap_or_else(|| panic!("no element with {marker} in {html}"));
        let start = html[..at].rfind('<').unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..=end]
    }

    #[test]
    fn page_emits_header_and_fixed_containers() {
        let html = render_page(json!({ "h": {}, "c": {}, "x": 1 }), None);

        assert_eq!(html.matches("class=\"tab-header\"").count(), 1);
        assert_eq!(html.matches("class=\"tab-content\"").count(), 2);
        assert!(!html.contains("id=\"memory-chart\""));

        assert!(opening_tag(&html, "flame-graph").contains("display: block"));
        assert!(opening_tag(&html, "code-heatmap").contains("display: none"));

        assert_eq!(html.matches("class=\"selected\"").count(), 1);
        assert_eq!(html.matches("class=\"not-selected\"").count(), 1);
    }

    #[test]
    fn flame_graph_comes_before_heatmap() {
        let html = render_page(json!({ "h": {}, "c": {} }), None);
        let flame = html.find("id=\"flame-graph\"").unwrap();
        let heatmap = html.find("id=\"code-heatmap\"").unwrap();
        assert!(flame < heatmap);
    }

    #[test]
    fn switched_tab_flips_the_styles() {
        let html = render_page(
            json!({ "h": {}, "c": {} }),
            Some(ProfileKind::CodeHeatmap),
        );
        assert!(opening_tag(&html, "code-heatmap").contains("display: block"));
        assert!(opening_tag(&html, "flame-graph").contains("display: none"));
        assert_eq!(html.matches("display: block").count(), 1);
    }

    #[test]
    fn memory_only_page_has_one_visible_tab() {
        let html = render_page(json!({ "m": { "totalEvents": 64 } }), None);
        assert_eq!(html.matches("class=\"tab-content\"").count(), 1);
        assert!(opening_tag(&html, "memory-chart").contains("display: block"));
        assert!(html.contains("profile-summary--memory-chart"));
    }
}
