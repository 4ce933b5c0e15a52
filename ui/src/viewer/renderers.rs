use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use serde_json::Value;

use crate::core::{format, profile::ProfileKind};
use crate::t;

/// The content container a renderer draws into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabContainer {
    pub kind: ProfileKind,
    pub id: &'static str,
}

impl TabContainer {
    pub fn for_kind(kind: ProfileKind) -> Self {
        Self {
            kind,
            id: kind.tab_id(),
        }
    }
}

/// Draws one payload into its container.
pub type RenderFn = fn(payload: &Value, container: &TabContainer) -> Element;

/// Hosts that ship real chart renderers register them once, before the page
/// mounts, so `ui` stays free of any charting dependency:
///
/// ```ignore
/// ui::viewer::register_renderers(RendererSet {
///     flame_graph: charts::flame_graph,
///     ..RendererSet::summaries()
/// });
/// ```
///
/// Without a registration every tab falls back to [`render_summary`].
#[derive(Clone, Copy)]
pub struct RendererSet {
    pub flame_graph: RenderFn,
    pub memory_stats: RenderFn,
    pub code_heatmap: RenderFn,
}

impl RendererSet {
    pub fn summaries() -> Self {
        Self {
            flame_graph: render_summary,
            memory_stats: render_summary,
            code_heatmap: render_summary,
        }
    }

    pub fn for_kind(&self, kind: ProfileKind) -> RenderFn {
        match kind {
            ProfileKind::FlameGraph => self.flame_graph,
            ProfileKind::MemoryStats => self.memory_stats,
            ProfileKind::CodeHeatmap => self.code_heatmap,
        }
    }
}

impl Default for RendererSet {
    fn default() -> Self {
        Self::summaries()
    }
}

/// Write-once slot: the first registration or the first lookup fixes the set.
struct RendererRegistry {
    active: OnceCell<RendererSet>,
}

impl RendererRegistry {
    const fn new() -> Self {
        Self {
            active: OnceCell::new(),
        }
    }

    fn register(&self, set: RendererSet) -> bool {
        let accepted = self.active.set(set).is_ok();
        if !accepted {
            tracing::warn!("renderer set registered too late; keeping the active one");
        }
        accepted
    }

    fn get(&self) -> &RendererSet {
        self.active.get_or_init(RendererSet::summaries)
    }
}

static RENDERERS: RendererRegistry = RendererRegistry::new();

/// Returns `false` if a set was already registered or already in use.
pub fn register_renderers(set: RendererSet) -> bool {
    RENDERERS.register(set)
}

pub fn renderers() -> &'static RendererSet {
    RENDERERS.get()
}

/// Built-in fallback: top-level scalar fields plus the raw payload.
pub fn render_summary(payload: &Value, container: &TabContainer) -> Element {
    let fields = format::scalar_fields(payload);
    let raw = serde_json::to_string_pretty(payload).unwrap_or_default();
    let size = format::format_size(raw.len());
    let container_id = container.id;

    rsx! {
        section { class: "profile-summary profile-summary--{container_id}",
            if fields.is_empty() {
                p { class: "profile-summary__empty", {t!("summary-no-fields")} }
            } else {
                dl { class: "profile-summary__fields",
                    for (label, value) in fields.into_iter() {
                        div { class: "profile-summary__field",
                            dt { class: "profile-summary__label", "{label}" }
                            dd { class: "profile-summary__value", "{value}" }
                        }
                    }
                }
            }

            details { class: "profile-summary__raw",
                summary { {t!("summary-raw", size = size)} }
                pre { "{raw}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flame(_: &Value, _: &TabContainer) -> Element {
        std::hint::black_box("flame");
        VNode::empty()
    }

    fn memory(_: &Value, _: &TabContainer) -> Element {
        std::hint::black_box("memory");
        VNode::empty()
    }

    fn heatmap(_: &Value, _: &TabContainer) -> Element {
        std::hint::black_box("heatmap");
        VNode::empty()
    }

    fn addr(render: RenderFn) -> usize {
        render as usize
    }

    #[test]
    fn each_kind_dispatches_to_its_own_renderer() {
        let registry = RendererRegistry::new();
        assert!(registry.register(RendererSet {
            flame_graph: flame,
            memory_stats: memory,
            code_heatmap: heatmap,
        }));

        let active = registry.get();
        assert_eq!(addr(active.for_kind(ProfileKind::FlameGraph)), addr(flame));
        assert_eq!(addr(active.for_kind(ProfileKind::MemoryStats)), addr(memory));
        assert_eq!(addr(active.for_kind(ProfileKind::CodeHeatmap)), addr(heatmap));
    }

    #[test]
    fn second_registration_is_rejected() {
        let registry = RendererRegistry::new();
        assert!(registry.register(RendererSet {
            memory_stats: memory,
            ..RendererSet::summaries()
        }));
        assert!(!registry.register(RendererSet::summaries()));
        assert_eq!(
            addr(registry.get().for_kind(ProfileKind::MemoryStats)),
            addr(memory)
        );
    }

    #[test]
    fn lookup_before_registration_pins_the_summaries() {
        let registry = RendererRegistry::new();
        for kind in ProfileKind::ALL {
            assert_eq!(addr(registry.get().for_kind(kind)), addr(render_summary));
        }
        assert!(!registry.register(RendererSet {
            flame_graph: flame,
            ..RendererSet::summaries()
        }));
    }

    #[test]
    fn containers_use_fixed_ids() {
        for kind in ProfileKind::ALL {
            let container = TabContainer::for_kind(kind);
            assert_eq!(container.kind, kind);
            assert_eq!(container.id, kind.tab_id());
        }
    }
}
