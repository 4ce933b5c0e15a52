use dioxus::prelude::*;

use crate::t;

/// Placeholder shown while the stats endpoint still answers `{}`.
#[component]
pub fn ProgressIndicator(attempts: u64, #[props(!optional)] last_error: Option<String>) -> Element {
    rsx! {
        div { id: "progress-indicator", role: "status",
            span { class: "progress-indicator__spinner", aria_hidden: "true" }
            p { class: "progress-indicator__label", {t!("progress-waiting")} }
            if attempts > 0 {
                p { class: "progress-indicator__meta", {t!("progress-attempts", count = attempts)} }
            }
            if let Some(err) = last_error {
                p { class: "progress-indicator__error", {t!("progress-last-error", error = err)} }
            }
        }
    }
}
