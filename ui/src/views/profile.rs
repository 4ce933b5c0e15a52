use api::ProfileClient;
use dioxus::prelude::*;

use crate::core::{
    config::ViewerConfig,
    page::PagePlan,
    poll::{poll_until_ready, PollTimer},
    tabs::TabSet,
};
use crate::t;
use crate::viewer::{ProfilePage, ProgressIndicator};

/// Entry view: polls for stats, then swaps the progress indicator for the page.
#[component]
pub fn Profile() -> Element {
    let config = use_hook(ViewerConfig::detect);
    let mut page = use_signal(|| Option::<PagePlan>::None);
    let mut tabs = use_signal(TabSet::default);
    let mut attempts = use_signal(|| 0u64);
    let mut last_error = use_signal(|| Option::<String>::None);
    let mut config_error = use_signal(|| Option::<String>::None);

    use_future(move || {
        let config = config.clone();
        async move {
            let client = match config.endpoint() {
                Ok(endpoint) => ProfileClient::new(endpoint),
                Err(err) => {
                    tracing::error!(base = %config.base_url, "cannot resolve stats endpoint: {err}");
                    config_error.set(Some(err.to_string()));
                    return;
                }
            };
            tracing::info!(endpoint = %client.endpoint(), "polling for profile stats");

            let mut timer = PollTimer::new(config.poll_interval_ms);
            let ready = poll_until_ready(
                &mut timer,
                || {
                    attempts += 1;
                    client.fetch()
                },
                |err| last_error.set(Some(err.to_string())),
            )
            .await;

            // The timer is stopped by now, so this runs once per view.
            if let Some(data) = ready {
                let plan = PagePlan::from_data(&data);
                tabs.set(plan.tab_set());
                page.set(Some(plan));
            }
        }
    });

    let title = t!("page-title");

    #[cfg(debug_assertions)]
    tracing::trace!(loaded = page.read().is_some(), "profile view render");

    rsx! {
        document::Title { "{title}" }

        main { class: "viewer",
            match (page(), config_error()) {
                (Some(plan), _) => rsx! { ProfilePage { plan, tabs } },
                (None, Some(err)) => rsx! {
                    div { class: "viewer__error", {t!("config-error", error = err)} }
                },
                (None, None) => rsx! {
                    ProgressIndicator { attempts: attempts(), last_error: last_error() }
                },
            }
        }
    }
}
