use common::models::PollStats;
use yew::prelude::*;
use yew_hooks::prelude::use_window_size;
use wasm_bindgen_futures::spawn_local;
use log::warn;
use crate::components::pie_chart::PieChart;
use crate::pages::error_page::error_page;
use crate::util;
use crate::State;

/// The results section. Entering it fetches the current vote counts and
/// charts them; a failed request leaves the section in a fail state that
/// needs a page refresh.

#[function_component(ResultsPage)]
pub fn results_page() -> Html {
    let data: UseStateHandle<Option<PollStats>> = use_state(|| None);
    let loading = use_state(|| false);
    let failed = use_state(|| false);
    let window_size = use_window_size();
    let Some(state) = use_context::<State>() else { return error_page() };

    {
        let data = data.clone();
        let loading = loading.clone();
        let failed = failed.clone();
        use_effect(move || {
            if data.is_none() && !*loading && !*failed {
                loading.set(true);
                spawn_local(async move {
                    match fetch_stats().await {
                        Ok(stats) => data.set(Some(stats)),
                        Err(e) => {
                            warn!("fetching poll stats failed: {e}");
                            failed.set(true);
                        },
                    }
                    loading.set(false);
                });
            }

            || {}
        });
    }

    html! {
        <div class="page">
            <h2 class="plot-heading">{"poll results"}</h2>
            { match data.as_ref() {
                _ if *failed => html! {
                    <h3 class="plot-message">{"an error occurred - please try refreshing"}</h3>
                },
                None => html! {
                    <div class="loader-wrapper"><div class="loader"/></div>
                },
                Some(stats) if stats.total() == 0 => html! {
                    <h3 class="plot-message">{"no votes yet"}</h3>
                },
                Some(stats) => html! {
                    <PieChart
                        stats={stats.clone()}
                        theme={state.theme}
                        window_width={window_size.0}
                    />
                },
            } }
        </div>
    }
}

async fn fetch_stats() -> anyhow::Result<PollStats> {
    let resp = util::get("/poll-stats").await?;
    Ok(serde_json::from_str(&resp.text().await?)?)
}
