use common::models::{PollOption, UpdateReceipt, UpdateStatus, VoteReceipt};
use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;
use log::{info, warn};
use crate::components::navbar::Route;
use crate::cookies;
use crate::pages::error_page::error_page;
use crate::util;

/// The vote section: one button per option, with the recorded vote (if
/// any) highlighted.
///
/// The first vote is POSTed and the returned id stored in a cookie; later
/// votes are PUT against that id. If the server answers a PUT with an
/// `err` status it no longer knows the id, so the stale id is dropped and
/// the vote goes out once more as a fresh POST. A successful submission
/// jumps to the results section.

#[function_component(VotePage)]
pub fn vote_page() -> Html {
    let selected: UseStateHandle<Option<PollOption>> = use_state(|| None);
    let loaded = use_state(|| false);
    let failed = use_state(|| false);
    let Some(navigator) = use_navigator() else { return error_page() };

    {
        let selected = selected.clone();
        let loaded = loaded.clone();
        use_effect(move || {
            if !*loaded {
                loaded.set(true);
                if let Some(id) = cookies::poll_id() {
                    spawn_local(async move {
                        match fetch_vote(&id).await {
                            Ok(option) => selected.set(Some(option)),
                            // the id may be stale; it gets replaced on the
                            // next submission
                            Err(e) => warn!("loading recorded vote failed: {e}"),
                        }
                    });
                }
            }

            || {}
        });
    }

    let vote = |option: PollOption| {
        let selected = selected.clone();
        let failed = failed.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let selected = selected.clone();
            let failed = failed.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match submit_vote(option).await {
                    Ok(()) => {
                        selected.set(Some(option));
                        navigator.push(&Route::Results);
                    },
                    Err(e) => {
                        warn!("submitting vote failed: {e}");
                        failed.set(true);
                    },
                }
            });
        })
    };

    if *failed {
        return html! {
            <div class="page">
                <h3 class="plot-message">{"an error occurred - please try refreshing"}</h3>
            </div>
        };
    }

    html! {
        <div class="page">
            <h2>{"how far along are you?"}</h2>
            <div class="poll-options">
                { for PollOption::ALL.iter().map(|option| {
                    let class = if *selected == Some(*option) {
                        "button poll-option highlight"
                    } else {
                        "button poll-option"
                    };
                    html! {
                        <button class={class} onclick={vote(*option)}>{option.to_string()}</button>
                    }
                }) }
            </div>
        </div>
    }
}

async fn fetch_vote(id: &str) -> anyhow::Result<PollOption> {
    let resp = util::get(&format!("/poll/{}", id)).await?;
    Ok(serde_json::from_str(&resp.text().await?)?)
}

/// Submits the vote, falling back to a fresh POST (exactly once) when the
/// stored id is no longer valid on the server.

async fn submit_vote(option: PollOption) -> anyhow::Result<()> {
    if let Some(id) = cookies::poll_id() {
        let resp = util::put(&format!("/poll/{}", id), option).await?;
        let receipt: UpdateReceipt = serde_json::from_str(&resp.text().await?)?;
        if receipt.status == UpdateStatus::Ok {
            info!("vote updated under id {}", id);
            return Ok(());
        }
        warn!("server dropped id {}, reposting", id);
        cookies::forget_poll_id();
    }

    let resp = util::post("/poll", option).await?;
    let receipt: VoteReceipt = serde_json::from_str(&resp.text().await?)?;
    cookies::save_poll_id(&receipt.id);
    info!("vote recorded under id {}", receipt.id);
    Ok(())
}
