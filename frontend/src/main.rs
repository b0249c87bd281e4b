use yew::prelude::*;
use yew_router::prelude::*;
use components::navbar::*;
use pages::error_page::error_page;
use pages::home_page::HomePage;
use pages::results_page::ResultsPage;
use pages::vote_page::VotePage;
use gloo::utils::body;
use theme::Theme;

mod pages;
mod components;
mod cookies;
mod theme;
mod util;

/// App-wide state: the active theme and the callback that changes it.

#[derive(Clone, PartialEq)]
pub struct State {
    pub theme: Theme,
    pub set_theme: Callback<Theme>,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <HomePage />
        },
        Route::Results => html! {
            <ResultsPage />
        },
        Route::Vote => html! {
            <VotePage />
        },
        Route::NotFound => html! {
            <NotFoundPage />
        },
    }
}

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    let Some(navigator) = use_navigator() else { return error_page() };
    let onclick = Callback::from(move |_| navigator.push(&Route::Home));

    html! {
        <div class="page">
            <div style="display: flex; justify-content: center">
                <h1>{ "404 not found" }</h1>
            </div>
            <div style="display: flex; justify-content: center">
                <button {onclick} class="button">{ "go home" }</button>
            </div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(|| {
        // a missing or unparsable cookie falls back to the default, which
        // is written back so the choice sticks
        let theme = cookies::theme().unwrap_or_default();
        cookies::save_theme(theme);
        body().set_class_name(theme.body_class());
        theme
    });

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |t: Theme| {
            cookies::save_theme(t);
            body().set_class_name(t.body_class());
            theme.set(t);
        })
    };

    let state = State {
        theme: *theme,
        set_theme,
    };

    html! {
        <ContextProvider<State> context={state}>
            <HashRouter>
                <Navbar />
                <Switch<Route> render={switch} />
            </HashRouter>
        </ContextProvider<State>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
