use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::error_page::error_page;
use crate::theme::Theme;
use crate::State;

/// A route enum containing all the routes in the app. Routing is
/// hash-based, so each route lives in the URL fragment and switching
/// sections never reloads the page.

#[derive(Clone, Routable, PartialEq)]
pub enum Route {

    /// The route to the home page.

    #[at("/")]
    Home,

    /// The route to the results section, with the pie chart.

    #[at("/results")]
    Results,

    /// The route to the vote form section.

    #[at("/vote")]
    Vote,

    /// The route to the 404 not found page.

    #[not_found]
    #[at("/404")]
    NotFound,
}

/// A navbar component with the section links and the theme buttons.

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let Some(location) = use_location() else { return error_page() };
    let here = match location.path() {
        "/" => Route::Home,
        "/results" => Route::Results,
        "/vote" => Route::Vote,
        _ => Route::NotFound,
    };

    let Some(state) = use_context::<State>() else { return error_page() };

    let section_button = |route: Route, label: &'static str| {
        let class = if here == route { "button highlight" } else { "button" };
        html! {
            <div class="navbar-item">
                <Link<Route> to={route}>
                    <button class={class}>{label}</button>
                </Link<Route>>
            </div>
        }
    };

    let theme_button = |theme: Theme| {
        let set_theme = state.set_theme.clone();
        let onclick = Callback::from(move |_: MouseEvent| set_theme.emit(theme));
        let class = if state.theme == theme { "button highlight" } else { "button" };
        html! {
            <button {onclick} class={class}>{theme.to_string()}</button>
        }
    };

    html! {
        <div class="navbar">
            { section_button(Route::Home, "home") }
            { section_button(Route::Results, "results") }
            { section_button(Route::Vote, "vote") }
            <div class="navbar-item navbar-themes">
                { for Theme::ALL.iter().map(|t| theme_button(*t)) }
            </div>
        </div>
    }
}
