use yew::prelude::*;

/// A bare error page, for the extreme cases where we might not even have
/// the router or the app context.

pub fn error_page() -> Html {
    html! {
        <div style="text-align: center">
            <h2>{ "something went wrong setting the page up" }</h2>
            <h2>{ "a refresh usually sorts it out" }</h2>
        </div>
    }
}
