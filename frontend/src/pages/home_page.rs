use yew::prelude::*;

/// The landing section: what the poll is and where to go.

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="page">
            <h2>{"course poll"}</h2>

            <p>{"This little site runs a one-question poll: how far along are you
                with the web technologies assignment? Head to the vote section to
                cast your answer - you can change it any time, and this browser
                remembers which vote is yours."}</p>

            <p>{"The results section shows where everyone else is at, as a pie
                chart that updates every time you visit it. If the colours aren't
                to your taste, the buttons at the top right switch between a dark
                and a blue look."}</p>
        </div>
    }
}
