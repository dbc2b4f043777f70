mod api;
mod components;
mod engine;
mod model;
mod session;

use yew::prelude::*;

use components::{AuthScreen, LedgerPage};

#[function_component(App)]
fn app() -> Html {
    let authenticated = use_state(|| session::access_token().is_some());

    let on_authenticated = {
        let authenticated = authenticated.clone();
        Callback::from(move |_| authenticated.set(true))
    };

    let on_logout = {
        let authenticated = authenticated.clone();
        Callback::from(move |_| {
            session::clear_token();
            authenticated.set(false);
        })
    };

    if *authenticated {
        html! { <LedgerPage on_logout={on_logout} /> }
    } else {
        html! { <AuthScreen on_authenticated={on_authenticated} /> }
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
