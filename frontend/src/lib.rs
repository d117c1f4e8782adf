pub mod api;
pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use gloo::events::EventListener;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::pages::admin::Admin;
use crate::pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin")]
    Admin,
}

#[function_component(App)]
pub fn app() -> Html {
    let offline = use_state(|| false);

    // Surface connectivity loss instead of letting requests fail one
    // by one.
    {
        let offline = offline.clone();
        use_effect_with((), move |_| {
            let listeners = web_sys::window().map(|window| {
                let went_offline = {
                    let offline = offline.clone();
                    EventListener::new(&window, "offline", move |_| {
                        log::warn!("connection lost");
                        offline.set(true);
                    })
                };
                let came_back = {
                    let offline = offline.clone();
                    EventListener::new(&window, "online", move |_| {
                        log::info!("connection restored");
                        offline.set(false);
                    })
                };
                (went_offline, came_back)
            });
            move || drop(listeners)
        });
    }

    html! {
        <BrowserRouter>
            if *offline {
                <div class={styles::OFFLINE_BANNER}>
                    {"You are offline. Waiting for the connection to come back."}
                </div>
            }
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Base><Home /></Base> },
        Route::Admin => html! { <Base><Admin /></Base> },
    }
}
