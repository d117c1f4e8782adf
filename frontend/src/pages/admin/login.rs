use shared::rate_limit::{RateLimiter, ADMIN_LOGIN_KEY, LOGIN_RATE_LIMIT_ERROR};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::hooks::Alerts;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub alerts: Alerts,
    pub on_login: Callback<()>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let busy = use_state(|| false);

    // Browser-side throttle on login attempts; the window resets a
    // minute after the first recent attempt.
    let limiter = use_mut_ref(RateLimiter::default);

    let on_username = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let alerts = props.alerts.clone();
        let on_login = props.on_login.clone();
        let username = username.clone();
        let password = password.clone();
        let busy = busy.clone();
        let limiter = limiter.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if *busy {
                return;
            }

            if !limiter.borrow_mut().check(ADMIN_LOGIN_KEY, js_sys::Date::now()) {
                alerts.danger(LOGIN_RATE_LIMIT_ERROR);
                return;
            }

            busy.set(true);

            let alerts = alerts.clone();
            let on_login = on_login.clone();
            let username_value = (*username).clone();
            let password_value = (*password).clone();
            let busy = busy.clone();

            spawn_local(async move {
                match api::auth::login(username_value, password_value).await {
                    Ok(()) => {
                        alerts.success("Login successful!");
                        on_login.emit(());
                    }
                    Err(message) => alerts.danger(message),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="max-w-sm mx-auto mt-12">
            <div class={styles::CARD}>
                <h1 class={classes!(styles::TEXT_H2, "text-center")}>{"🔐 Admin Login"}</h1>
                <form class={styles::FORM} onsubmit={on_submit}>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Username"}</label>
                        <input
                            type="text"
                            class={styles::INPUT}
                            value={(*username).clone()}
                            oninput={on_username}
                            required=true
                        />
                    </div>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Password"}</label>
                        <input
                            type="password"
                            class={styles::INPUT}
                            value={(*password).clone()}
                            oninput={on_password}
                            required=true
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={*busy}
                        class={classes!(styles::BUTTON_PRIMARY, "w-full")}
                    >
                        if *busy {
                            {"Logging in..."}
                        } else {
                            {"Login"}
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
