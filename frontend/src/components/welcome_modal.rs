use shared::constants::BUSINESS_NAME;
use yew::prelude::*;

use crate::styles;

/// Shown on every visit to the play page, matching the in-store flyer.
#[function_component(WelcomeModal)]
pub fn welcome_modal() -> Html {
    let open = use_state(|| true);

    if !*open {
        return html! {};
    }

    let close = {
        let open = open.clone();
        Callback::from(move |_| open.set(false))
    };

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={close.clone()}>
            <div
                class={styles::MODAL_CARD}
                onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
            >
                <div class="text-5xl mb-3">{"🎡"}</div>
                <h2 class={styles::TEXT_H2}>
                    {format!("Welcome to {}!", BUSINESS_NAME)}
                </h2>
                <ol class="list-decimal list-inside space-y-2 text-left text-gray-600 dark:text-gray-300 my-5">
                    <li>{"Buy wigs and collect a 4-digit code from our sales rep."}</li>
                    <li>{"Enter your code to unlock the wheel."}</li>
                    <li>{"Spin once and win a guaranteed prize."}</li>
                    <li>{"Screenshot your prize and show it to claim."}</li>
                </ol>
                <button class={styles::BUTTON_PRIMARY} onclick={close}>
                    {"Got it, let's spin!"}
                </button>
            </div>
        </div>
    }
}
