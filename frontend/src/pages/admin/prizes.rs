use shared::constants::INVALID_PRICE_RANGE_ERROR;
use shared::prizes::Prize;
use shared::records::format_naira;
use shared::validation::validate_price_range;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::api::prizes::{add_prize, fetch_prizes, remove_prize, PrizeDraft};
use crate::hooks::Alerts;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PrizesPanelProps {
    pub alerts: Alerts,
}

#[function_component(PrizesPanel)]
pub fn prizes_panel(props: &PrizesPanelProps) -> Html {
    let prizes = use_state(Vec::<Prize>::new);
    let reload = use_state(|| 0u32);

    let name = use_state(String::new);
    let color = use_state(|| "#28a745".to_string());
    let emoji = use_state(String::new);
    let min_price = use_state(String::new);
    let max_price = use_state(String::new);
    let saving = use_state(|| false);

    {
        let prizes = prizes.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                let catalog = fetch_prizes().await;
                prizes.set(catalog.prizes);
            });
            || ()
        });
    }

    let input_setter = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_submit = {
        let alerts = props.alerts.clone();
        let name = name.clone();
        let color = color.clone();
        let emoji = emoji.clone();
        let min_price = min_price.clone();
        let max_price = max_price.clone();
        let saving = saving.clone();
        let reload = reload.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if *saving {
                return;
            }

            let min = min_price.trim().parse::<i64>().unwrap_or(-1);
            let max = max_price.trim().parse::<i64>().unwrap_or(-1);
            if validate_price_range(min, max).is_err() {
                alerts.warning(INVALID_PRICE_RANGE_ERROR);
                return;
            }

            saving.set(true);

            let alerts = alerts.clone();
            let name = name.clone();
            let color = color.clone();
            let emoji = emoji.clone();
            let min_price = min_price.clone();
            let max_price = max_price.clone();
            let saving = saving.clone();
            let reload = reload.clone();

            spawn_local(async move {
                let draft = PrizeDraft {
                    name: name.trim().to_string(),
                    color: (*color).clone(),
                    emoji: emoji.trim().to_string(),
                    min_price: min,
                    max_price: max,
                };
                match add_prize(draft).await {
                    Ok(_) => {
                        alerts.success("Prize added successfully!");
                        name.set(String::new());
                        emoji.set(String::new());
                        min_price.set(String::new());
                        max_price.set(String::new());
                        reload.set(*reload + 1);
                    }
                    Err(message) => alerts.danger(message),
                }
                saving.set(false);
            });
        })
    };

    let on_remove = {
        let alerts = props.alerts.clone();
        let reload = reload.clone();

        Callback::from(move |id: u32| {
            let confirmed = window()
                .map(|w| {
                    w.confirm_with_message("Are you sure you want to remove this prize?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let alerts = alerts.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match remove_prize(id).await {
                    Ok(()) => {
                        alerts.success("Prize removed successfully!");
                        reload.set(*reload + 1);
                    }
                    Err(message) => alerts.danger(message),
                }
            });
        })
    };

    html! {
        <div class={styles::CARD}>
            <h2 class={styles::CARD_TITLE}>{"🎁 Prizes"}</h2>

            <form class={styles::FORM} onsubmit={on_submit}>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Prize Name"}</label>
                        <input
                            type="text"
                            class={styles::INPUT}
                            value={(*name).clone()}
                            oninput={input_setter(&name)}
                            placeholder="1 Wig Stand"
                            required=true
                        />
                    </div>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Emoji"}</label>
                        <input
                            type="text"
                            class={styles::INPUT}
                            value={(*emoji).clone()}
                            oninput={input_setter(&emoji)}
                            placeholder="🎪"
                            required=true
                        />
                    </div>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Min Price (₦)"}</label>
                        <input
                            type="number"
                            class={styles::INPUT}
                            value={(*min_price).clone()}
                            oninput={input_setter(&min_price)}
                            min="0"
                            required=true
                        />
                    </div>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Max Price (₦)"}</label>
                        <input
                            type="number"
                            class={styles::INPUT}
                            value={(*max_price).clone()}
                            oninput={input_setter(&max_price)}
                            min="0"
                            required=true
                        />
                    </div>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Wheel Color"}</label>
                        <input
                            type="color"
                            class="mt-2 h-10 w-full rounded-lg"
                            value={(*color).clone()}
                            oninput={input_setter(&color)}
                        />
                    </div>
                </div>
                <button
                    type="submit"
                    disabled={*saving}
                    class={classes!(styles::BUTTON_PRIMARY, "w-full")}
                >
                    if *saving {
                        {"Saving..."}
                    } else {
                        {"💾 Add Prize"}
                    }
                </button>
            </form>

            <div class="mt-6 space-y-3">
                if prizes.is_empty() {
                    <p class="text-center text-gray-400">{"No prizes added yet"}</p>
                } else {
                    { for prizes.iter().map(|prize| {
                        let remove = {
                            let on_remove = on_remove.clone();
                            let id = prize.id;
                            Callback::from(move |_| on_remove.emit(id))
                        };
                        html! {
                            <div
                                key={prize.id}
                                class="rounded-lg border border-gray-200 dark:border-gray-700 p-4"
                                style={format!("border-left: 5px solid {};", prize.color)}
                            >
                                <div class="flex items-start justify-between">
                                    <span
                                        class="rounded px-2 py-1 text-white"
                                        style={format!("background: {};", prize.color)}
                                    >
                                        {format!("{} {}", prize.emoji, prize.name)}
                                    </span>
                                    <button onclick={remove} class={styles::BUTTON_DANGER}>
                                        {"🗑"}
                                    </button>
                                </div>
                                <p class={classes!(styles::TEXT_SMALL, "mt-2")}>
                                    {format!(
                                        "Price Range: {} - {}",
                                        format_naira(prize.min_price),
                                        format_naira(prize.max_price),
                                    )}
                                </p>
                            </div>
                        }
                    })}
                }
            </div>
        </div>
    }
}
