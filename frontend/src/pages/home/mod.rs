mod wheel_canvas;

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use shared::campaign::whatsapp_order_link;
use shared::constants::{BUSINESS_NAME, INVALID_CODE_ERROR};
use shared::customer::Customer;
use shared::prizes::Prize;
use shared::validation::validate_customer_code;
use shared::wheel::{build_segments, SpinUpdate, SpinWheel};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    HtmlElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::api::customers::{record_spin, verify_code};
use crate::api::prizes::fetch_prizes;
use crate::components::{AlertStack, CampaignBanner, Confetti, PrizeShowcase, WelcomeModal};
use crate::hooks::{use_alerts, use_campaign};
use crate::styles;

use wheel_canvas::WheelCanvas;

/// Prize summary shown once the wheel has settled.
#[derive(Clone, PartialEq)]
struct SpinOutcome {
    prize: String,
    emoji: String,
    time: String,
}

#[function_component(Home)]
pub fn home() -> Html {
    let alerts = use_alerts();
    let (campaign_loading, campaign) = use_campaign();

    let catalog = use_state(Vec::<Prize>::new);
    let code = use_state(String::new);
    let verifying = use_state(|| false);
    let customer = use_state(|| None::<Customer>);

    let wheel = use_mut_ref(|| SpinWheel::new(Vec::new()));
    let rotation = use_state(|| 0.0f64);
    let is_spinning = use_state(|| false);
    let outcome = use_state(|| None::<SpinOutcome>);
    let result_ref = use_node_ref();

    // The catalog feeds both the showcase grid and the wheel faces.
    {
        let catalog = catalog.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let prizes = fetch_prizes().await;
                catalog.set(prizes.prizes);
            });
            || ()
        });
    }

    // Bring the result card into view once it exists.
    {
        let result_ref = result_ref.clone();
        use_effect_with(outcome.is_some(), move |has_outcome| {
            if *has_outcome {
                if let Some(element) = result_ref.cast::<HtmlElement>() {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Center);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
            || ()
        });
    }

    let on_code_input = {
        let code = code.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            code.set(input.value());
        })
    };

    let on_entry_submit = {
        let alerts = alerts.clone();
        let code = code.clone();
        let verifying = verifying.clone();
        let customer = customer.clone();
        let catalog = catalog.clone();
        let wheel = wheel.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if *verifying {
                return;
            }

            let entered = code.trim().to_string();
            if validate_customer_code(&entered).is_err() {
                alerts.warning(INVALID_CODE_ERROR);
                return;
            }

            verifying.set(true);

            let alerts = alerts.clone();
            let verifying = verifying.clone();
            let customer = customer.clone();
            let catalog = catalog.clone();
            let wheel = wheel.clone();

            spawn_local(async move {
                match verify_code(entered).await {
                    Ok(verified) => {
                        let segments = build_segments(
                            &verified.prize,
                            &catalog,
                            &mut rand::thread_rng(),
                        );
                        wheel.borrow_mut().set_segments(segments);
                        customer.set(Some(verified));
                    }
                    Err(message) => alerts.danger(message),
                }
                verifying.set(false);
            });
        })
    };

    let on_spin = {
        let alerts = alerts.clone();
        let customer = customer.clone();
        let wheel = wheel.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let outcome = outcome.clone();

        Callback::from(move |_| {
            let current = match (*customer).clone() {
                Some(current) => current,
                None => return,
            };

            if !wheel
                .borrow_mut()
                .start_spin(js_sys::Date::now(), &mut rand::thread_rng())
            {
                return;
            }
            is_spinning.set(true);

            let alerts = alerts.clone();
            let wheel = wheel.clone();
            let rotation = rotation.clone();
            let is_spinning = is_spinning.clone();
            let outcome = outcome.clone();

            let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let g = f.clone();

            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let update = wheel.borrow_mut().advance(js_sys::Date::now());
                rotation.set(wheel.borrow().rotation());

                match update {
                    SpinUpdate::Finished(_) => {
                        is_spinning.set(false);
                        outcome.set(Some(SpinOutcome {
                            prize: current.prize.clone(),
                            emoji: current.prize_emoji.clone(),
                            time: Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
                        }));

                        let alerts = alerts.clone();
                        let code = current.code.clone();
                        spawn_local(async move {
                            if let Err(err) = record_spin(code).await {
                                alerts.danger(format!("Error recording spin: {}", err));
                            }
                        });
                    }
                    _ => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.request_animation_frame(
                                f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            }) as Box<dyn FnMut()>));

            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(
                    g.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                );
            }
        })
    };

    let on_screenshot = {
        let alerts = alerts.clone();
        Callback::from(move |_| {
            alerts.info("Take a screenshot now and show it to our sales representative!");
        })
    };

    html! {
        <>
            <AlertStack alerts={alerts.clone()} />

            if campaign_loading {
                <div class={styles::CONTAINER_SM}>
                    <p class="py-12 text-center text-gray-400">{"Loading..."}</p>
                </div>
            } else if let Some(status) = campaign.clone() {
                <CampaignBanner campaign={status.campaign.clone()} is_active={status.is_active} />
                <WelcomeModal />

                <div class={styles::CONTAINER_SM}>
                    <div class="text-center my-6">
                        <h1 class={styles::TEXT_H1}>
                            {format!("🎡 {} Spin & Win", BUSINESS_NAME)}
                        </h1>
                        <p class={classes!(styles::TEXT_BODY, "mt-2")}>
                            {"Buy wigs, spin the wheel, win beauty prizes!"}
                        </p>
                    </div>

                    if !status.is_active {
                        <div class={classes!(styles::CARD, "text-center")}>
                            <h2 class="text-xl font-bold text-red-600 mb-2">{"❌ Campaign Ended"}</h2>
                            <p class={styles::TEXT_BODY}>
                                {"The spin and win campaign is not currently active."}
                            </p>
                            <a
                                href={whatsapp_order_link(&status.campaign.whatsapp_number)}
                                target="_blank"
                                class={classes!(styles::BUTTON_WHATSAPP, "mt-4")}
                            >
                                {"💬 Chat us on WhatsApp"}
                            </a>
                        </div>
                    } else if let Some(current) = (*customer).clone() {
                        <div class={classes!(styles::CARD, "text-center")}>
                            <p class={styles::TEXT_BODY}>
                                {"Welcome! Code: "}
                                <span class="font-mono font-bold text-rose-600">{&current.code}</span>
                            </p>

                            <div class="flex justify-center my-6">
                                <WheelCanvas
                                    segments={wheel.borrow().segments().to_vec()}
                                    rotation={*rotation}
                                />
                            </div>

                            <button
                                onclick={on_spin}
                                disabled={*is_spinning || outcome.is_some()}
                                class={styles::SPIN_BUTTON}
                            >
                                if *is_spinning {
                                    {"⏳ SPINNING..."}
                                } else if outcome.is_some() {
                                    {"🎉 DONE!"}
                                } else {
                                    {"🎰 SPIN THE WHEEL"}
                                }
                            </button>
                        </div>

                        if outcome.is_some() {
                            <Confetti />
                        }

                        if let Some(result) = (*outcome).clone() {
                            <div ref={result_ref.clone()} class={classes!(styles::CARD, "mt-6", "text-center")}>
                                <h2 class="text-2xl font-bold text-green-600">{"🎉 Congratulations!"}</h2>
                                <div class="text-7xl my-4">{&result.emoji}</div>
                                <p class="text-xl font-bold text-gray-900 dark:text-white">{&result.prize}</p>
                                <p class={classes!(styles::TEXT_SMALL, "mt-1")}>
                                    {format!("Spun at {}", result.time)}
                                </p>
                                <button
                                    onclick={on_screenshot}
                                    class={classes!(styles::BUTTON_PRIMARY, "mt-4")}
                                >
                                    {"📸 Take Screenshot"}
                                </button>
                            </div>
                        }
                    } else {
                        <div class={styles::CARD}>
                            <h2 class={styles::CARD_TITLE}>{"Enter Your Code"}</h2>
                            <p class={classes!(styles::TEXT_SMALL, "mt-1")}>
                                {"Type the 4-digit code from your purchase receipt."}
                            </p>
                            <form class={styles::FORM} onsubmit={on_entry_submit}>
                                <input
                                    type="text"
                                    class={classes!(styles::INPUT, "text-center", "text-2xl", "tracking-[0.5em]", "font-mono")}
                                    value={(*code).clone()}
                                    oninput={on_code_input}
                                    maxlength="4"
                                    inputmode="numeric"
                                    placeholder="0000"
                                />
                                <button
                                    type="submit"
                                    disabled={*verifying}
                                    class={classes!(styles::BUTTON_PRIMARY, "w-full")}
                                >
                                    if *verifying {
                                        {"Loading..."}
                                    } else {
                                        {"➡️ Continue to Spin"}
                                    }
                                </button>
                            </form>
                        </div>

                        <div class="mt-6">
                            <h3 class={classes!(styles::CARD_TITLE, "text-center", "mb-3")}>
                                {"Prizes You Can Win"}
                            </h3>
                            <PrizeShowcase prizes={(*catalog).clone()} />
                        </div>
                    }
                </div>
            } else {
                <div class={styles::CONTAINER_SM}>
                    <div class={classes!(styles::CARD, "text-center", "my-8")}>
                        <p class="text-red-600">{"Error initializing app. Please refresh the page."}</p>
                    </div>
                </div>
            }
        </>
    }
}
