use chrono::NaiveDate;
use shared::campaign::{CampaignStatus, UpdateCampaignRequest};
use shared::constants::INVALID_DATE_RANGE_ERROR;
use shared::validation::{validate_campaign_dates, validate_whatsapp_number};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::campaign::{fetch_campaign, update_campaign};
use crate::hooks::Alerts;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CampaignPanelProps {
    pub alerts: Alerts,
}

fn long_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

#[function_component(CampaignPanel)]
pub fn campaign_panel(props: &CampaignPanelProps) -> Html {
    let status = use_state(|| None::<CampaignStatus>);
    let reload = use_state(|| 0u32);

    let start_date = use_state(String::new);
    let end_date = use_state(String::new);
    let whatsapp = use_state(String::new);
    let saving = use_state(|| false);

    // Load the current window and prefill the form with it.
    {
        let alerts = props.alerts.clone();
        let status = status.clone();
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let whatsapp = whatsapp.clone();

        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                match fetch_campaign().await {
                    Ok(current) => {
                        start_date.set(current.campaign.start_date.clone());
                        end_date.set(current.campaign.end_date.clone());
                        whatsapp.set(current.campaign.whatsapp_number.clone());
                        status.set(Some(current));
                    }
                    Err(err) => alerts.danger(format!("Error loading campaign: {}", err)),
                }
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
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let whatsapp = whatsapp.clone();
        let saving = saving.clone();
        let reload = reload.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if *saving {
                return;
            }

            if validate_campaign_dates(&start_date, &end_date).is_err() {
                alerts.warning(INVALID_DATE_RANGE_ERROR);
                return;
            }
            if validate_whatsapp_number(whatsapp.trim()).is_err() {
                alerts.warning("Please enter a valid WhatsApp number!");
                return;
            }

            saving.set(true);

            let alerts = alerts.clone();
            let request = UpdateCampaignRequest {
                start_date: (*start_date).clone(),
                end_date: (*end_date).clone(),
                whatsapp_number: whatsapp.trim().to_string(),
            };
            let saving = saving.clone();
            let reload = reload.clone();

            spawn_local(async move {
                match update_campaign(&request).await {
                    Ok(_) => {
                        alerts.success("Campaign updated successfully!");
                        reload.set(*reload + 1);
                    }
                    Err(message) => alerts.danger(message),
                }
                saving.set(false);
            });
        })
    };

    html! {
        <div class={styles::CARD}>
            <h2 class={styles::CARD_TITLE}>{"📅 Campaign"}</h2>

            if let Some(current) = &*status {
                <div
                    class={classes!(
                        "mt-4", "rounded-lg", "border", "p-4",
                        if current.is_active {
                            "border-green-200 bg-green-50 dark:border-green-800 dark:bg-green-900/30"
                        } else {
                            "border-yellow-200 bg-yellow-50 dark:border-yellow-800 dark:bg-yellow-900/30"
                        }
                    )}
                >
                    <p class="font-semibold text-gray-900 dark:text-white">{"Current Campaign Status"}</p>
                    <p class={classes!(styles::TEXT_SMALL, "mt-1")}>
                        {"Start Date: "}{long_date(&current.campaign.start_date)}
                        <br />
                        {"End Date: "}{long_date(&current.campaign.end_date)}
                        <br />
                        {"WhatsApp: "}{&current.campaign.whatsapp_number}
                    </p>
                    <div class="mt-2">
                        if current.is_active {
                            <span class={styles::BADGE_SUCCESS}>{"Active"}</span>
                        } else {
                            <span class={styles::BADGE_DANGER}>{"Inactive"}</span>
                        }
                    </div>
                </div>
            }

            <form class={styles::FORM} onsubmit={on_submit}>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Start Date"}</label>
                        <input
                            type="date"
                            class={styles::INPUT}
                            value={(*start_date).clone()}
                            oninput={input_setter(&start_date)}
                            required=true
                        />
                    </div>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"End Date"}</label>
                        <input
                            type="date"
                            class={styles::INPUT}
                            value={(*end_date).clone()}
                            oninput={input_setter(&end_date)}
                            required=true
                        />
                    </div>
                </div>
                <div>
                    <label class={styles::TEXT_LABEL}>{"WhatsApp Number"}</label>
                    <input
                        type="tel"
                        class={styles::INPUT}
                        value={(*whatsapp).clone()}
                        oninput={input_setter(&whatsapp)}
                        placeholder="2348012345678"
                        required=true
                    />
                </div>
                <button
                    type="submit"
                    disabled={*saving}
                    class={classes!(styles::BUTTON_PRIMARY, "w-full")}
                >
                    if *saving {
                        {"Updating..."}
                    } else {
                        {"✅ Update Campaign"}
                    }
                </button>
            </form>
        </div>
    }
}
