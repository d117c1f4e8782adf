use shared::constants::INVALID_CODE_ERROR;
use shared::customer::{AddCustomerRequest, Customer};
use shared::records::format_naira;
use shared::validation::{validate_customer_code, validate_purchase_amount};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::api::customers::{add_customer, fetch_customers, remove_customer};
use crate::hooks::Alerts;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CustomersPanelProps {
    pub alerts: Alerts,
}

#[function_component(CustomersPanel)]
pub fn customers_panel(props: &CustomersPanelProps) -> Html {
    let customers = use_state(Vec::<Customer>::new);
    let reload = use_state(|| 0u32);

    let code = use_state(String::new);
    let amount = use_state(String::new);
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let saving = use_state(|| false);

    {
        let alerts = props.alerts.clone();
        let customers = customers.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                match fetch_customers().await {
                    Ok(list) => customers.set(list),
                    Err(err) => alerts.danger(format!("Error loading customers: {}", err)),
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
        let code = code.clone();
        let amount = amount.clone();
        let name = name.clone();
        let phone = phone.clone();
        let saving = saving.clone();
        let reload = reload.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if *saving {
                return;
            }

            let entered_code = code.trim().to_string();
            if validate_customer_code(&entered_code).is_err() {
                alerts.warning(INVALID_CODE_ERROR);
                return;
            }

            let parsed_amount = amount.trim().parse::<i64>().unwrap_or(0);
            if validate_purchase_amount(parsed_amount).is_err() {
                alerts.warning("Please enter a valid purchase amount!");
                return;
            }

            saving.set(true);

            let alerts = alerts.clone();
            let code = code.clone();
            let amount = amount.clone();
            let name = name.clone();
            let phone = phone.clone();
            let saving = saving.clone();
            let reload = reload.clone();

            spawn_local(async move {
                let request = AddCustomerRequest {
                    code: entered_code,
                    amount: parsed_amount,
                    name: name.trim().to_string(),
                    phone: phone.trim().to_string(),
                };
                match add_customer(&request).await {
                    Ok(_) => {
                        alerts.success("Customer added successfully!");
                        code.set(String::new());
                        amount.set(String::new());
                        name.set(String::new());
                        phone.set(String::new());
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

        Callback::from(move |customer_code: String| {
            let confirmed = window()
                .map(|w| {
                    w.confirm_with_message("Are you sure you want to remove this customer?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let alerts = alerts.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match remove_customer(customer_code).await {
                    Ok(_) => {
                        alerts.success("Customer removed successfully!");
                        reload.set(*reload + 1);
                    }
                    Err(message) => alerts.danger(message),
                }
            });
        })
    };

    html! {
        <div class={styles::CARD}>
            <h2 class={styles::CARD_TITLE}>{"👥 Customers"}</h2>

            <form class={classes!(styles::FORM, "grid", "grid-cols-1", "md:grid-cols-2", "gap-4")} onsubmit={on_submit}>
                <div>
                    <label class={styles::TEXT_LABEL}>{"4-Digit Code"}</label>
                    <input
                        type="text"
                        class={styles::INPUT}
                        value={(*code).clone()}
                        oninput={input_setter(&code)}
                        maxlength="4"
                        inputmode="numeric"
                        placeholder="0000"
                        required=true
                    />
                </div>
                <div>
                    <label class={styles::TEXT_LABEL}>{"Purchase Amount (₦)"}</label>
                    <input
                        type="number"
                        class={styles::INPUT}
                        value={(*amount).clone()}
                        oninput={input_setter(&amount)}
                        min="1"
                        placeholder="75000"
                        required=true
                    />
                </div>
                <div>
                    <label class={styles::TEXT_LABEL}>{"Name (optional)"}</label>
                    <input
                        type="text"
                        class={styles::INPUT}
                        value={(*name).clone()}
                        oninput={input_setter(&name)}
                    />
                </div>
                <div>
                    <label class={styles::TEXT_LABEL}>{"Phone (optional)"}</label>
                    <input
                        type="tel"
                        class={styles::INPUT}
                        value={(*phone).clone()}
                        oninput={input_setter(&phone)}
                    />
                </div>
                <div class="md:col-span-2">
                    <button
                        type="submit"
                        disabled={*saving}
                        class={classes!(styles::BUTTON_PRIMARY, "w-full")}
                    >
                        if *saving {
                            {"Saving..."}
                        } else {
                            {"➕ Save Customer"}
                        }
                    </button>
                </div>
            </form>

            <div class="mt-6 overflow-x-auto">
                <table class={styles::TABLE}>
                    <thead>
                        <tr>
                            <th class={styles::TABLE_HEADER}>{"Code"}</th>
                            <th class={styles::TABLE_HEADER}>{"Amount"}</th>
                            <th class={styles::TABLE_HEADER}>{"Prize"}</th>
                            <th class={styles::TABLE_HEADER}>{"Status"}</th>
                            <th class={styles::TABLE_HEADER}>{"Action"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if customers.is_empty() {
                            <tr>
                                <td colspan="5" class={styles::TABLE_EMPTY}>
                                    {"No customers added yet"}
                                </td>
                            </tr>
                        } else {
                            { for customers.iter().map(|customer| {
                                let remove = {
                                    let on_remove = on_remove.clone();
                                    let customer_code = customer.code.clone();
                                    Callback::from(move |_| on_remove.emit(customer_code.clone()))
                                };
                                html! {
                                    <tr key={customer.code.clone()}>
                                        <td class={classes!(styles::TABLE_CELL, "font-mono", "font-bold")}>
                                            {&customer.code}
                                        </td>
                                        <td class={styles::TABLE_CELL}>{format_naira(customer.amount)}</td>
                                        <td class={styles::TABLE_CELL}>
                                            <span
                                                class="rounded px-2 py-1 text-white"
                                                style={format!("background: {};", customer.prize_color)}
                                            >
                                                {format!("{} {}", customer.prize_emoji, customer.prize)}
                                            </span>
                                        </td>
                                        <td class={styles::TABLE_CELL}>
                                            if customer.has_spun {
                                                <span class={styles::BADGE_SUCCESS}>{"Claimed"}</span>
                                            } else {
                                                <span class={styles::BADGE_WARNING}>{"Pending"}</span>
                                            }
                                        </td>
                                        <td class={styles::TABLE_CELL}>
                                            <button onclick={remove} class={styles::BUTTON_DANGER}>
                                                {"🗑"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
