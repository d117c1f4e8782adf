use chrono::Local;
use shared::constants::NO_RECORDS_ERROR;
use shared::records::{csv_filename, format_naira, records_to_csv, SpinRecord};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use yew::prelude::*;

use crate::api::records::fetch_records;
use crate::hooks::Alerts;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct RecordsPanelProps {
    pub alerts: Alerts,
}

/// Hands the browser a text/csv blob through a temporary anchor click.
fn download_csv(csv: &str, filename: &str) {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(csv));

    let options = BlobPropertyBag::new();
    options.set_type("text/csv");

    let blob = match Blob::new_with_str_sequence_and_options(&parts, &options) {
        Ok(blob) => blob,
        Err(err) => {
            log::error!("Failed to build CSV blob: {:?}", err);
            return;
        }
    };
    let url = match Url::create_object_url_with_blob(&blob) {
        Ok(url) => url,
        Err(err) => {
            log::error!("Failed to create object URL: {:?}", err);
            return;
        }
    };

    if let Some(document) = window().and_then(|w| w.document()) {
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(filename);
                anchor.click();
            }
        }
    }
    let _ = Url::revoke_object_url(&url);
}

#[function_component(RecordsPanel)]
pub fn records_panel(props: &RecordsPanelProps) -> Html {
    let records = use_state(Vec::<SpinRecord>::new);

    {
        let alerts = props.alerts.clone();
        let records = records.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_records().await {
                    Ok(list) => records.set(list),
                    Err(err) => alerts.danger(format!("Error loading records: {}", err)),
                }
            });
            || ()
        });
    }

    let on_export = {
        let alerts = props.alerts.clone();
        let records = records.clone();

        Callback::from(move |_| {
            if records.is_empty() {
                alerts.warning(NO_RECORDS_ERROR);
                return;
            }
            let csv = records_to_csv(&records);
            let today = Local::now().format("%Y-%m-%d").to_string();
            download_csv(&csv, &csv_filename(&today));
        })
    };

    html! {
        <div class={styles::CARD}>
            <div class="flex items-center justify-between">
                <h2 class={styles::CARD_TITLE}>{"📊 Spin Records"}</h2>
                <button onclick={on_export} class={styles::BUTTON_SECONDARY}>
                    {"⬇️ Export CSV"}
                </button>
            </div>

            <div class="mt-4 overflow-x-auto">
                <table class={styles::TABLE}>
                    <thead>
                        <tr>
                            <th class={styles::TABLE_HEADER}>{"Code"}</th>
                            <th class={styles::TABLE_HEADER}>{"Amount"}</th>
                            <th class={styles::TABLE_HEADER}>{"Prize"}</th>
                            <th class={styles::TABLE_HEADER}>{"Time"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if records.is_empty() {
                            <tr>
                                <td colspan="4" class={styles::TABLE_EMPTY}>
                                    {"No spin records yet"}
                                </td>
                            </tr>
                        } else {
                            { for records.iter().map(|record| html! {
                                <tr>
                                    <td class={classes!(styles::TABLE_CELL, "font-mono", "font-bold")}>
                                        {&record.code}
                                    </td>
                                    <td class={styles::TABLE_CELL}>{format_naira(record.amount)}</td>
                                    <td class={styles::TABLE_CELL}>{&record.prize}</td>
                                    <td class={styles::TABLE_CELL}>{&record.time}</td>
                                </tr>
                            })}
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
