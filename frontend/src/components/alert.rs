use yew::prelude::*;

use crate::hooks::{AlertLevel, Alerts};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct AlertStackProps {
    pub alerts: Alerts,
}

fn level_class(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Success => styles::ALERT_SUCCESS,
        AlertLevel::Info => styles::ALERT_INFO,
        AlertLevel::Warning => styles::ALERT_WARNING,
        AlertLevel::Danger => styles::ALERT_DANGER,
    }
}

#[function_component(AlertStack)]
pub fn alert_stack(props: &AlertStackProps) -> Html {
    if props.alerts.alerts.is_empty() {
        return html! {};
    }

    html! {
        <div class={styles::ALERT_STACK}>
            { for props.alerts.alerts.iter().map(|alert| {
                let onclick = {
                    let dismiss = props.alerts.dismiss.clone();
                    let id = alert.id;
                    Callback::from(move |_| dismiss.emit(id))
                };
                html! {
                    <div key={alert.id} class={classes!(styles::ALERT_BASE, level_class(alert.level))}>
                        <span class="flex-1">{&alert.message}</span>
                        <button {onclick} class="ml-3 text-lg font-bold leading-none opacity-60 hover:opacity-100">
                            {"×"}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
