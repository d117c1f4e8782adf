use chrono::NaiveDate;
use shared::campaign::{whatsapp_order_link, Campaign};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CampaignBannerProps {
    pub campaign: Campaign,
    pub is_active: bool,
}

/// "2024-12-01" shown as "December 1, 2024". Unparseable input is shown
/// as stored.
fn long_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

#[function_component(CampaignBanner)]
pub fn campaign_banner(props: &CampaignBannerProps) -> Html {
    if props.is_active {
        html! {
            <div class={styles::BANNER_ACTIVE}>
                {format!(
                    "📅 Campaign Active! Valid from {} to {}",
                    long_date(&props.campaign.start_date),
                    long_date(&props.campaign.end_date),
                )}
            </div>
        }
    } else {
        html! {
            <div class={styles::BANNER_ENDED}>
                <span>{"❌ Sales Campaign Ended!"}</span>
                <span class="mx-3 opacity-60">{"|"}</span>
                <a
                    href={whatsapp_order_link(&props.campaign.whatsapp_number)}
                    target="_blank"
                    class="underline hover:opacity-80"
                >
                    {"💬 Chat us on WhatsApp to buy wigs"}
                </a>
            </div>
        }
    }
}
