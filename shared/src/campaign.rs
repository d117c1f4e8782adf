use serde::{Deserialize, Serialize};

use crate::constants::WHATSAPP_GREETING;

/// Campaign window and contact details as stored by the server. Dates
/// are `YYYY-MM-DD` strings straight from the date inputs.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub start_date: String,
    pub end_date: String,
    pub whatsapp_number: String,
}

/// Whether the campaign is currently running is decided by the server,
/// never re-derived from the dates on the client.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStatus {
    pub campaign: Campaign,
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignRequest {
    pub start_date: String,
    pub end_date: String,
    pub whatsapp_number: String,
}

/// Deep link that opens a WhatsApp chat with the shop, greeting
/// prefilled.
pub fn whatsapp_order_link(number: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number,
        WHATSAPP_GREETING.replace(' ', "%20")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_wire_format_is_camel_case() {
        let status = CampaignStatus {
            campaign: Campaign {
                start_date: "2025-06-01".to_string(),
                end_date: "2025-06-30".to_string(),
                whatsapp_number: "2348012345678".to_string(),
            },
            is_active: true,
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"startDate\":\"2025-06-01\""));
        assert!(json.contains("\"whatsappNumber\":\"2348012345678\""));
        assert!(json.contains("\"isActive\":true"));
    }

    #[test]
    fn test_whatsapp_order_link() {
        assert_eq!(
            whatsapp_order_link("2348012345678"),
            "https://wa.me/2348012345678?text=Hello%20Sunkey%20Beauty%20Gallery,%20I%20want%20to%20buy%20wigs"
        );
    }
}
