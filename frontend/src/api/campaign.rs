use shared::api::ApiAck;
use shared::campaign::{CampaignStatus, UpdateCampaignRequest};
use shared::constants::CAMPAIGN_ACTION;

use super::{get_json, post_json};

pub async fn fetch_campaign() -> Result<CampaignStatus, String> {
    get_json(CAMPAIGN_ACTION).await
}

pub async fn update_campaign(request: &UpdateCampaignRequest) -> Result<ApiAck, String> {
    post_json(CAMPAIGN_ACTION, request).await
}
