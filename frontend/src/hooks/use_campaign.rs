use shared::campaign::CampaignStatus;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::campaign::fetch_campaign;

#[hook]
pub fn use_campaign() -> (bool, Option<CampaignStatus>) {
    let status = use_state(|| None::<CampaignStatus>);
    let loading = use_state(|| true);

    {
        let status = status.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            loading.set(true);

            spawn_local(async move {
                match fetch_campaign().await {
                    Ok(campaign) => {
                        status.set(Some(campaign));
                        loading.set(false);
                    }
                    Err(err) => {
                        log::error!("Failed to load campaign: {}", err);
                        loading.set(false);
                    }
                }
            });

            || ()
        });
    }

    (*loading, (*status).clone())
}
