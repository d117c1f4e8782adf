pub mod auth;
pub mod campaign;
pub mod customers;
pub mod prizes;
pub mod records;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::action_url;
use shared::api::ApiAck;
use shared::constants::NETWORK_ERROR;

/// Fetches one API action and decodes the JSON payload. Errors carry
/// the server's `message` when there is one, ready for an alert.
pub async fn get_json<T: DeserializeOwned>(action: &str) -> Result<T, String> {
    let response = Request::get(&action_url(action))
        .send()
        .await
        .map_err(|_| NETWORK_ERROR.to_string())?;
    decode(response).await
}

/// Posts a JSON body to one API action and decodes the response.
pub async fn post_json<B, T>(action: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(&action_url(action))
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|_| NETWORK_ERROR.to_string())?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let message = response
            .json::<ApiAck>()
            .await
            .map(|ack| ack.message)
            .unwrap_or_default();
        if message.is_empty() {
            return Err("Request failed".to_string());
        }
        return Err(message);
    }
    response.json::<T>().await.map_err(|err| err.to_string())
}
