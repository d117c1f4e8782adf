use shared::api::ApiAck;
use shared::constants::{GET_PRIZES_ACTION, SAVE_PRIZES_ACTION};
use shared::prizes::{default_prizes, next_prize_id, Prize, PrizeCatalog};

use super::{get_json, post_json};

/// A prize as entered in the admin form, before an id is assigned.
pub struct PrizeDraft {
    pub name: String,
    pub color: String,
    pub emoji: String,
    pub min_price: i64,
    pub max_price: i64,
}

/// Loads the catalog, falling back to the built-in prizes when the
/// server is unreachable or has none configured. The wheel always has
/// something to show.
pub async fn fetch_prizes() -> PrizeCatalog {
    match get_json::<PrizeCatalog>(GET_PRIZES_ACTION).await {
        Ok(catalog) if !catalog.prizes.is_empty() => catalog,
        Ok(_) => PrizeCatalog {
            prizes: default_prizes(),
        },
        Err(err) => {
            log::error!("failed to load prizes: {}", err);
            PrizeCatalog {
                prizes: default_prizes(),
            }
        }
    }
}

pub async fn save_prizes(catalog: &PrizeCatalog) -> Result<ApiAck, String> {
    post_json(SAVE_PRIZES_ACTION, catalog).await
}

/// Appends a new prize with the next free id and saves the whole
/// catalog back.
pub async fn add_prize(draft: PrizeDraft) -> Result<Prize, String> {
    let mut catalog = fetch_prizes().await;
    let prize = Prize {
        id: next_prize_id(&catalog.prizes),
        name: draft.name,
        color: draft.color,
        emoji: draft.emoji,
        min_price: draft.min_price,
        max_price: draft.max_price,
    };
    catalog.prizes.push(prize.clone());
    save_prizes(&catalog).await?;
    Ok(prize)
}

pub async fn remove_prize(id: u32) -> Result<(), String> {
    let mut catalog = fetch_prizes().await;
    catalog.prizes.retain(|prize| prize.id != id);
    save_prizes(&catalog).await?;
    Ok(())
}
