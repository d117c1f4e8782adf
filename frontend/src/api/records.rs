use shared::constants::RECORDS_ACTION;
use shared::records::{RecordsResponse, SpinRecord};

use super::get_json;

pub async fn fetch_records() -> Result<Vec<SpinRecord>, String> {
    let response: RecordsResponse = get_json(RECORDS_ACTION).await?;
    Ok(response.records)
}
