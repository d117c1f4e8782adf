use shared::api::ApiAck;
use shared::auth::{LoginRequest, ADMIN_SESSION_KEY};
use shared::constants::LOGIN_ACTION;

use super::post_json;

pub async fn login(username: String, password: String) -> Result<(), String> {
    let request = LoginRequest { username, password };
    post_json::<_, ApiAck>(LOGIN_ACTION, &request).await?;
    set_logged_in(true);
    Ok(())
}

pub fn logout() {
    set_logged_in(false);
}

/// True while the session-storage flag from a successful login is
/// present.
pub fn is_logged_in() -> bool {
    session_storage()
        .and_then(|storage| storage.get_item(ADMIN_SESSION_KEY).ok().flatten())
        .map(|value| value == "true")
        .unwrap_or(false)
}

fn set_logged_in(logged_in: bool) {
    if let Some(storage) = session_storage() {
        if logged_in {
            let _ = storage.set_item(ADMIN_SESSION_KEY, "true");
        } else {
            let _ = storage.remove_item(ADMIN_SESSION_KEY);
        }
    }
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.session_storage().ok().flatten())
}
